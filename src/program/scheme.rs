//! Four-week percentage scheme.
//!
//! Volume per session stays at 24 reps while intensity climbs each week.

use serde::{Deserialize, Serialize};

/// Number of weeks in a training cycle.
pub const WEEKS_PER_CYCLE: usize = 4;

/// Prescription for one week of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekScheme {
    pub sets: u32,
    pub reps: u32,
    /// Fraction of 1RM, in (0, 1]
    pub percentage: f64,
}

/// The fixed cycle, indexed by week.
pub const WEEK_SCHEMES: [WeekScheme; WEEKS_PER_CYCLE] = [
    WeekScheme {
        sets: 3,
        reps: 8,
        percentage: 0.575,
    },
    WeekScheme {
        sets: 4,
        reps: 6,
        percentage: 0.65,
    },
    WeekScheme {
        sets: 6,
        reps: 4,
        percentage: 0.725,
    },
    WeekScheme {
        sets: 8,
        reps: 3,
        percentage: 0.8,
    },
];

/// A week of the cycle, 0 through 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Week(u8);

impl Week {
    pub const FIRST: Week = Week(0);
    pub const LAST: Week = Week(WEEKS_PER_CYCLE as u8 - 1);

    /// All weeks in order.
    pub const ALL: [Week; WEEKS_PER_CYCLE] = [Week(0), Week(1), Week(2), Week(3)];

    /// Create a week from a zero-based index. Returns `None` outside 0-3.
    pub fn new(index: u8) -> Option<Self> {
        if (index as usize) < WEEKS_PER_CYCLE {
            Some(Week(index))
        } else {
            None
        }
    }

    /// Create a week, clamping the index into range.
    pub fn clamped(index: u8) -> Self {
        Week(index.min(Self::LAST.0))
    }

    /// Zero-based index.
    pub fn index(self) -> u8 {
        self.0
    }

    /// One-based week number for display.
    pub fn number(self) -> u8 {
        self.0 + 1
    }

    /// The prescription for this week.
    pub fn scheme(self) -> WeekScheme {
        WEEK_SCHEMES[self.0 as usize]
    }
}

impl TryFrom<u8> for Week {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Week::new(index).ok_or_else(|| format!("week index {} out of range 0-3", index))
    }
}

impl From<Week> for u8 {
    fn from(week: Week) -> Self {
        week.0
    }
}

impl std::fmt::Display for Week {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Week {}", self.number())
    }
}
