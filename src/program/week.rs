//! Selected-week navigation for the program view.

use super::scheme::Week;

/// The currently selected week, moved one step at a time and clamped to the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekCursor {
    week: Week,
}

impl WeekCursor {
    /// Start at the first week.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a configured index, clamped into range.
    pub fn starting_at(index: u8) -> Self {
        Self {
            week: Week::clamped(index),
        }
    }

    pub fn week(&self) -> Week {
        self.week
    }

    pub fn can_advance(&self) -> bool {
        self.week < Week::LAST
    }

    pub fn can_retreat(&self) -> bool {
        self.week > Week::FIRST
    }

    /// Move to the next week; stays put on the last week.
    pub fn advance(&mut self) -> Week {
        if self.can_advance() {
            self.week = Week::clamped(self.week.index() + 1);
        }
        self.week
    }

    /// Move to the previous week; stays put on the first week.
    pub fn retreat(&mut self) -> Week {
        if self.can_retreat() {
            self.week = Week::clamped(self.week.index() - 1);
        }
        self.week
    }

    /// Display label, e.g. `Week 1`.
    pub fn label(&self) -> String {
        self.week.to_string()
    }
}
