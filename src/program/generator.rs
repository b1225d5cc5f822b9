//! Program generation from a 1RM.
//!
//! Pure functions: the same `(max, week)` always yields the same row.

use serde::{Deserialize, Serialize};

use super::scheme::{Week, WEEKS_PER_CYCLE};
use crate::lifts::LiftEntry;

/// Smallest practical change in load; working weights are rounded up to a multiple of this.
pub const LOAD_INCREMENT: f64 = 2.5;

/// Prescription for one lift in one week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgramRow {
    pub sets: u32,
    pub reps: u32,
    /// Fraction of 1RM
    pub percentage: f64,
    /// Working weight, a multiple of `LOAD_INCREMENT`
    pub weight: f64,
    /// Total volume (sets x reps x weight), whole number
    pub total: u64,
}

impl ProgramRow {
    /// Percentage formatted for display, e.g. `57.5%`.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage * 100.0)
    }

    /// Weight formatted for display without a trailing `.0`.
    pub fn weight_label(&self) -> String {
        if self.weight.fract() == 0.0 {
            format!("{:.0}", self.weight)
        } else {
            format!("{}", self.weight)
        }
    }
}

/// A program row labelled with its lift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramLine {
    pub name: String,
    pub row: ProgramRow,
}

/// Round a raw load up to the next multiple of `LOAD_INCREMENT`.
pub fn round_up_to_increment(raw: f64) -> f64 {
    LOAD_INCREMENT * (raw / LOAD_INCREMENT).ceil()
}

/// Generate the prescription for a 1RM of `max` in `week`.
pub fn generate(max: f64, week: Week) -> ProgramRow {
    let scheme = week.scheme();
    let raw = max * scheme.percentage;
    let weight = round_up_to_increment(raw);
    let total = (f64::from(scheme.sets * scheme.reps) * weight).round() as u64;

    ProgramRow {
        sets: scheme.sets,
        reps: scheme.reps,
        percentage: scheme.percentage,
        weight,
        total,
    }
}

/// Generate all four weeks for a 1RM.
pub fn generate_cycle(max: f64) -> [ProgramRow; WEEKS_PER_CYCLE] {
    Week::ALL.map(|week| generate(max, week))
}

/// Generate one week's rows for every lift, in the order given.
pub fn program_table(lifts: &[LiftEntry], week: Week) -> Vec<ProgramLine> {
    lifts
        .iter()
        .map(|lift| ProgramLine {
            name: lift.name.clone(),
            row: generate(lift.max, week),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(index: u8) -> Week {
        Week::new(index).unwrap()
    }

    #[test]
    fn test_bench_week_one() {
        let row = generate(160.0, week(0));

        assert_eq!(row.sets, 3);
        assert_eq!(row.reps, 8);
        assert_eq!(row.percentage_label(), "57.5%");
        assert_eq!(row.weight, 92.5);
        assert_eq!(row.total, 2220);
    }

    #[test]
    fn test_squat_week_four() {
        let row = generate(240.0, week(3));

        assert_eq!(row.sets, 8);
        assert_eq!(row.reps, 3);
        assert_eq!(row.percentage_label(), "80.0%");
        assert_eq!(row.weight, 192.5);
        assert_eq!(row.total, 4620);
    }

    #[test]
    fn test_middle_weeks() {
        // 280 * 0.65 = 182 -> 182.5
        let row = generate(280.0, week(1));
        assert_eq!((row.sets, row.reps), (4, 6));
        assert_eq!(row.percentage_label(), "65.0%");
        assert_eq!(row.weight, 182.5);
        assert_eq!(row.total, 4380);

        // 100 * 0.725 = 72.5 stays on the increment
        let row = generate(100.0, week(2));
        assert_eq!((row.sets, row.reps), (6, 4));
        assert_eq!(row.percentage_label(), "72.5%");
        assert_eq!(row.weight, 72.5);
        assert_eq!(row.total, 1740);
    }

    #[test]
    fn test_zero_max() {
        let row = generate(0.0, week(0));
        assert_eq!(row.weight, 0.0);
        assert_eq!(row.total, 0);
    }

    #[test]
    fn test_round_up_to_increment() {
        assert_eq!(round_up_to_increment(92.0), 92.5);
        assert_eq!(round_up_to_increment(92.5), 92.5);
        assert_eq!(round_up_to_increment(90.1), 92.5);
        assert_eq!(round_up_to_increment(0.0), 0.0);
    }

    #[test]
    fn test_generate_is_deterministic() {
        for w in Week::ALL {
            assert_eq!(generate(137.5, w), generate(137.5, w));
        }
    }

    #[test]
    fn test_weight_is_multiple_of_increment_and_covers_target() {
        for max in 0..=400u32 {
            let max = f64::from(max);
            for w in Week::ALL {
                let row = generate(max, w);
                let steps = row.weight / LOAD_INCREMENT;
                assert_eq!(steps.fract(), 0.0, "max {} {}", max, w);
                assert!(row.weight + 1e-9 >= max * row.percentage, "max {} {}", max, w);
                assert!(row.weight - max * row.percentage < LOAD_INCREMENT);
            }
        }
    }

    #[test]
    fn test_generate_cycle() {
        let cycle = generate_cycle(160.0);

        assert_eq!(cycle[0], generate(160.0, week(0)));
        assert_eq!(cycle[3], generate(160.0, week(3)));
        // 160 * 0.8 = 128 -> 130
        assert_eq!(cycle[3].weight, 130.0);
    }

    #[test]
    fn test_program_table_keeps_order() {
        let lifts = vec![
            LiftEntry::new("Bench Press", 160.0),
            LiftEntry::new("Squat", 240.0),
        ];

        let table = program_table(&lifts, week(0));

        assert_eq!(table.len(), 2);
        assert_eq!(table[0].name, "Bench Press");
        assert_eq!(table[0].row.weight, 92.5);
        assert_eq!(table[1].name, "Squat");
        // 240 * 0.575 = 138 -> 140
        assert_eq!(table[1].row.weight, 140.0);
    }

    #[test]
    fn test_weight_label() {
        assert_eq!(generate(160.0, week(0)).weight_label(), "92.5");
        assert_eq!(generate(240.0, week(0)).weight_label(), "140");
    }
}
