//! Unit tests for program generation.

use liftplan::lifts::{default_lifts, LiftEntry};
use liftplan::program::{generate, program_table, Week, WeekCursor, LOAD_INCREMENT};

#[test]
fn test_bench_press_first_week() {
    let row = generate(160.0, Week::FIRST);

    assert_eq!((row.sets, row.reps), (3, 8));
    assert_eq!(row.percentage, 0.575);
    assert_eq!(row.percentage_label(), "57.5%");
    assert_eq!(row.weight, 92.5);
    assert_eq!(row.total, 2220);
}

#[test]
fn test_squat_last_week() {
    let row = generate(240.0, Week::LAST);

    assert_eq!((row.sets, row.reps), (8, 3));
    assert_eq!(row.percentage_label(), "80.0%");
    assert_eq!(row.weight, 192.5);
    assert_eq!(row.total, 4620);
}

#[test]
fn test_default_lifts_program() {
    let lifts: Vec<LiftEntry> = default_lifts()
        .into_iter()
        .map(|(name, max)| LiftEntry::new(name, max))
        .collect();

    for week in Week::ALL {
        let table = program_table(&lifts, week);
        assert_eq!(table.len(), lifts.len());

        for (line, lift) in table.iter().zip(&lifts) {
            assert_eq!(line.name, lift.name);
            assert_eq!(line.row, generate(lift.max, week));
            assert_eq!((line.row.weight / LOAD_INCREMENT).fract(), 0.0);
            assert!(line.row.weight + 1e-9 >= lift.max * line.row.percentage);
        }
    }
}

#[test]
fn test_week_navigation_never_leaves_cycle() {
    let mut cursor = WeekCursor::new();

    for _ in 0..25 {
        cursor.advance();
        assert!(cursor.week() <= Week::LAST);
    }
    assert_eq!(cursor.week(), Week::LAST);

    for _ in 0..25 {
        cursor.retreat();
        assert!(cursor.week() >= Week::FIRST);
    }
    assert_eq!(cursor.week(), Week::FIRST);
}
