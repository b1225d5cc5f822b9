//! Training program module.
//!
//! Derives a four-week percentage program from each lift's 1RM. Nothing
//! here is stored; rows are recomputed from the current lifts on demand.

pub mod generator;
pub mod scheme;
pub mod week;

pub use generator::{
    generate, generate_cycle, program_table, round_up_to_increment, ProgramLine, ProgramRow,
    LOAD_INCREMENT,
};
pub use scheme::{Week, WeekScheme, WEEKS_PER_CYCLE, WEEK_SCHEMES};
pub use week::WeekCursor;
