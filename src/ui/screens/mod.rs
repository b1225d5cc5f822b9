//! UI screens for the application.

pub mod lifts;
pub mod program;

pub use lifts::{LiftsAction, LiftsScreen};
pub use program::ProgramScreen;
