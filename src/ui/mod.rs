//! UI module for egui-based user interface.

pub mod screens;
pub mod theme;

pub use screens::{LiftsAction, LiftsScreen, ProgramScreen};
pub use theme::Theme;
