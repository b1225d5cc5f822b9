//! LiftPlan - Strength Training Planner
//!
//! Keeps a registry of one-repetition maximums and derives a four-week
//! percentage-based training program from them.

pub mod lifts;
pub mod program;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use lifts::{LiftEntry, LiftRegistry, RegistryError, RenameCollisionPolicy};
pub use program::{generate, ProgramRow, Week, WeekCursor};
pub use storage::config::AppConfig;
pub use storage::{Database, KeyValueStore, MemoryStore};
