//! Lift registry module.
//!
//! Stores the user's one-repetition maximums keyed by lift name and keeps
//! the persisted copy in step with every edit.

pub mod registry;
pub mod types;

pub use registry::{default_lifts, load_lifts, read_persisted, save_lifts, LiftMap, LiftRegistry};
pub use types::{
    LiftEntry, RegistryError, RenameCollisionPolicy, DEFAULT_LIFTS, LIFTS_KEY,
};
