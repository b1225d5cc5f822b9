//! Lift registry types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::DatabaseError;

/// Storage key holding the serialized lift mapping.
pub const LIFTS_KEY: &str = "lifts";

/// Lifts seeded into an empty registry, with their default 1RM.
pub const DEFAULT_LIFTS: [(&str, f64); 10] = [
    ("Bench Press", 160.0),
    ("Incline Dumbbell Press", 60.0),
    ("Squat", 240.0),
    ("Deadlift", 280.0),
    ("Barbell Overhead Press", 100.0),
    ("Dumbbell Overhead Press", 50.0),
    ("Dips", 90.0),
    ("Close-Grip Bench Press", 140.0),
    ("Pull-ups", 50.0),
    ("Barbell Row", 120.0),
];

/// A named lift and its one-repetition maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftEntry {
    /// Lift name, unique within a registry
    pub name: String,
    /// One-repetition maximum
    pub max: f64,
}

impl LiftEntry {
    /// Create a new lift entry.
    pub fn new(name: impl Into<String>, max: f64) -> Self {
        Self {
            name: name.into(),
            max,
        }
    }
}

/// Behaviour of `rename` when the target name belongs to another lift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameCollisionPolicy {
    /// Replace the other lift's entry.
    #[default]
    Overwrite,
    /// Refuse the rename, leaving both lifts untouched.
    Reject,
}

impl std::fmt::Display for RenameCollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenameCollisionPolicy::Overwrite => write!(f, "Overwrite"),
            RenameCollisionPolicy::Reject => write!(f, "Reject"),
        }
    }
}

/// Lift registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Please choose a name for the lift")]
    EmptyName,

    #[error("A lift named '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid 1RM: {0} (must be a non-negative number)")]
    InvalidMax(f64),

    #[error("Cannot rename: a lift named '{0}' already exists")]
    NameCollision(String),

    #[error("Stored lifts are corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}

impl RegistryError {
    /// Whether this error is a rejected user edit (state unchanged, retry possible).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RegistryError::EmptyName
                | RegistryError::DuplicateName(_)
                | RegistryError::InvalidMax(_)
                | RegistryError::NameCollision(_)
        )
    }
}

/// Check that a 1RM is usable.
pub fn validate_max(max: f64) -> Result<(), RegistryError> {
    if max.is_finite() && max >= 0.0 {
        Ok(())
    } else {
        Err(RegistryError::InvalidMax(max))
    }
}
