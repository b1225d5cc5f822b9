//! Storage module for database and configuration.

pub mod config;
pub mod database;
pub mod kv;
pub mod schema;

pub use config::{AppConfig, ConfigError, RegistrySettings, StorageSettings, UiSettings};
pub use database::{Database, DatabaseError};
pub use kv::{KeyValueStore, MemoryStore};
