//! Unit test modules.

mod program_test;
mod registry_storage_test;
