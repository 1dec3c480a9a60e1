//! Domain types and rules shared by the persistence and HTTP layers.

pub mod defaults;
pub mod error;
pub mod file_store;
pub mod types;
pub mod uploads;
