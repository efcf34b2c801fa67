//! Domain types shared by the storage and HTTP layers.
//!
//! Nothing in this crate touches the database; it holds the id/timestamp
//! aliases, the error taxonomy, the shade enumeration and the taxonomy
//! definitions consumed by the seeder.

pub mod error;
pub mod shade;
pub mod taxonomy;
pub mod types;
