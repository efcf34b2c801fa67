//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A denormalized view with its association sets resolved, where the
//!   entity has any
//! - `Deserialize` + `Validate` request DTOs for creates and patches

pub mod actor;
pub mod category;
pub mod feature;
pub mod feature_type;
pub mod movie;
