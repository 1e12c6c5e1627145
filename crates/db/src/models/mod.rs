//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` form DTO listing exactly the writable columns
//! - Read-side projections (listings, detail records)

pub mod artist;
pub mod named;
pub mod show;
pub mod venue;
