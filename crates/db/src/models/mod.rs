//! Domain model structs and DTOs.
//!
//! Each submodule pairs a `FromRow` entity struct matching the database row
//! with the `Deserialize` DTOs its endpoints accept (create, and for tasks a
//! partial update with all-`Option` fields).

pub mod category;
pub mod context_entry;
pub mod task;
pub mod user;
