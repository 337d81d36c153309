//! HTTP handlers, one module per resource.

pub mod categories;
pub mod contexts;
pub mod register;
pub mod suggestions;
pub mod tasks;
