//! Domain types and logic shared by the tasknest backend crates.

pub mod enums;
pub mod error;
pub mod suggestion;
pub mod types;
