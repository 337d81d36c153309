//! Password hashing for the registration surface.

pub mod password;
