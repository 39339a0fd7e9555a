//! Security module - credential hashing

pub mod password;

pub use password::BcryptPasswordHasher;
