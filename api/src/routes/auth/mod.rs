//! Registration and verification routes

pub mod register;
pub mod verify;

pub use register::register;
pub use verify::verify;
