/// Environment lookups used to build the configuration
pub mod config;
/// Hashing helpers for connection tokens
pub mod hashing;
/// Module containing logging utilities
pub mod logger;

pub use hashing::*;
pub use logger::*;
