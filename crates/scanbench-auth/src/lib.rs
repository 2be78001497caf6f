//! # scanbench-auth
//!
//! One-way credential hashing for ScanBench.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification

pub mod password;

pub use password::PasswordHasher;
