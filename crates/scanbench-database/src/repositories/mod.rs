//! Repository implementations for ScanBench entities.

pub mod user;

pub use user::UserRepository;
