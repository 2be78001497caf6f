//! # scanbench-database
//!
//! Database gateway and repositories for ScanBench.
//!
//! There is deliberately no connection pool. Every operation opens a fresh
//! connection through [`DatabaseGateway`], runs its statement, and closes
//! the connection on both the success and the error path.

pub mod connection;
pub mod repositories;
pub mod schema;

pub use connection::DatabaseGateway;
pub use repositories::UserRepository;
