//! # bistro-database
//!
//! PostgreSQL connection management, the embedded migration runner and
//! one repository per table family.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use migration::run_migrations;
