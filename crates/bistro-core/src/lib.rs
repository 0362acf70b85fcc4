//! # bistro-core
//!
//! Core crate for the Bistro reservation service. Holds the configuration
//! schema, the unified error type, pagination and response types, and the
//! clock and identifier traits that the booking logic is written against.
//!
//! This crate has **no** internal dependencies on other Bistro crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
