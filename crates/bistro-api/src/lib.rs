//! # bistro-api
//!
//! HTTP API layer for Bistro built on Axum.
//!
//! Provides the REST endpoints, middleware (request logging, CORS,
//! compression, body limits), extractors, DTOs and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, build_state_with, run_server};
pub use state::AppState;
