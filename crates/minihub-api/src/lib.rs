//! # minihub-api
//!
//! HTTP API layer for MiniHub built on Axum.
//!
//! Provides the REST endpoints, painter-identity extractor, DTOs,
//! CORS/compression/trace middleware, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
