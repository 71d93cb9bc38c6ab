//! Miniature use cases.

pub mod service;

pub use service::{CreateMiniatureRequest, MiniatureService, UpdateMiniatureRequest};
