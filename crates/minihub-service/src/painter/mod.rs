//! Painter use cases.

pub mod service;

pub use service::{PainterService, RegisterPainterRequest};
