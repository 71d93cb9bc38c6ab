//! Painter domain entities.

pub mod model;

pub use model::Painter;
