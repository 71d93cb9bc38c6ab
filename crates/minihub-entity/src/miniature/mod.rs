//! Miniature domain entities.

pub mod model;
pub mod status;

pub use model::{CreateMiniature, Miniature};
pub use status::ProgressStatus;
