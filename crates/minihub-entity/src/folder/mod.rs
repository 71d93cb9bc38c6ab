//! Folder domain entities and sibling ordering.

pub mod model;
pub mod order;

pub use model::{CreateFolder, Folder};
pub use order::{SiblingEntry, SiblingGroup};
