//! Route handlers organized by domain.

pub mod collection;
pub mod folder;
pub mod health;
pub mod miniature;
pub mod painter;
