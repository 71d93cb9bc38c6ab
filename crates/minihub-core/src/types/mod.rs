//! Core type definitions used across the MiniHub workspace.

pub mod id;

pub use id::*;
