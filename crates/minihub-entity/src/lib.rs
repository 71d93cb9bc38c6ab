//! # minihub-entity
//!
//! Domain entity models for MiniHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.
//!
//! The two pure algorithms of the collection domain also live here:
//! sibling ordering ([`folder::order`]) and per-subtree statistics rollup
//! ([`statistics`]).

pub mod folder;
pub mod miniature;
pub mod painter;
pub mod statistics;
