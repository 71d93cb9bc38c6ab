//! # minihub-service
//!
//! Business logic service layer for MiniHub. Each service orchestrates
//! repositories to implement application-level use cases and enforces
//! per-painter ownership on every resolved resource.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod folder;
pub mod miniature;
pub mod painter;
pub mod statistics;

pub use context::RequestContext;
pub use folder::FolderService;
pub use miniature::MiniatureService;
pub use painter::PainterService;
pub use statistics::StatisticsService;
