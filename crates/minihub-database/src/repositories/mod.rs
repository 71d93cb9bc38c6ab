//! Concrete repository implementations.

pub mod folder;
pub mod miniature;
pub mod painter;
pub mod statistics;

pub use folder::FolderRepository;
pub use miniature::MiniatureRepository;
pub use painter::PainterRepository;
pub use statistics::StatisticsRepository;
