//! Per-subtree collection statistics.

pub mod model;
pub mod rollup;

pub use model::{FolderStatistics, StatusBreakdown};
pub use rollup::{MiniatureTally, SubtreeFolder, compute_statistics};
