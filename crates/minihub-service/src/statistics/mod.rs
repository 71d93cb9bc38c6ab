//! Collection statistics use cases.

pub mod service;

pub use service::StatisticsService;
