//! Folder use cases.

pub mod service;

pub use service::{CollectionView, CreateFolderRequest, FolderService, UpdateFolderRequest};
