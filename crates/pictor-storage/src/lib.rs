//! Pictor Storage Library
//!
//! This crate provides the storage abstraction the CMS attaches pictures
//! through, and its CDN-backed implementation. Uploaded images live on a
//! remote image CDN that renders variants on demand; the adapter translates
//! between locally-meaningful identifiers (`"my_image.jpg"`) and the CDN's
//! normalized object keys (`"myimage"`).
//!
//! # Identifier format
//!
//! Identifiers have the form `{name}.{ext}`. The remote object key is derived
//! deterministically by stripping the extension and deleting underscores from
//! the base name; no mapping table is stored.

pub mod cdn;
pub mod factory;
pub mod picture_url;
pub mod remote;
pub mod thumbs;
pub mod traits;

// Re-export commonly used types
pub use cdn::CdnDataStore;
pub use factory::{create_data_store, create_picture_url};
pub use picture_url::PictureUrl;
pub use remote::{RemoteImageService, UploadResponse};
pub use thumbs::{NoOpThumbnailStore, ThumbnailStore};
pub use traits::{DataStore, FileMetadata, RemoteOptions, StorageError, StorageResult};

#[cfg(test)]
pub(crate) mod testing;
