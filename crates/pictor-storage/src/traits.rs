//! Storage abstraction trait
//!
//! This module defines the DataStore trait the CMS programs against. The CDN
//! adapter is one implementation, selected via configuration at startup rather
//! than spliced into a host class at runtime.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{Map, Value};
use thiserror::Error;

/// Options map forwarded verbatim to the remote service.
///
/// Arbitrary keys (e.g. `width`, `height`, `folder`) pass through untouched.
pub type RemoteOptions = Map<String, Value>;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Remote service error: {0}")]
    RemoteError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Metadata returned alongside downloaded content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Normalized remote object key derived from the identifier
    pub name: String,
}

/// Storage abstraction the CMS attaches pictures through.
///
/// Identifiers are opaque `"{name}.{ext}"` strings: produced by [`write`],
/// consumed by every other operation, never mutated.
///
/// [`write`]: DataStore::write
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Upload raw content and return the identifier the CMS should persist.
    ///
    /// `extra_options` is overlaid on the derived upload options, so callers
    /// can override `public_id` or add pass-through keys such as `folder`.
    async fn write(
        &self,
        content: Bytes,
        content_name: &str,
        extra_options: RemoteOptions,
    ) -> StorageResult<String>;

    /// Download the content behind an identifier, plus its derived metadata
    async fn read(&self, uid: &str) -> StorageResult<(Bytes, FileMetadata)>;

    /// Delete the remote object behind an identifier
    async fn destroy(&self, uid: &str) -> StorageResult<()>;

    /// Synthesize a display URL for an identifier.
    ///
    /// The identifier's extension is used as the `format` unless the caller's
    /// options override it; all other keys forward verbatim to the remote URL
    /// templating.
    fn url_for(&self, uid: &str, options: RemoteOptions) -> StorageResult<String>;
}
