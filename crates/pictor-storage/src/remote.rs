//! Remote image service interface
//!
//! The CDN is reached through these four primitives. The concrete client
//! (HTTP transport, signing, credentials) lives outside this crate and is
//! injected at startup; errors it returns propagate to callers unchanged.
//! Any retry or timeout policy belongs to that client, not to this crate.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;

use crate::traits::{RemoteOptions, StorageResult};

/// Response echoed back by the remote service after an upload.
///
/// The service may rename or transcode, so `public_id` and `format` are not
/// necessarily equal to what was sent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub public_id: String,
    pub format: String,
}

/// The four primitives the CDN exposes
#[async_trait]
pub trait RemoteImageService: Send + Sync {
    /// Upload raw bytes under the options' `public_id`
    async fn upload(&self, data: Bytes, options: RemoteOptions) -> StorageResult<UploadResponse>;

    /// Fetch the bytes behind a previously built URL
    async fn download(&self, url: &str) -> StorageResult<Bytes>;

    /// Delete the object stored under `public_id`
    async fn delete(&self, public_id: &str) -> StorageResult<()>;

    /// Compose a delivery URL for `public_id`.
    ///
    /// `options` may include `format`, `transformation` (ordered operation
    /// list), `secure`, or arbitrary pass-through keys understood by the
    /// service's own URL templating. Pure templating, no network call.
    fn build_url(&self, public_id: &str, options: RemoteOptions) -> StorageResult<String>;
}
