//! Thumbnail storage hook
//!
//! The host CMS persists pre-rendered thumbnail variants for its default
//! backends. With a CDN that renders variants on demand there is nothing to
//! persist, so the wired implementation is a no-op.

use async_trait::async_trait;
use bytes::Bytes;

use crate::traits::StorageResult;

/// Hook the CMS calls when a thumbnail variant has been rendered
#[async_trait]
pub trait ThumbnailStore: Send + Sync {
    async fn store(&self, uid: &str, variant: &str, data: Bytes) -> StorageResult<()>;
}

/// No-op implementation for CDN-backed storage
pub struct NoOpThumbnailStore;

#[async_trait]
impl ThumbnailStore for NoOpThumbnailStore {
    async fn store(&self, _uid: &str, _variant: &str, _data: Bytes) -> StorageResult<()> {
        Ok(())
    }
}
