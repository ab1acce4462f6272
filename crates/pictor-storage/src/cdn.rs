//! CDN-backed data store
//!
//! Implements [`DataStore`] against an injected [`RemoteImageService`]. Every
//! operation is a pure function of its arguments plus one remote call; there
//! is no caching and no shared mutable state, so concurrent use is safe.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use crate::remote::RemoteImageService;
use crate::traits::{DataStore, FileMetadata, RemoteOptions, StorageResult};

/// Data store hosting picture content on a remote image CDN
#[derive(Clone)]
pub struct CdnDataStore {
    remote: Arc<dyn RemoteImageService>,
}

impl CdnDataStore {
    pub fn new(remote: Arc<dyn RemoteImageService>) -> Self {
        CdnDataStore { remote }
    }
}

/// Last path segment of an identifier
fn basename(uid: &str) -> &str {
    uid.rsplit('/').next().unwrap_or(uid)
}

/// Extension of an identifier: the substring after the last `.` in its
/// basename, empty string when there is no dot.
pub(crate) fn extension(uid: &str, with_dot: bool) -> &str {
    let base = basename(uid);
    match base.rfind('.') {
        Some(i) if with_dot => &base[i..],
        Some(i) => &base[i + 1..],
        None => "",
    }
}

/// Basename of an identifier with the extension stripped
pub(crate) fn public_id(uid: &str) -> &str {
    let base = basename(uid);
    match base.rfind('.') {
        Some(i) => &base[..i],
        None => base,
    }
}

/// Normalized remote object key: the public id with all underscores deleted.
///
/// Deterministic, recomputed on every operation; no mapping table exists.
pub(crate) fn derive_key(uid: &str) -> String {
    let pid = public_id(uid);
    if pid.contains('_') {
        pid.replace('_', "")
    } else {
        pid.to_string()
    }
}

#[async_trait]
impl DataStore for CdnDataStore {
    async fn write(
        &self,
        content: Bytes,
        content_name: &str,
        extra_options: RemoteOptions,
    ) -> StorageResult<String> {
        let size = content.len();
        let start = Instant::now();

        let mut options = RemoteOptions::new();
        options.insert(
            "public_id".to_string(),
            Value::String(derive_key(content_name)),
        );
        // Caller-supplied options win, including public_id.
        options.extend(extra_options);

        let response = self.remote.upload(content, options).await?;

        tracing::info!(
            public_id = %response.public_id,
            format = %response.format,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "CDN upload successful"
        );

        Ok(format!("{}.{}", response.public_id, response.format))
    }

    async fn read(&self, uid: &str) -> StorageResult<(Bytes, FileMetadata)> {
        let start = Instant::now();

        // extension() yields "" rather than an absent value for extensionless
        // identifiers, so the historical "jpg" fallback never applies; the
        // empty format is passed through to the remote URL templating.
        let mut options = RemoteOptions::new();
        options.insert(
            "format".to_string(),
            Value::String(extension(uid, false).to_string()),
        );

        let url = self.remote.build_url(public_id(uid), options)?;
        let data = self.remote.download(&url).await?;

        tracing::info!(
            uid = %uid,
            url = %url,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "CDN download successful"
        );

        Ok((
            data,
            FileMetadata {
                name: derive_key(uid),
            },
        ))
    }

    async fn destroy(&self, uid: &str) -> StorageResult<()> {
        let pid = public_id(uid);
        self.remote.delete(pid).await?;

        tracing::info!(uid = %uid, public_id = %pid, "CDN delete successful");

        Ok(())
    }

    fn url_for(&self, uid: &str, options: RemoteOptions) -> StorageResult<String> {
        let mut merged = RemoteOptions::new();
        merged.insert(
            "format".to_string(),
            Value::String(extension(uid, false).to_string()),
        );
        merged.extend(options);
        self.remote.build_url(public_id(uid), merged)
    }
}
