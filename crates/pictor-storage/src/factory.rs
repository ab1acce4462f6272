use std::sync::Arc;

use pictor_core::Config;

use crate::cdn::CdnDataStore;
use crate::picture_url::PictureUrl;
use crate::remote::RemoteImageService;
use crate::traits::{DataStore, StorageError, StorageResult};

/// Create the data store selected by configuration.
///
/// The remote-service client is constructed by the host application and
/// injected here; this crate never builds one itself.
pub fn create_data_store(
    config: &Config,
    remote: Arc<dyn RemoteImageService>,
) -> StorageResult<Arc<dyn DataStore>> {
    match config.storage_adapter.as_str() {
        "cdn" => Ok(Arc::new(CdnDataStore::new(remote))),
        other => Err(StorageError::ConfigError(format!(
            "Unknown storage adapter: {}",
            other
        ))),
    }
}

/// Create the picture URL generator on top of a data store
pub fn create_picture_url(config: &Config, store: Arc<dyn DataStore>) -> PictureUrl {
    PictureUrl::new(store, config.secure_urls)
}
