//! High-level picture URL generation
//!
//! Where [`DataStore::url_for`] takes raw remote options, this layer accepts
//! the CMS's abstract [`TransformOptions`], runs the transformation builder,
//! and hands the resulting operation list to the store's URL path as
//! `{transformation, secure}`. Both paths exist because they serve different
//! callers: migrations and direct embeds use `url_for`, rendered `<img>` tags
//! go through here.

use std::sync::Arc;

use pictor_core::transform::{build_transformations, TransformOptions};
use serde_json::Value;

use crate::traits::{DataStore, RemoteOptions, StorageResult};

/// Generates display URLs for pictures from abstract transform options
#[derive(Clone)]
pub struct PictureUrl {
    store: Arc<dyn DataStore>,
    secure_default: bool,
}

impl PictureUrl {
    /// `secure_default` applies when the options carry no explicit `secure`.
    pub fn new(store: Arc<dyn DataStore>, secure_default: bool) -> Self {
        PictureUrl {
            store,
            secure_default,
        }
    }

    /// Compose a display URL for the picture behind `uid`
    pub fn call(&self, uid: &str, options: &TransformOptions) -> StorageResult<String> {
        let transformation = build_transformations(options);

        let mut remote_options = RemoteOptions::new();
        remote_options.insert(
            "transformation".to_string(),
            serde_json::to_value(&transformation)?,
        );
        remote_options.insert(
            "secure".to_string(),
            Value::Bool(options.secure.unwrap_or(self.secure_default)),
        );

        self.store.url_for(uid, remote_options)
    }
}
