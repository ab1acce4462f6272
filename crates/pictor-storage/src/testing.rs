//! Shared test doubles for the storage crate

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::remote::{RemoteImageService, UploadResponse};
use crate::traits::{RemoteOptions, StorageError, StorageResult};

/// A call recorded by [`MockRemote`]
#[derive(Debug, Clone)]
pub(crate) enum RemoteCall {
    Upload {
        size: usize,
        options: RemoteOptions,
    },
    Download {
        url: String,
    },
    Delete {
        public_id: String,
    },
    BuildUrl {
        public_id: String,
        options: RemoteOptions,
    },
}

/// In-memory remote service recording every call it receives
pub(crate) struct MockRemote {
    pub upload_response: UploadResponse,
    pub download_data: Bytes,
    pub fail_uploads: bool,
    pub calls: Mutex<Vec<RemoteCall>>,
}

impl MockRemote {
    pub fn new() -> Self {
        MockRemote {
            upload_response: UploadResponse {
                public_id: "test_image".to_string(),
                format: "jpg".to_string(),
            },
            download_data: Bytes::from_static(b"binary image data"),
            fail_uploads: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_upload_response(public_id: &str, format: &str) -> Self {
        MockRemote {
            upload_response: UploadResponse {
                public_id: public_id.to_string(),
                format: format.to_string(),
            },
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteImageService for MockRemote {
    async fn upload(&self, data: Bytes, options: RemoteOptions) -> StorageResult<UploadResponse> {
        if self.fail_uploads {
            return Err(StorageError::UploadFailed("mock failure".to_string()));
        }
        self.calls.lock().unwrap().push(RemoteCall::Upload {
            size: data.len(),
            options,
        });
        Ok(self.upload_response.clone())
    }

    async fn download(&self, url: &str) -> StorageResult<Bytes> {
        self.calls.lock().unwrap().push(RemoteCall::Download {
            url: url.to_string(),
        });
        Ok(self.download_data.clone())
    }

    async fn delete(&self, public_id: &str) -> StorageResult<()> {
        self.calls.lock().unwrap().push(RemoteCall::Delete {
            public_id: public_id.to_string(),
        });
        Ok(())
    }

    fn build_url(&self, public_id: &str, options: RemoteOptions) -> StorageResult<String> {
        let url = format!("https://cdn.test/{}", public_id);
        self.calls.lock().unwrap().push(RemoteCall::BuildUrl {
            public_id: public_id.to_string(),
            options,
        });
        Ok(url)
    }
}
