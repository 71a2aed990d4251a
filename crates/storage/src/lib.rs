//! HTTP client for the hosted object store.
//!
//! The store exposes a bucket API: raw bytes are POSTed to a named path and
//! the public URL follows a fixed convention. Without credentials the
//! client runs in stub mode, returning the conventional URL without a
//! network call, so uploads keep working in development.

/// Errors from the object storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-2xx status code.
    #[error("object store error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

enum Mode {
    Live { service_key: String },
    Stub,
}

/// HTTP client for one bucket of the hosted object store.
pub struct StorageClient {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    mode: Mode,
}

impl StorageClient {
    /// Create a live client for the given store URL and bucket.
    pub fn live(base_url: String, bucket: String, service_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            bucket,
            mode: Mode::Live { service_key },
        }
    }

    /// Create a stub client that skips the network and only derives URLs.
    pub fn stub(base_url: String, bucket: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            bucket,
            mode: Mode::Stub,
        }
    }

    /// Whether this client is running without store credentials.
    pub fn is_stub(&self) -> bool {
        matches!(self.mode, Mode::Stub)
    }

    /// Public URL for an object path, by the store's fixed convention.
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{path}",
            self.base_url, self.bucket
        )
    }

    /// Upload raw bytes to the bucket path, returning the public URL.
    ///
    /// In stub mode the bytes are dropped and only the URL is derived,
    /// which is logged so the skip is visible.
    pub async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let Mode::Live { service_key } = &self.mode else {
            tracing::info!(path, size = bytes.len(), "Object store stubbed, skipping upload");
            return Ok(self.public_url(path));
        };

        let response = self
            .client
            .post(format!(
                "{}/storage/v1/object/{}/{path}",
                self.base_url, self.bucket
            ))
            .bearer_auth(service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(self.public_url(path))
    }
}
