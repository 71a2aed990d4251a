use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development except
/// the JWT secret, which must be provided.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// The single value `*` means any origin (the default, matching the
    /// hosted deployment this replaces).
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `3000`    |
    /// | `CORS_ORIGINS`         | `*`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
        }
    }
}

/// Payment gateway configuration. The gateway is live only when a secret
/// key is present; otherwise every intent is synthesized in test mode.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub base_url: String,
    pub secret_key: Option<String>,
}

impl PaymentConfig {
    /// | Env Var              | Default                  |
    /// |----------------------|--------------------------|
    /// | `PAYMENT_API_URL`    | `https://api.stripe.com` |
    /// | `PAYMENT_SECRET_KEY` | unset (test mode)        |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("PAYMENT_API_URL")
                .unwrap_or_else(|_| "https://api.stripe.com".into()),
            secret_key: std::env::var("PAYMENT_SECRET_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }

    /// Build the gateway client this configuration describes.
    pub fn build_client(&self) -> atrium_payments::PaymentClient {
        match &self.secret_key {
            Some(key) => {
                atrium_payments::PaymentClient::live(self.base_url.clone(), key.clone())
            }
            None => {
                tracing::warn!("PAYMENT_SECRET_KEY not set, payment gateway in test mode");
                atrium_payments::PaymentClient::test_mode()
            }
        }
    }
}

/// Object storage configuration. Live only when a service key is present.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub base_url: String,
    pub bucket: String,
    pub service_key: Option<String>,
}

impl StorageConfig {
    /// | Env Var               | Default                 |
    /// |-----------------------|-------------------------|
    /// | `STORAGE_URL`         | `http://localhost:8000` |
    /// | `STORAGE_BUCKET`      | `property-images`       |
    /// | `STORAGE_SERVICE_KEY` | unset (stub mode)       |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("STORAGE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".into()),
            bucket: std::env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| "property-images".into()),
            service_key: std::env::var("STORAGE_SERVICE_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }

    /// Build the object-store client this configuration describes.
    pub fn build_client(&self) -> atrium_storage::StorageClient {
        match &self.service_key {
            Some(key) => atrium_storage::StorageClient::live(
                self.base_url.clone(),
                self.bucket.clone(),
                key.clone(),
            ),
            None => {
                tracing::warn!("STORAGE_SERVICE_KEY not set, object store stubbed");
                atrium_storage::StorageClient::stub(self.base_url.clone(), self.bucket.clone())
            }
        }
    }
}
