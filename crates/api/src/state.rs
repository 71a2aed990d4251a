use std::sync::Arc;

use crate::config::ServerConfig;
use crate::notifications::EmailSender;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atrium_db::DbPool,
    /// Server configuration (accessed by auth extractors and handlers).
    pub config: Arc<ServerConfig>,
    /// Payment gateway client (live or test mode).
    pub payments: Arc<atrium_payments::PaymentClient>,
    /// Object storage client (live or stubbed).
    pub storage: Arc<atrium_storage::StorageClient>,
    /// Outbound email sender (delivery simulated).
    pub email: Arc<EmailSender>,
}
