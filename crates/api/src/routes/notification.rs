//! Route definitions for `/notifications`. Requires authentication.

use axum::routing::post;
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// ```text
/// POST /email  -> send_email (simulated delivery)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/email", post(notification::send_email))
}
