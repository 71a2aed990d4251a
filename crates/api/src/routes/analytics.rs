//! Route definitions for `/analytics`. Manager-level roles only.

use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// ```text
/// GET /dashboard  -> dashboard (admin or sales_manager)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(analytics::dashboard))
}
