//! Route definition for the availability check.

use axum::routing::get;
use axum::Router;

use crate::handlers::availability;
use crate::state::AppState;

/// ```text
/// GET /availability?property_id=&unit_id=&date=  -> check
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/availability", get(availability::check))
}
