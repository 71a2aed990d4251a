//! Route definitions for the `/leads` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::lead;
use crate::state::AppState;

/// Routes mounted at `/leads`.
///
/// ```text
/// GET  /        -> list (score descending)
/// POST /        -> create (score computed server-side)
/// POST /match   -> match_for_preferences
/// GET  /{id}    -> get_by_id
/// PUT  /{id}    -> update (rescored)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lead::list).post(lead::create))
        .route("/match", post(lead::match_for_preferences))
        .route("/{id}", get(lead::get_by_id).put(lead::update))
}
