//! Route definitions for the `/properties` resource.
//!
//! Also mounts the flat `/units/{id}` update route, since units are
//! addressed by their own ids once created.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::property;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// GET    /properties               -> list
/// POST   /properties               -> create
/// GET    /properties/{id}          -> get_by_id (units joined)
/// PUT    /properties/{id}          -> update
/// DELETE /properties/{id}          -> delete (admin only)
///
/// GET    /properties/{id}/units    -> list_units
/// POST   /properties/{id}/units    -> create_unit
/// PUT    /units/{id}               -> update_unit
///
/// POST   /properties/{id}/images   -> upload_image (base64 data URL)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/properties", get(property::list).post(property::create))
        .route(
            "/properties/{id}",
            get(property::get_by_id)
                .put(property::update)
                .delete(property::delete),
        )
        .route(
            "/properties/{id}/units",
            get(property::list_units).post(property::create_unit),
        )
        .route("/properties/{id}/images", post(property::upload_image))
        .route("/units/{id}", put(property::update_unit))
}
