//! Route definitions for the `/reservations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{payment, reservation};
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// GET  /reservations                -> list
/// POST /reservations                -> create
/// GET  /reservations/{id}           -> get_by_id (property joined)
/// PUT  /reservations/{id}           -> update (status side effects)
/// GET  /reservations/{id}/invoices  -> list invoices for reservation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            get(reservation::list).post(reservation::create),
        )
        .route(
            "/reservations/{id}",
            get(reservation::get_by_id).put(reservation::update),
        )
        .route(
            "/reservations/{id}/invoices",
            get(payment::list_reservation_invoices),
        )
}
