//! Route definitions for payments and invoices.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// POST /payments/intent   -> create_intent (degrades to test mode)
/// POST /payments/confirm  -> confirm (marks invoice paid + ledger row)
/// POST /invoices          -> create_invoice
/// GET  /invoices/{id}     -> get_invoice
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payments/intent", post(payment::create_intent))
        .route("/payments/confirm", post(payment::confirm))
        .route("/invoices", post(payment::create_invoice))
        .route("/invoices/{id}", get(payment::get_invoice))
}
