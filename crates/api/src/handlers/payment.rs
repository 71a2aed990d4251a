//! Payment intents, confirmation, and invoices.
//!
//! Intent creation goes through the gateway client, which degrades to a
//! synthetic `test_mode` intent when no gateway is configured or the call
//! cannot reach it. Confirmation re-fetches the intent from the gateway
//! and only marks the invoice paid on a `succeeded` status.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use atrium_core::error::CoreError;
use atrium_core::types::DbId;
use atrium_db::models::activity::NewActivity;
use atrium_db::models::invoice::{CreateInvoice, Invoice};
use atrium_db::models::ledger::LedgerEntry;
use atrium_db::repositories::{ActivityRepo, InvoiceRepo, ReservationRepo};
use atrium_payments::{PaymentIntent, STATUS_SUCCEEDED};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    /// Charge amount in minor currency units.
    pub amount_cents: i64,
    /// Defaults to `usd`.
    pub currency: Option<String>,
    pub customer_email: String,
    /// When set, the intent id is recorded on this invoice.
    pub invoice_id: Option<DbId>,
}

/// POST /api/v1/payments/intent
pub async fn create_intent(
    State(state): State<AppState>,
    Json(input): Json<CreateIntentRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<PaymentIntent>>)> {
    if input.amount_cents <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "amount_cents must be positive".into(),
        )));
    }
    if !input.customer_email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "customer_email must be a valid email address".into(),
        )));
    }

    let currency = input.currency.as_deref().unwrap_or("usd");
    let intent = state
        .payments
        .create_intent(input.amount_cents, currency, &input.customer_email)
        .await?;

    if let Some(invoice_id) = input.invoice_id {
        InvoiceRepo::attach_intent(&state.pool, invoice_id, &intent.id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Invoice",
                id: invoice_id,
            }))?;
    }

    Ok((StatusCode::CREATED, Json(DataResponse::new(intent))))
}

#[derive(Debug, Deserialize)]
pub struct ConfirmPaymentRequest {
    pub payment_intent_id: String,
    pub invoice_id: DbId,
}

/// Paid invoice plus the ledger entry written for it. The entry is absent
/// when the invoice was already paid (idempotent confirm).
#[derive(Debug, Serialize)]
pub struct PaymentConfirmation {
    pub invoice: Invoice,
    pub ledger_entry: Option<LedgerEntry>,
}

/// POST /api/v1/payments/confirm
pub async fn confirm(
    State(state): State<AppState>,
    Json(input): Json<ConfirmPaymentRequest>,
) -> AppResult<Json<DataResponse<PaymentConfirmation>>> {
    let intent = state.payments.retrieve_intent(&input.payment_intent_id).await?;
    if intent.status != STATUS_SUCCEEDED {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "payment intent is '{}', not '{STATUS_SUCCEEDED}'",
            intent.status
        ))));
    }

    let (invoice, ledger_entry) =
        InvoiceRepo::mark_paid(&state.pool, input.invoice_id, &intent.id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Invoice",
                id: input.invoice_id,
            }))?;

    ActivityRepo::record_best_effort(
        &state.pool,
        NewActivity {
            actor_id: None,
            entity_type: "invoice",
            entity_id: invoice.id,
            action: "paid",
            detail: json!({ "payment_intent_id": intent.id }),
        },
    )
    .await;

    Ok(Json(DataResponse::new(PaymentConfirmation {
        invoice,
        ledger_entry,
    })))
}

/// POST /api/v1/invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(input): Json<CreateInvoice>,
) -> AppResult<(StatusCode, Json<DataResponse<Invoice>>)> {
    if input.amount_cents <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "amount_cents must be positive".into(),
        )));
    }
    ReservationRepo::find_by_id(&state.pool, input.reservation_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id: input.reservation_id,
        }))?;

    let invoice = InvoiceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(invoice))))
}

/// GET /api/v1/invoices/{id}
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Invoice>>> {
    let invoice = InvoiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    Ok(Json(DataResponse::new(invoice)))
}

/// GET /api/v1/reservations/{id}/invoices
pub async fn list_reservation_invoices(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Invoice>>>> {
    ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;
    let invoices = InvoiceRepo::list_by_reservation(&state.pool, id).await?;
    Ok(Json(DataResponse::new(invoices)))
}
