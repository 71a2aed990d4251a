//! Invoice entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atrium_core::types::{DbId, Timestamp};

/// An invoice row from the `invoices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub reservation_id: DbId,
    /// Amount due in minor currency units.
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    /// Gateway identifier once an intent has been created for this invoice.
    pub payment_intent_id: Option<String>,
    pub paid_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an invoice against a reservation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoice {
    pub reservation_id: DbId,
    pub amount_cents: i64,
    /// Defaults to `usd` if omitted.
    pub currency: Option<String>,
}
