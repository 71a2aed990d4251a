//! Financial ledger entry model.

use serde::Serialize;
use sqlx::FromRow;

use atrium_core::types::{DbId, Timestamp};

/// A row from the `ledger_entries` table. Written when an invoice is paid
/// or refunded, in the same transaction as the invoice update.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LedgerEntry {
    pub id: DbId,
    pub invoice_id: DbId,
    pub amount_cents: i64,
    pub currency: String,
    pub entry_type: String,
    /// The gateway's payment-intent id, when one exists.
    pub gateway_reference: Option<String>,
    pub created_at: Timestamp,
}
