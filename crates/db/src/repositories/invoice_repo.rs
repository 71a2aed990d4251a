//! Repository for the `invoices` and `ledger_entries` tables.
//!
//! Marking an invoice paid and writing its ledger entry happen in one
//! transaction; a partial write cannot occur.

use sqlx::PgPool;

use atrium_core::types::DbId;

use crate::models::invoice::{CreateInvoice, Invoice};
use crate::models::ledger::LedgerEntry;

const COLUMNS: &str = "id, reservation_id, amount_cents, currency, status, payment_intent_id, \
     paid_at, created_at, updated_at";

const LEDGER_COLUMNS: &str =
    "id, invoice_id, amount_cents, currency, entry_type, gateway_reference, created_at";

/// Provides operations for invoices and their ledger entries.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new open invoice against a reservation.
    pub async fn create(pool: &PgPool, input: &CreateInvoice) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices (reservation_id, amount_cents, currency)
             VALUES ($1, $2, COALESCE($3, 'usd'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(input.reservation_id)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .fetch_one(pool)
            .await
    }

    /// Find an invoice by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE id = $1");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all invoices for a reservation, most recent first.
    pub async fn list_by_reservation(
        pool: &PgPool,
        reservation_id: DbId,
    ) -> Result<Vec<Invoice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM invoices WHERE reservation_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(reservation_id)
            .fetch_all(pool)
            .await
    }

    /// Record the gateway intent id on an invoice after intent creation.
    pub async fn attach_intent(
        pool: &PgPool,
        id: DbId,
        payment_intent_id: &str,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices SET payment_intent_id = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(payment_intent_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark an invoice paid and insert the matching ledger entry, atomically.
    ///
    /// Returns `None` if the invoice does not exist. Already-paid invoices
    /// are left untouched and returned as-is so confirmation is idempotent.
    pub async fn mark_paid(
        pool: &PgPool,
        id: DbId,
        gateway_reference: &str,
    ) -> Result<Option<(Invoice, Option<LedgerEntry>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM invoices WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if current.status == "paid" {
            return Ok(Some((current, None)));
        }

        let query = format!(
            "UPDATE invoices SET status = 'paid', paid_at = NOW(), payment_intent_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let invoice = sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(gateway_reference)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO ledger_entries (invoice_id, amount_cents, currency, entry_type, gateway_reference)
             VALUES ($1, $2, $3, 'payment', $4)
             RETURNING {LEDGER_COLUMNS}"
        );
        let entry = sqlx::query_as::<_, LedgerEntry>(&query)
            .bind(invoice.id)
            .bind(invoice.amount_cents)
            .bind(&invoice.currency)
            .bind(gateway_reference)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some((invoice, Some(entry))))
    }

    /// Sum of paid invoice amounts, in minor units.
    pub async fn total_paid_cents(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(amount_cents), 0)::bigint FROM invoices WHERE status = 'paid'",
        )
        .fetch_one(pool)
        .await
    }
}
