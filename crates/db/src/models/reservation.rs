//! Reservation entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atrium_core::types::{DbId, Timestamp};

/// A reservation row from the `reservations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub property_id: DbId,
    pub unit_id: Option<DbId>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub status: String,
    pub deposit_status: String,
    pub viewing_date: Option<NaiveDate>,
    pub confirmation_code: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a reservation. The confirmation code is generated
/// server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservation {
    pub property_id: DbId,
    pub unit_id: Option<DbId>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub viewing_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// DTO for updating a reservation. A `status` change triggers the linked
/// property/unit side effects inside one transaction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReservation {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub status: Option<String>,
    pub deposit_status: Option<String>,
    pub viewing_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Filter parameters for `GET /reservations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationFilter {
    pub status: Option<String>,
    pub property_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
