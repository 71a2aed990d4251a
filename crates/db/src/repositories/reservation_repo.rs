//! Repository for the `reservations` table.
//!
//! Status transitions carry side effects on the linked property and unit;
//! those run inside a single transaction so a crash mid-sequence cannot
//! leave the rows inconsistent.

use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};

use atrium_core::status::ReservationStatus;
use atrium_core::types::DbId;

use crate::models::reservation::{
    CreateReservation, Reservation, ReservationFilter, UpdateReservation,
};
use crate::{clamp_limit, clamp_offset};

const COLUMNS: &str = "id, property_id, unit_id, customer_name, customer_email, customer_phone, \
     status, deposit_status, viewing_date, confirmation_code, notes, created_at, updated_at";

/// Provides CRUD operations for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a new reservation with the given server-generated
    /// confirmation code.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReservation,
        confirmation_code: &str,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations
                (property_id, unit_id, customer_name, customer_email, customer_phone,
                 viewing_date, confirmation_code, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(input.property_id)
            .bind(input.unit_id)
            .bind(&input.customer_name)
            .bind(&input.customer_email)
            .bind(&input.customer_phone)
            .bind(input.viewing_date)
            .bind(confirmation_code)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a reservation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reservations matching the filter, most recently created first.
    pub async fn list(
        pool: &PgPool,
        filter: &ReservationFilter,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM reservations WHERE TRUE"));

        if let Some(status) = &filter.status {
            qb.push(" AND status = ").push_bind(status);
        }
        if let Some(property_id) = filter.property_id {
            qb.push(" AND property_id = ").push_bind(property_id);
        }

        qb.push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(clamp_limit(filter.limit))
            .push(" OFFSET ")
            .push_bind(clamp_offset(filter.offset));

        qb.build_query_as::<Reservation>().fetch_all(pool).await
    }

    /// Apply non-status field updates. Only non-`None` fields are applied;
    /// status changes go through [`ReservationRepo::set_status`].
    pub async fn update_fields(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReservation,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "UPDATE reservations SET
                customer_name = COALESCE($2, customer_name),
                customer_email = COALESCE($3, customer_email),
                customer_phone = COALESCE($4, customer_phone),
                deposit_status = COALESCE($5, deposit_status),
                viewing_date = COALESCE($6, viewing_date),
                notes = COALESCE($7, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(&input.customer_name)
            .bind(&input.customer_email)
            .bind(&input.customer_phone)
            .bind(&input.deposit_status)
            .bind(input.viewing_date)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Transition a reservation's status, applying the linked property and
    /// unit side effects in the same transaction:
    ///
    /// * `confirmed`: property goes `sold`, `available_units` decrements
    ///   (floor 0), the linked unit (if any) goes `reserved`.
    /// * `cancelled`: `available_units` increments (capped at
    ///   `total_units`), property returns to `available`, the linked unit
    ///   (if any) goes back to `available`.
    ///
    /// Returns `None` if the reservation does not exist.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        new_status: ReservationStatus,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let query = format!(
            "UPDATE reservations SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(new_status.as_str())
            .fetch_one(&mut *tx)
            .await?;

        match new_status {
            ReservationStatus::Confirmed => {
                sqlx::query(
                    "UPDATE properties
                     SET status = 'sold',
                         available_units = GREATEST(available_units - 1, 0)
                     WHERE id = $1",
                )
                .bind(current.property_id)
                .execute(&mut *tx)
                .await?;

                if let Some(unit_id) = current.unit_id {
                    sqlx::query("UPDATE property_units SET status = 'reserved' WHERE id = $1")
                        .bind(unit_id)
                        .execute(&mut *tx)
                        .await?;
                }
            }
            ReservationStatus::Cancelled => {
                sqlx::query(
                    "UPDATE properties
                     SET status = 'available',
                         available_units = LEAST(available_units + 1, total_units)
                     WHERE id = $1",
                )
                .bind(current.property_id)
                .execute(&mut *tx)
                .await?;

                if let Some(unit_id) = current.unit_id {
                    sqlx::query("UPDATE property_units SET status = 'available' WHERE id = $1")
                        .bind(unit_id)
                        .execute(&mut *tx)
                        .await?;
                }
            }
            ReservationStatus::Pending | ReservationStatus::Completed => {}
        }

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Total (non-cancelled) reservations against a property; feeds the
    /// demand score.
    pub async fn count_for_property(pool: &PgPool, property_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations
             WHERE property_id = $1 AND status <> 'cancelled'",
        )
        .bind(property_id)
        .fetch_one(pool)
        .await
    }

    /// Reservations whose viewing date falls within +/- 1 day of the
    /// requested date.
    pub async fn count_overlapping(
        pool: &PgPool,
        property_id: DbId,
        date: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations
             WHERE property_id = $1
               AND status <> 'cancelled'
               AND viewing_date BETWEEN $2::date - 1 AND $2::date + 1",
        )
        .bind(property_id)
        .bind(date)
        .fetch_one(pool)
        .await
    }
}
