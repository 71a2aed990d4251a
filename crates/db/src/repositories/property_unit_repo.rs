//! Repository for the `property_units` table.

use sqlx::PgPool;

use atrium_core::types::DbId;

use crate::models::property_unit::{CreatePropertyUnit, PropertyUnit, UpdatePropertyUnit};

const COLUMNS: &str = "id, property_id, unit_number, floor, unit_type, size_sqm, bedrooms, \
     bathrooms, price_cents, status, created_at, updated_at";

/// Provides CRUD operations for units within a property.
pub struct PropertyUnitRepo;

impl PropertyUnitRepo {
    /// Insert a new unit under a property.
    pub async fn create(
        pool: &PgPool,
        property_id: DbId,
        input: &CreatePropertyUnit,
    ) -> Result<PropertyUnit, sqlx::Error> {
        let query = format!(
            "INSERT INTO property_units
                (property_id, unit_number, floor, unit_type, size_sqm, bedrooms, bathrooms,
                 price_cents, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 'available'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyUnit>(&query)
            .bind(property_id)
            .bind(&input.unit_number)
            .bind(input.floor)
            .bind(&input.unit_type)
            .bind(input.size_sqm)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.price_cents)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a unit by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PropertyUnit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM property_units WHERE id = $1");
        sqlx::query_as::<_, PropertyUnit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all units for a property, ordered by unit number.
    pub async fn list_by_property(
        pool: &PgPool,
        property_id: DbId,
    ) -> Result<Vec<PropertyUnit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM property_units WHERE property_id = $1 ORDER BY unit_number"
        );
        sqlx::query_as::<_, PropertyUnit>(&query)
            .bind(property_id)
            .fetch_all(pool)
            .await
    }

    /// Update a unit. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePropertyUnit,
    ) -> Result<Option<PropertyUnit>, sqlx::Error> {
        let query = format!(
            "UPDATE property_units SET
                unit_number = COALESCE($2, unit_number),
                floor = COALESCE($3, floor),
                unit_type = COALESCE($4, unit_type),
                size_sqm = COALESCE($5, size_sqm),
                bedrooms = COALESCE($6, bedrooms),
                bathrooms = COALESCE($7, bathrooms),
                price_cents = COALESCE($8, price_cents),
                status = COALESCE($9, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyUnit>(&query)
            .bind(id)
            .bind(&input.unit_number)
            .bind(input.floor)
            .bind(&input.unit_type)
            .bind(input.size_sqm)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.price_cents)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }
}
