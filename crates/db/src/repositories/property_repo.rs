//! Repository for the `properties` table.

use sqlx::{PgPool, Postgres, QueryBuilder};

use atrium_core::types::DbId;

use crate::models::property::{CreateProperty, Property, PropertyFilter, UpdateProperty};
use crate::{clamp_limit, clamp_offset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, project, location, property_type, price_cents, currency, \
     bedrooms, bathrooms, size_sqm, total_units, available_units, status, images, amenities, \
     created_at, updated_at";

/// Provides CRUD operations for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property, returning the created row.
    ///
    /// `available_units` defaults to `total_units` (itself defaulting to 1)
    /// when omitted; `status` defaults to `available`.
    pub async fn create(pool: &PgPool, input: &CreateProperty) -> Result<Property, sqlx::Error> {
        let total_units = input.total_units.unwrap_or(1);
        let available_units = input.available_units.unwrap_or(total_units);
        let query = format!(
            "INSERT INTO properties
                (title, project, location, property_type, price_cents, currency,
                 bedrooms, bathrooms, size_sqm, total_units, available_units, status,
                 images, amenities)
             VALUES ($1, $2, $3, COALESCE($4, 'apartment'), $5, COALESCE($6, 'usd'),
                     $7, $8, $9, $10, $11, COALESCE($12, 'available'), $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(&input.title)
            .bind(&input.project)
            .bind(&input.location)
            .bind(&input.property_type)
            .bind(input.price_cents)
            .bind(&input.currency)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.size_sqm)
            .bind(total_units)
            .bind(available_units)
            .bind(&input.status)
            .bind(&input.images)
            .bind(&input.amenities)
            .fetch_one(pool)
            .await
    }

    /// Find a property by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List properties matching the filter, most recently created first.
    pub async fn list(pool: &PgPool, filter: &PropertyFilter) -> Result<Vec<Property>, sqlx::Error> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM properties WHERE TRUE"));

        if let Some(status) = &filter.status {
            qb.push(" AND status = ").push_bind(status);
        }
        if let Some(project) = &filter.project {
            qb.push(" AND project = ").push_bind(project);
        }
        if let Some(location) = &filter.location {
            qb.push(" AND location ILIKE ")
                .push_bind(format!("%{location}%"));
        }
        if let Some(property_type) = &filter.property_type {
            qb.push(" AND property_type = ").push_bind(property_type);
        }
        if let Some(min) = filter.min_price_cents {
            qb.push(" AND price_cents >= ").push_bind(min);
        }
        if let Some(max) = filter.max_price_cents {
            qb.push(" AND price_cents <= ").push_bind(max);
        }
        if let Some(bedrooms) = filter.bedrooms {
            qb.push(" AND bedrooms = ").push_bind(bedrooms);
        }

        qb.push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(clamp_limit(filter.limit))
            .push(" OFFSET ")
            .push_bind(clamp_offset(filter.offset));

        qb.build_query_as::<Property>().fetch_all(pool).await
    }

    /// Update a property. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProperty,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET
                title = COALESCE($2, title),
                project = COALESCE($3, project),
                location = COALESCE($4, location),
                property_type = COALESCE($5, property_type),
                price_cents = COALESCE($6, price_cents),
                currency = COALESCE($7, currency),
                bedrooms = COALESCE($8, bedrooms),
                bathrooms = COALESCE($9, bathrooms),
                size_sqm = COALESCE($10, size_sqm),
                total_units = COALESCE($11, total_units),
                available_units = COALESCE($12, available_units),
                status = COALESCE($13, status),
                images = COALESCE($14, images),
                amenities = COALESCE($15, amenities)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.project)
            .bind(&input.location)
            .bind(&input.property_type)
            .bind(input.price_cents)
            .bind(&input.currency)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.size_sqm)
            .bind(input.total_units)
            .bind(input.available_units)
            .bind(&input.status)
            .bind(&input.images)
            .bind(&input.amenities)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a property by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Append one image URL to the property's image list in a single
    /// statement, so concurrent uploads cannot lose writes.
    pub async fn append_image(
        pool: &PgPool,
        id: DbId,
        url: &str,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET images = array_append(images, $2)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(url)
            .fetch_optional(pool)
            .await
    }

    /// All properties currently marked available, for match scoring.
    pub async fn list_available(pool: &PgPool) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM properties WHERE status = 'available'
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Property>(&query).fetch_all(pool).await
    }
}
