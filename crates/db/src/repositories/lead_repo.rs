//! Repository for the `leads` table.
//!
//! The score and insights columns are always written by the caller from
//! `atrium_core::scoring`; this layer just persists them.

use sqlx::{PgPool, Postgres, QueryBuilder};

use atrium_core::types::DbId;

use crate::models::lead::{CreateLead, Lead, LeadFilter, UpdateLead};
use crate::{clamp_limit, clamp_offset};

const COLUMNS: &str = "id, name, email, phone, budget_min_cents, budget_max_cents, buyer_type, \
     timeline, preferred_location, source, status, score, insights, created_at, updated_at";

/// Provides CRUD operations for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead with its computed score and insights.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLead,
        score: i16,
        insights: &[String],
    ) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads
                (name, email, phone, budget_min_cents, budget_max_cents, buyer_type,
                 timeline, preferred_location, source, score, insights)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.budget_min_cents)
            .bind(input.budget_max_cents)
            .bind(&input.buyer_type)
            .bind(&input.timeline)
            .bind(&input.preferred_location)
            .bind(&input.source)
            .bind(score)
            .bind(insights)
            .fetch_one(pool)
            .await
    }

    /// Find a lead by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List leads matching the filter, highest score first, ties broken by
    /// recency.
    pub async fn list(pool: &PgPool, filter: &LeadFilter) -> Result<Vec<Lead>, sqlx::Error> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM leads WHERE TRUE"));

        if let Some(status) = &filter.status {
            qb.push(" AND status = ").push_bind(status);
        }
        if let Some(min_score) = filter.min_score {
            qb.push(" AND score >= ").push_bind(min_score);
        }

        qb.push(" ORDER BY score DESC, created_at DESC LIMIT ")
            .push_bind(clamp_limit(filter.limit))
            .push(" OFFSET ")
            .push_bind(clamp_offset(filter.offset));

        qb.build_query_as::<Lead>().fetch_all(pool).await
    }

    /// Update a lead with the rescored values. Only non-`None` DTO fields
    /// are applied; score and insights always are.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLead,
        score: i16,
        insights: &[String],
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                budget_min_cents = COALESCE($5, budget_min_cents),
                budget_max_cents = COALESCE($6, budget_max_cents),
                buyer_type = COALESCE($7, buyer_type),
                timeline = COALESCE($8, timeline),
                preferred_location = COALESCE($9, preferred_location),
                source = COALESCE($10, source),
                status = COALESCE($11, status),
                score = $12,
                insights = $13
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.budget_min_cents)
            .bind(input.budget_max_cents)
            .bind(&input.buyer_type)
            .bind(&input.timeline)
            .bind(&input.preferred_location)
            .bind(&input.source)
            .bind(&input.status)
            .bind(score)
            .bind(insights)
            .fetch_optional(pool)
            .await
    }
}
