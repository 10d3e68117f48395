//! Repository for the `kurse` table.

use dogule_core::types::DbId;
use sqlx::PgPool;

use crate::models::kurs::{CreateKurs, Kurs, KursFilter, UpdateKurs};
use crate::repositories::like_pattern;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, titel, beschreibung, trainer, ort, start_datum, end_datum, \
                       max_teilnehmer, preis_cents, created_at, updated_at";

const FILTER: &str = "($1::text IS NULL OR titel ILIKE $1 OR trainer ILIKE $1)";

/// Provides CRUD operations for courses.
pub struct KursRepo;

impl KursRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateKurs) -> Result<Kurs, sqlx::Error> {
        let query = format!(
            "INSERT INTO kurse
                (titel, beschreibung, trainer, ort, start_datum, end_datum, max_teilnehmer, preis_cents)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kurs>(&query)
            .bind(&input.titel)
            .bind(&input.beschreibung)
            .bind(&input.trainer)
            .bind(&input.ort)
            .bind(input.start_datum)
            .bind(input.end_datum)
            .bind(input.max_teilnehmer)
            .bind(input.preis_cents)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Kurs>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kurse WHERE id = $1");
        sqlx::query_as::<_, Kurs>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List courses by start date (undated last), then title.
    pub async fn list(
        pool: &PgPool,
        filter: &KursFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Kurs>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM kurse
             WHERE {FILTER}
             ORDER BY start_datum NULLS LAST, titel, id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Kurs>(&query)
            .bind(like_pattern(filter.search.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, filter: &KursFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM kurse WHERE {FILTER}");
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(like_pattern(filter.search.as_deref()))
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update a course. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateKurs,
    ) -> Result<Option<Kurs>, sqlx::Error> {
        let query = format!(
            "UPDATE kurse SET
                titel = COALESCE($2, titel),
                beschreibung = COALESCE($3, beschreibung),
                trainer = COALESCE($4, trainer),
                ort = COALESCE($5, ort),
                start_datum = COALESCE($6, start_datum),
                end_datum = COALESCE($7, end_datum),
                max_teilnehmer = COALESCE($8, max_teilnehmer),
                preis_cents = COALESCE($9, preis_cents),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kurs>(&query)
            .bind(id)
            .bind(&input.titel)
            .bind(&input.beschreibung)
            .bind(&input.trainer)
            .bind(&input.ort)
            .bind(input.start_datum)
            .bind(input.end_datum)
            .bind(input.max_teilnehmer)
            .bind(input.preis_cents)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a course. Linked ledger entries and events keep
    /// their rows with the link cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM kurse WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
