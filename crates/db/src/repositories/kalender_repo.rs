//! Repository for the `kalender_events` table.

use dogule_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::kalender::{
    CreateKalenderEvent, KalenderEvent, KalenderFilter, UpdateKalenderEvent,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, titel, beschreibung, ort, start_at, end_at, kurs_id, hund_id, \
                       created_at, updated_at";

/// Events overlapping `[$1, $2]`, optionally restricted to a course (`$3`)
/// or a dog (`$4`).
const FILTER: &str = "($1::timestamptz IS NULL OR end_at >= $1)
     AND ($2::timestamptz IS NULL OR start_at <= $2)
     AND ($3::uuid IS NULL OR kurs_id = $3)
     AND ($4::uuid IS NULL OR hund_id = $4)";

/// Provides CRUD operations for calendar events.
pub struct KalenderRepo;

impl KalenderRepo {
    /// Insert a new event, returning the created row.
    ///
    /// The table rejects `end_at < start_at` with a check violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateKalenderEvent,
    ) -> Result<KalenderEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO kalender_events (titel, beschreibung, ort, start_at, end_at, kurs_id, hund_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KalenderEvent>(&query)
            .bind(&input.titel)
            .bind(&input.beschreibung)
            .bind(&input.ort)
            .bind(input.start_at)
            .bind(input.end_at)
            .bind(input.kurs_id)
            .bind(input.hund_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<KalenderEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kalender_events WHERE id = $1");
        sqlx::query_as::<_, KalenderEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events in chronological order.
    pub async fn list(
        pool: &PgPool,
        filter: &KalenderFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<KalenderEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM kalender_events
             WHERE {FILTER}
             ORDER BY start_at, id
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, KalenderEvent>(&query)
            .bind(filter.from)
            .bind(filter.to)
            .bind(filter.kurs_id)
            .bind(filter.hund_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, filter: &KalenderFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM kalender_events WHERE {FILTER}");
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(filter.from)
            .bind(filter.to)
            .bind(filter.kurs_id)
            .bind(filter.hund_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Count events starting at or after `now`.
    pub async fn count_upcoming(pool: &PgPool, now: Timestamp) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM kalender_events WHERE start_at >= $1")
                .bind(now)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateKalenderEvent,
    ) -> Result<Option<KalenderEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE kalender_events SET
                titel = COALESCE($2, titel),
                beschreibung = COALESCE($3, beschreibung),
                ort = COALESCE($4, ort),
                start_at = COALESCE($5, start_at),
                end_at = COALESCE($6, end_at),
                kurs_id = COALESCE($7, kurs_id),
                hund_id = COALESCE($8, hund_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KalenderEvent>(&query)
            .bind(id)
            .bind(&input.titel)
            .bind(&input.beschreibung)
            .bind(&input.ort)
            .bind(input.start_at)
            .bind(input.end_at)
            .bind(input.kurs_id)
            .bind(input.hund_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM kalender_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
