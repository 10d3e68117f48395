//! Repository for the `kommunikation` table.

use dogule_core::types::DbId;
use sqlx::PgPool;

use crate::models::kommunikation::{
    CreateNachricht, Nachricht, NachrichtFilter, UpdateNachricht,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, kanal, richtung, betreff, inhalt, kunde_id, hund_id, gesendet_at, \
                       created_at, updated_at";

const FILTER: &str = "($1::uuid IS NULL OR kunde_id = $1) AND ($2::text IS NULL OR kanal = $2)";

/// Provides CRUD operations for the message log.
pub struct KommunikationRepo;

impl KommunikationRepo {
    /// Insert a new message. A missing `gesendet_at` falls back to `NOW()`.
    pub async fn create(pool: &PgPool, input: &CreateNachricht) -> Result<Nachricht, sqlx::Error> {
        let query = format!(
            "INSERT INTO kommunikation (kanal, richtung, betreff, inhalt, kunde_id, hund_id, gesendet_at)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Nachricht>(&query)
            .bind(&input.kanal)
            .bind(&input.richtung)
            .bind(&input.betreff)
            .bind(&input.inhalt)
            .bind(input.kunde_id)
            .bind(input.hund_id)
            .bind(input.gesendet_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Nachricht>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kommunikation WHERE id = $1");
        sqlx::query_as::<_, Nachricht>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List messages, most recently sent first.
    pub async fn list(
        pool: &PgPool,
        filter: &NachrichtFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Nachricht>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM kommunikation
             WHERE {FILTER}
             ORDER BY gesendet_at DESC, id
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Nachricht>(&query)
            .bind(filter.kunde_id)
            .bind(&filter.kanal)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, filter: &NachrichtFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM kommunikation WHERE {FILTER}");
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(filter.kunde_id)
            .bind(&filter.kanal)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update a message. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNachricht,
    ) -> Result<Option<Nachricht>, sqlx::Error> {
        let query = format!(
            "UPDATE kommunikation SET
                kanal = COALESCE($2, kanal),
                richtung = COALESCE($3, richtung),
                betreff = COALESCE($4, betreff),
                inhalt = COALESCE($5, inhalt),
                kunde_id = COALESCE($6, kunde_id),
                hund_id = COALESCE($7, hund_id),
                gesendet_at = COALESCE($8, gesendet_at),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Nachricht>(&query)
            .bind(id)
            .bind(&input.kanal)
            .bind(&input.richtung)
            .bind(&input.betreff)
            .bind(&input.inhalt)
            .bind(input.kunde_id)
            .bind(input.hund_id)
            .bind(input.gesendet_at)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM kommunikation WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
