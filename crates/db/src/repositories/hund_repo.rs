//! Repository for the `hunde` table.

use dogule_core::types::DbId;
use sqlx::PgPool;

use crate::models::hund::{CreateHund, Hund, HundFilter, UpdateHund};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, kunde_id, name, rasse, geburtsdatum, chip_nummer, notizen, created_at, updated_at";

/// Provides CRUD operations for dogs.
pub struct HundRepo;

impl HundRepo {
    /// Insert a new dog, returning the created row.
    ///
    /// Fails with a foreign-key violation if `kunde_id` does not exist.
    pub async fn create(pool: &PgPool, input: &CreateHund) -> Result<Hund, sqlx::Error> {
        let query = format!(
            "INSERT INTO hunde (kunde_id, name, rasse, geburtsdatum, chip_nummer, notizen)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hund>(&query)
            .bind(input.kunde_id)
            .bind(&input.name)
            .bind(&input.rasse)
            .bind(input.geburtsdatum)
            .bind(&input.chip_nummer)
            .bind(&input.notizen)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hund>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hunde WHERE id = $1");
        sqlx::query_as::<_, Hund>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List dogs by name, optionally restricted to one owner.
    pub async fn list(
        pool: &PgPool,
        filter: &HundFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Hund>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hunde
             WHERE ($1::uuid IS NULL OR kunde_id = $1)
             ORDER BY name, id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Hund>(&query)
            .bind(filter.kunde_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, filter: &HundFilter) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM hunde WHERE ($1::uuid IS NULL OR kunde_id = $1)")
                .bind(filter.kunde_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Update a dog. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHund,
    ) -> Result<Option<Hund>, sqlx::Error> {
        let query = format!(
            "UPDATE hunde SET
                kunde_id = COALESCE($2, kunde_id),
                name = COALESCE($3, name),
                rasse = COALESCE($4, rasse),
                geburtsdatum = COALESCE($5, geburtsdatum),
                chip_nummer = COALESCE($6, chip_nummer),
                notizen = COALESCE($7, notizen),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hund>(&query)
            .bind(id)
            .bind(input.kunde_id)
            .bind(&input.name)
            .bind(&input.rasse)
            .bind(input.geburtsdatum)
            .bind(&input.chip_nummer)
            .bind(&input.notizen)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a dog by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hunde WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
