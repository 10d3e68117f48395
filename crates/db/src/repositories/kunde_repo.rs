//! Repository for the `kunden` table.

use dogule_core::types::DbId;
use sqlx::PgPool;

use crate::models::kunde::{CreateKunde, Kunde, KundeFilter, UpdateKunde};
use crate::repositories::like_pattern;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, vorname, nachname, email, telefon, adresse, notizen, created_at, updated_at";

/// `$1` is an optional `ILIKE` pattern matched against name and email.
const FILTER: &str = "($1::text IS NULL
     OR vorname ILIKE $1 OR nachname ILIKE $1 OR email ILIKE $1)";

/// Provides CRUD operations for customers.
pub struct KundeRepo;

impl KundeRepo {
    /// Insert a new customer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateKunde) -> Result<Kunde, sqlx::Error> {
        let query = format!(
            "INSERT INTO kunden (vorname, nachname, email, telefon, adresse, notizen)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kunde>(&query)
            .bind(&input.vorname)
            .bind(&input.nachname)
            .bind(&input.email)
            .bind(&input.telefon)
            .bind(&input.adresse)
            .bind(&input.notizen)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Kunde>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kunden WHERE id = $1");
        sqlx::query_as::<_, Kunde>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List customers alphabetically by last name, then first name.
    pub async fn list(
        pool: &PgPool,
        filter: &KundeFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Kunde>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM kunden
             WHERE {FILTER}
             ORDER BY nachname, vorname, id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Kunde>(&query)
            .bind(like_pattern(filter.search.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count customers matching `filter`, ignoring pagination.
    pub async fn count(pool: &PgPool, filter: &KundeFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM kunden WHERE {FILTER}");
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(like_pattern(filter.search.as_deref()))
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update a customer. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateKunde,
    ) -> Result<Option<Kunde>, sqlx::Error> {
        let query = format!(
            "UPDATE kunden SET
                vorname = COALESCE($2, vorname),
                nachname = COALESCE($3, nachname),
                email = COALESCE($4, email),
                telefon = COALESCE($5, telefon),
                adresse = COALESCE($6, adresse),
                notizen = COALESCE($7, notizen),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kunde>(&query)
            .bind(id)
            .bind(&input.vorname)
            .bind(&input.nachname)
            .bind(&input.email)
            .bind(&input.telefon)
            .bind(&input.adresse)
            .bind(&input.notizen)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer and, through the foreign key, their dogs.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM kunden WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
