//! Repository for the `finanzen` table.

use dogule_core::types::{Cents, Date, DbId};
use dogule_core::validation::{FINANZ_AUSGABE, FINANZ_EINNAHME};
use sqlx::PgPool;

use crate::models::finanz::{CreateFinanz, Finanz, FinanzFilter, FinanzSummary, UpdateFinanz};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, typ, betrag_cents, datum, beschreibung, kategorie, \
                       kunde_id, kurs_id, created_at, updated_at";

/// `$1` typ, `$2` inclusive lower date bound, `$3` inclusive upper date bound.
const FILTER: &str = "($1::text IS NULL OR typ = $1)
     AND ($2::date IS NULL OR datum >= $2)
     AND ($3::date IS NULL OR datum <= $3)";

/// Provides CRUD and aggregate operations for ledger entries.
pub struct FinanzRepo;

impl FinanzRepo {
    /// Insert a new entry. A missing `datum` falls back to `CURRENT_DATE`.
    pub async fn create(pool: &PgPool, input: &CreateFinanz) -> Result<Finanz, sqlx::Error> {
        let query = format!(
            "INSERT INTO finanzen (typ, betrag_cents, datum, beschreibung, kategorie, kunde_id, kurs_id)
             VALUES ($1, $2, COALESCE($3, CURRENT_DATE), $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Finanz>(&query)
            .bind(&input.typ)
            .bind(input.betrag_cents)
            .bind(input.datum)
            .bind(&input.beschreibung)
            .bind(&input.kategorie)
            .bind(input.kunde_id)
            .bind(input.kurs_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Finanz>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM finanzen WHERE id = $1");
        sqlx::query_as::<_, Finanz>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List entries, newest booking date first.
    pub async fn list(
        pool: &PgPool,
        filter: &FinanzFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Finanz>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM finanzen
             WHERE {FILTER}
             ORDER BY datum DESC, created_at DESC, id
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Finanz>(&query)
            .bind(&filter.typ)
            .bind(filter.from)
            .bind(filter.to)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, filter: &FinanzFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM finanzen WHERE {FILTER}");
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(&filter.typ)
            .bind(filter.from)
            .bind(filter.to)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Total amount of one entry type within an optional date range.
    /// Returns `0` when nothing matches.
    pub async fn sum_by_typ(
        pool: &PgPool,
        typ: &str,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<Cents, sqlx::Error> {
        let query =
            format!("SELECT COALESCE(SUM(betrag_cents), 0)::BIGINT FROM finanzen WHERE {FILTER}");
        let (sum,): (i64,) = sqlx::query_as(&query)
            .bind(typ)
            .bind(from)
            .bind(to)
            .fetch_one(pool)
            .await?;
        Ok(sum)
    }

    /// Income, expenses and balance within an optional date range.
    pub async fn summary(
        pool: &PgPool,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<FinanzSummary, sqlx::Error> {
        let einnahme = Self::sum_by_typ(pool, FINANZ_EINNAHME, from, to).await?;
        let ausgabe = Self::sum_by_typ(pool, FINANZ_AUSGABE, from, to).await?;
        Ok(FinanzSummary {
            einnahme,
            ausgabe,
            saldo: einnahme - ausgabe,
        })
    }

    /// Update an entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFinanz,
    ) -> Result<Option<Finanz>, sqlx::Error> {
        let query = format!(
            "UPDATE finanzen SET
                typ = COALESCE($2, typ),
                betrag_cents = COALESCE($3, betrag_cents),
                datum = COALESCE($4, datum),
                beschreibung = COALESCE($5, beschreibung),
                kategorie = COALESCE($6, kategorie),
                kunde_id = COALESCE($7, kunde_id),
                kurs_id = COALESCE($8, kurs_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Finanz>(&query)
            .bind(id)
            .bind(&input.typ)
            .bind(input.betrag_cents)
            .bind(input.datum)
            .bind(&input.beschreibung)
            .bind(&input.kategorie)
            .bind(input.kunde_id)
            .bind(input.kurs_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM finanzen WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
