use dogule_core::codes::FINANZEN;
use dogule_core::error::CoreError;
use dogule_core::pagination::PageWindow;
use dogule_core::types::{Date, DbId};
use dogule_core::validation::{ensure_date_range, validate_finanz_typ};
use dogule_db::models::finanz::{CreateFinanz, Finanz, FinanzFilter, FinanzSummary, UpdateFinanz};
use dogule_db::repositories::FinanzRepo;
use sqlx::PgPool;

use crate::error::{db_failure, AppResult};
use crate::response::Page;
use crate::services::{not_found, validate};

pub async fn create(pool: &PgPool, input: CreateFinanz) -> AppResult<Finanz> {
    validate(FINANZEN, &input)?;
    FinanzRepo::create(pool, &input)
        .await
        .map_err(db_failure(FINANZEN, FINANZEN.create))
}

/// List ledger entries. An unknown `typ` filter or an inverted date range
/// is an invalid payload.
pub async fn list(
    pool: &PgPool,
    filter: FinanzFilter,
    window: PageWindow,
) -> AppResult<Page<Finanz>> {
    check_filter(&filter)?;
    let rows = FinanzRepo::list(pool, &filter, window.limit, window.offset)
        .await
        .map_err(db_failure(FINANZEN, FINANZEN.list))?;
    let total = FinanzRepo::count(pool, &filter)
        .await
        .map_err(db_failure(FINANZEN, FINANZEN.list))?;
    Ok(Page::new(rows, total, window))
}

pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Finanz> {
    FinanzRepo::find_by_id(pool, id)
        .await
        .map_err(db_failure(FINANZEN, FINANZEN.read))?
        .ok_or_else(|| not_found(FINANZEN, id).into())
}

pub async fn update(pool: &PgPool, id: DbId, input: UpdateFinanz) -> AppResult<Finanz> {
    validate(FINANZEN, &input)?;
    FinanzRepo::update(pool, id, &input)
        .await
        .map_err(db_failure(FINANZEN, FINANZEN.update))?
        .ok_or_else(|| not_found(FINANZEN, id).into())
}

pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    let deleted = FinanzRepo::delete(pool, id)
        .await
        .map_err(db_failure(FINANZEN, FINANZEN.delete))?;
    if deleted {
        Ok(())
    } else {
        Err(not_found(FINANZEN, id).into())
    }
}

/// Income, expenses and balance, optionally within `[from, to]`.
pub async fn summary(
    pool: &PgPool,
    from: Option<Date>,
    to: Option<Date>,
) -> AppResult<FinanzSummary> {
    ensure_date_range(from, to, FINANZEN.invalid_payload)?;
    FinanzRepo::summary(pool, from, to)
        .await
        .map_err(db_failure(FINANZEN, FINANZEN.list))
}

fn check_filter(filter: &FinanzFilter) -> Result<(), CoreError> {
    if let Some(typ) = filter.typ.as_deref() {
        validate_finanz_typ(typ).map_err(|_| CoreError::Validation {
            code: FINANZEN.invalid_payload,
            details: Some(serde_json::json!({ "typ": typ })),
        })?;
    }
    ensure_date_range(filter.from, filter.to, FINANZEN.invalid_payload)
}
