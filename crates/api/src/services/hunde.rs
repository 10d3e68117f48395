use dogule_core::codes::HUNDE;
use dogule_core::pagination::PageWindow;
use dogule_core::types::DbId;
use dogule_db::models::hund::{CreateHund, Hund, HundFilter, UpdateHund};
use dogule_db::repositories::HundRepo;
use sqlx::PgPool;

use crate::error::{db_failure, AppResult};
use crate::response::Page;
use crate::services::{not_found, validate};

/// Create a dog. An unknown `kundeId` is reported as an invalid payload.
pub async fn create(pool: &PgPool, input: CreateHund) -> AppResult<Hund> {
    validate(HUNDE, &input)?;
    HundRepo::create(pool, &input)
        .await
        .map_err(db_failure(HUNDE, HUNDE.create))
}

pub async fn list(pool: &PgPool, filter: HundFilter, window: PageWindow) -> AppResult<Page<Hund>> {
    let rows = HundRepo::list(pool, &filter, window.limit, window.offset)
        .await
        .map_err(db_failure(HUNDE, HUNDE.list))?;
    let total = HundRepo::count(pool, &filter)
        .await
        .map_err(db_failure(HUNDE, HUNDE.list))?;
    Ok(Page::new(rows, total, window))
}

pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Hund> {
    HundRepo::find_by_id(pool, id)
        .await
        .map_err(db_failure(HUNDE, HUNDE.read))?
        .ok_or_else(|| not_found(HUNDE, id).into())
}

pub async fn update(pool: &PgPool, id: DbId, input: UpdateHund) -> AppResult<Hund> {
    validate(HUNDE, &input)?;
    HundRepo::update(pool, id, &input)
        .await
        .map_err(db_failure(HUNDE, HUNDE.update))?
        .ok_or_else(|| not_found(HUNDE, id).into())
}

pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    let deleted = HundRepo::delete(pool, id)
        .await
        .map_err(db_failure(HUNDE, HUNDE.delete))?;
    if deleted {
        Ok(())
    } else {
        Err(not_found(HUNDE, id).into())
    }
}
