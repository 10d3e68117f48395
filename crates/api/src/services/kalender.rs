use dogule_core::codes::KALENDER;
use dogule_core::pagination::PageWindow;
use dogule_core::types::DbId;
use dogule_core::validation::ensure_time_range;
use dogule_db::models::kalender::{
    CreateKalenderEvent, KalenderEvent, KalenderFilter, UpdateKalenderEvent,
};
use dogule_db::repositories::KalenderRepo;
use sqlx::PgPool;

use crate::error::{db_failure, AppResult};
use crate::response::Page;
use crate::services::{not_found, validate};

/// Create an event. `endAt` before `startAt` is rejected before any SQL runs.
pub async fn create(pool: &PgPool, input: CreateKalenderEvent) -> AppResult<KalenderEvent> {
    validate(KALENDER, &input)?;
    ensure_time_range(input.start_at, input.end_at, KALENDER.invalid_payload)?;
    KalenderRepo::create(pool, &input)
        .await
        .map_err(db_failure(KALENDER, KALENDER.create))
}

pub async fn list(
    pool: &PgPool,
    filter: KalenderFilter,
    window: PageWindow,
) -> AppResult<Page<KalenderEvent>> {
    let rows = KalenderRepo::list(pool, &filter, window.limit, window.offset)
        .await
        .map_err(db_failure(KALENDER, KALENDER.list))?;
    let total = KalenderRepo::count(pool, &filter)
        .await
        .map_err(db_failure(KALENDER, KALENDER.list))?;
    Ok(Page::new(rows, total, window))
}

pub async fn get(pool: &PgPool, id: DbId) -> AppResult<KalenderEvent> {
    KalenderRepo::find_by_id(pool, id)
        .await
        .map_err(db_failure(KALENDER, KALENDER.read))?
        .ok_or_else(|| not_found(KALENDER, id).into())
}

/// Update an event. A partial time change is checked against the stored
/// other end of the range.
pub async fn update(
    pool: &PgPool,
    id: DbId,
    input: UpdateKalenderEvent,
) -> AppResult<KalenderEvent> {
    validate(KALENDER, &input)?;
    if input.start_at.is_some() || input.end_at.is_some() {
        let current = get(pool, id).await?;
        ensure_time_range(
            input.start_at.unwrap_or(current.start_at),
            input.end_at.unwrap_or(current.end_at),
            KALENDER.invalid_payload,
        )?;
    }
    KalenderRepo::update(pool, id, &input)
        .await
        .map_err(db_failure(KALENDER, KALENDER.update))?
        .ok_or_else(|| not_found(KALENDER, id).into())
}

pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    let deleted = KalenderRepo::delete(pool, id)
        .await
        .map_err(db_failure(KALENDER, KALENDER.delete))?;
    if deleted {
        Ok(())
    } else {
        Err(not_found(KALENDER, id).into())
    }
}
