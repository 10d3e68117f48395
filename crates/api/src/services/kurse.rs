use dogule_core::codes::{KALENDER, KURSE};
use dogule_core::pagination::PageWindow;
use dogule_core::types::DbId;
use dogule_core::validation::ensure_date_range;
use dogule_db::models::kalender::{KalenderEvent, KalenderFilter};
use dogule_db::models::kurs::{CreateKurs, Kurs, KursFilter, UpdateKurs};
use dogule_db::repositories::{KalenderRepo, KursRepo};
use sqlx::PgPool;

use crate::error::{db_failure, AppResult};
use crate::response::Page;
use crate::services::{not_found, validate};

pub async fn create(pool: &PgPool, input: CreateKurs) -> AppResult<Kurs> {
    validate(KURSE, &input)?;
    ensure_date_range(input.start_datum, input.end_datum, KURSE.invalid_payload)?;
    KursRepo::create(pool, &input)
        .await
        .map_err(db_failure(KURSE, KURSE.create))
}

pub async fn list(pool: &PgPool, filter: KursFilter, window: PageWindow) -> AppResult<Page<Kurs>> {
    let rows = KursRepo::list(pool, &filter, window.limit, window.offset)
        .await
        .map_err(db_failure(KURSE, KURSE.list))?;
    let total = KursRepo::count(pool, &filter)
        .await
        .map_err(db_failure(KURSE, KURSE.list))?;
    Ok(Page::new(rows, total, window))
}

pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Kurs> {
    KursRepo::find_by_id(pool, id)
        .await
        .map_err(db_failure(KURSE, KURSE.read))?
        .ok_or_else(|| not_found(KURSE, id).into())
}

/// Update a course. When only one end of the date range is supplied it is
/// checked against the stored other end.
pub async fn update(pool: &PgPool, id: DbId, input: UpdateKurs) -> AppResult<Kurs> {
    validate(KURSE, &input)?;
    if input.start_datum.is_some() || input.end_datum.is_some() {
        let current = get(pool, id).await?;
        ensure_date_range(
            input.start_datum.or(current.start_datum),
            input.end_datum.or(current.end_datum),
            KURSE.invalid_payload,
        )?;
    }
    KursRepo::update(pool, id, &input)
        .await
        .map_err(db_failure(KURSE, KURSE.update))?
        .ok_or_else(|| not_found(KURSE, id).into())
}

pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    let deleted = KursRepo::delete(pool, id)
        .await
        .map_err(db_failure(KURSE, KURSE.delete))?;
    if deleted {
        Ok(())
    } else {
        Err(not_found(KURSE, id).into())
    }
}

/// Calendar events ("Termine") linked to course `id`, in chronological order.
pub async fn termine(
    pool: &PgPool,
    id: DbId,
    window: PageWindow,
) -> AppResult<Page<KalenderEvent>> {
    get(pool, id).await?;
    let filter = KalenderFilter {
        kurs_id: Some(id),
        ..Default::default()
    };
    let rows = KalenderRepo::list(pool, &filter, window.limit, window.offset)
        .await
        .map_err(db_failure(KALENDER, KALENDER.list))?;
    let total = KalenderRepo::count(pool, &filter)
        .await
        .map_err(db_failure(KALENDER, KALENDER.list))?;
    Ok(Page::new(rows, total, window))
}
