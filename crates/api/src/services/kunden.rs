use dogule_core::codes::{HUNDE, KOMMUNIKATION, KUNDEN};
use dogule_core::pagination::PageWindow;
use dogule_core::types::DbId;
use dogule_db::models::hund::{Hund, HundFilter};
use dogule_db::models::kommunikation::{Nachricht, NachrichtFilter};
use dogule_db::models::kunde::{CreateKunde, Kunde, KundeFilter, UpdateKunde};
use dogule_db::repositories::{HundRepo, KommunikationRepo, KundeRepo};
use sqlx::PgPool;

use crate::error::{db_failure, AppResult};
use crate::response::Page;
use crate::services::{not_found, validate};

pub async fn create(pool: &PgPool, input: CreateKunde) -> AppResult<Kunde> {
    validate(KUNDEN, &input)?;
    KundeRepo::create(pool, &input)
        .await
        .map_err(db_failure(KUNDEN, KUNDEN.create))
}

pub async fn list(pool: &PgPool, filter: KundeFilter, window: PageWindow) -> AppResult<Page<Kunde>> {
    let rows = KundeRepo::list(pool, &filter, window.limit, window.offset)
        .await
        .map_err(db_failure(KUNDEN, KUNDEN.list))?;
    let total = KundeRepo::count(pool, &filter)
        .await
        .map_err(db_failure(KUNDEN, KUNDEN.list))?;
    Ok(Page::new(rows, total, window))
}

pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Kunde> {
    KundeRepo::find_by_id(pool, id)
        .await
        .map_err(db_failure(KUNDEN, KUNDEN.read))?
        .ok_or_else(|| not_found(KUNDEN, id).into())
}

pub async fn update(pool: &PgPool, id: DbId, input: UpdateKunde) -> AppResult<Kunde> {
    validate(KUNDEN, &input)?;
    KundeRepo::update(pool, id, &input)
        .await
        .map_err(db_failure(KUNDEN, KUNDEN.update))?
        .ok_or_else(|| not_found(KUNDEN, id).into())
}

/// Delete a customer. Their dogs go with them.
pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    let deleted = KundeRepo::delete(pool, id)
        .await
        .map_err(db_failure(KUNDEN, KUNDEN.delete))?;
    if deleted {
        Ok(())
    } else {
        Err(not_found(KUNDEN, id).into())
    }
}

/// Dogs owned by customer `id`.
pub async fn hunde(pool: &PgPool, id: DbId, window: PageWindow) -> AppResult<Page<Hund>> {
    get(pool, id).await?;
    let filter = HundFilter { kunde_id: Some(id) };
    let rows = HundRepo::list(pool, &filter, window.limit, window.offset)
        .await
        .map_err(db_failure(HUNDE, HUNDE.list))?;
    let total = HundRepo::count(pool, &filter)
        .await
        .map_err(db_failure(HUNDE, HUNDE.list))?;
    Ok(Page::new(rows, total, window))
}

/// Message log of customer `id`, newest first.
pub async fn kommunikation(
    pool: &PgPool,
    id: DbId,
    window: PageWindow,
) -> AppResult<Page<Nachricht>> {
    get(pool, id).await?;
    let filter = NachrichtFilter {
        kunde_id: Some(id),
        kanal: None,
    };
    let rows = KommunikationRepo::list(pool, &filter, window.limit, window.offset)
        .await
        .map_err(db_failure(KOMMUNIKATION, KOMMUNIKATION.list))?;
    let total = KommunikationRepo::count(pool, &filter)
        .await
        .map_err(db_failure(KOMMUNIKATION, KOMMUNIKATION.list))?;
    Ok(Page::new(rows, total, window))
}
