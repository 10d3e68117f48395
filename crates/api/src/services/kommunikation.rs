use dogule_core::codes::KOMMUNIKATION;
use dogule_core::error::CoreError;
use dogule_core::pagination::PageWindow;
use dogule_core::types::DbId;
use dogule_core::validation::validate_kanal;
use dogule_db::models::kommunikation::{
    CreateNachricht, Nachricht, NachrichtFilter, UpdateNachricht,
};
use dogule_db::repositories::KommunikationRepo;
use sqlx::PgPool;

use crate::error::{db_failure, AppResult};
use crate::response::Page;
use crate::services::{not_found, validate};

pub async fn create(pool: &PgPool, input: CreateNachricht) -> AppResult<Nachricht> {
    validate(KOMMUNIKATION, &input)?;
    KommunikationRepo::create(pool, &input)
        .await
        .map_err(db_failure(KOMMUNIKATION, KOMMUNIKATION.create))
}

pub async fn list(
    pool: &PgPool,
    filter: NachrichtFilter,
    window: PageWindow,
) -> AppResult<Page<Nachricht>> {
    if let Some(kanal) = filter.kanal.as_deref() {
        validate_kanal(kanal).map_err(|_| CoreError::Validation {
            code: KOMMUNIKATION.invalid_payload,
            details: Some(serde_json::json!({ "kanal": kanal })),
        })?;
    }
    let rows = KommunikationRepo::list(pool, &filter, window.limit, window.offset)
        .await
        .map_err(db_failure(KOMMUNIKATION, KOMMUNIKATION.list))?;
    let total = KommunikationRepo::count(pool, &filter)
        .await
        .map_err(db_failure(KOMMUNIKATION, KOMMUNIKATION.list))?;
    Ok(Page::new(rows, total, window))
}

pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Nachricht> {
    KommunikationRepo::find_by_id(pool, id)
        .await
        .map_err(db_failure(KOMMUNIKATION, KOMMUNIKATION.read))?
        .ok_or_else(|| not_found(KOMMUNIKATION, id).into())
}

pub async fn update(pool: &PgPool, id: DbId, input: UpdateNachricht) -> AppResult<Nachricht> {
    validate(KOMMUNIKATION, &input)?;
    KommunikationRepo::update(pool, id, &input)
        .await
        .map_err(db_failure(KOMMUNIKATION, KOMMUNIKATION.update))?
        .ok_or_else(|| not_found(KOMMUNIKATION, id).into())
}

pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    let deleted = KommunikationRepo::delete(pool, id)
        .await
        .map_err(db_failure(KOMMUNIKATION, KOMMUNIKATION.delete))?;
    if deleted {
        Ok(())
    } else {
        Err(not_found(KOMMUNIKATION, id).into())
    }
}
