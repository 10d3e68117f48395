//! Shared response envelope types for API handlers.

use async_graphql::{OutputType, SimpleObject};
use dogule_core::pagination::PageWindow;
use dogule_db::models::finanz::Finanz;
use dogule_db::models::hund::Hund;
use dogule_db::models::kalender::KalenderEvent;
use dogule_db::models::kunde::Kunde;
use dogule_db::models::kurs::Kurs;
use serde::Serialize;
use utoipa::ToSchema;

/// One page of a list endpoint: `{ data, total, limit, offset }`.
///
/// `total` counts every row matching the filter, not just this page.
#[derive(Debug, Serialize, SimpleObject, ToSchema)]
#[graphql(concrete(name = "KundePage", params(Kunde)))]
#[graphql(concrete(name = "HundPage", params(Hund)))]
#[graphql(concrete(name = "KursPage", params(Kurs)))]
#[graphql(concrete(name = "FinanzPage", params(Finanz)))]
#[graphql(concrete(name = "KalenderEventPage", params(KalenderEvent)))]
pub struct Page<T: OutputType> {
    pub data: Vec<T>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

impl<T: OutputType> Page<T> {
    pub fn new(data: Vec<T>, total: i64, window: PageWindow) -> Self {
        Self {
            data,
            total,
            limit: window.limit,
            offset: window.offset,
        }
    }
}

/// Standard error body: `{ "message": <code>, "details"?: ... }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Stable error code, e.g. `ERR_KUNDEN_NOT_FOUND`.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}
