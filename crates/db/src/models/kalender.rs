//! Kalender-Event model and DTOs.

use async_graphql::{InputObject, SimpleObject};
use dogule_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row from the `kalender_events` table. `end_at` never precedes `start_at`.
#[derive(Debug, Clone, FromRow, Serialize, SimpleObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KalenderEvent {
    #[schema(value_type = String, format = Uuid)]
    pub id: DbId,
    pub titel: String,
    pub beschreibung: Option<String>,
    pub ort: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub start_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub end_at: Timestamp,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kurs_id: Option<DbId>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub hund_id: Option<DbId>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateKalenderEvent {
    #[validate(length(min = 1, max = 200))]
    pub titel: String,
    pub beschreibung: Option<String>,
    #[validate(length(max = 200))]
    pub ort: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub start_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub end_at: Timestamp,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kurs_id: Option<DbId>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub hund_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, InputObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKalenderEvent {
    #[validate(length(min = 1, max = 200))]
    pub titel: Option<String>,
    pub beschreibung: Option<String>,
    #[validate(length(max = 200))]
    pub ort: Option<String>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub start_at: Option<Timestamp>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub end_at: Option<Timestamp>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kurs_id: Option<DbId>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub hund_id: Option<DbId>,
}

/// Events overlapping `[from, to]`, optionally scoped to a course or dog.
#[derive(Debug, Clone, Default)]
pub struct KalenderFilter {
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    pub kurs_id: Option<DbId>,
    pub hund_id: Option<DbId>,
}
