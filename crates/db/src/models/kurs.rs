//! Kurs (course) model and DTOs.

use async_graphql::{InputObject, SimpleObject};
use dogule_core::types::{Cents, Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row from the `kurse` table.
#[derive(Debug, Clone, FromRow, Serialize, SimpleObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Kurs {
    #[schema(value_type = String, format = Uuid)]
    pub id: DbId,
    pub titel: String,
    pub beschreibung: Option<String>,
    pub trainer: Option<String>,
    pub ort: Option<String>,
    pub start_datum: Option<Date>,
    pub end_datum: Option<Date>,
    pub max_teilnehmer: Option<i32>,
    pub preis_cents: Option<Cents>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateKurs {
    #[validate(length(min = 1, max = 200))]
    pub titel: String,
    pub beschreibung: Option<String>,
    #[validate(length(max = 100))]
    pub trainer: Option<String>,
    #[validate(length(max = 200))]
    pub ort: Option<String>,
    pub start_datum: Option<Date>,
    pub end_datum: Option<Date>,
    #[validate(range(min = 1))]
    pub max_teilnehmer: Option<i32>,
    #[validate(range(min = 0))]
    pub preis_cents: Option<Cents>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, InputObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKurs {
    #[validate(length(min = 1, max = 200))]
    pub titel: Option<String>,
    pub beschreibung: Option<String>,
    #[validate(length(max = 100))]
    pub trainer: Option<String>,
    #[validate(length(max = 200))]
    pub ort: Option<String>,
    pub start_datum: Option<Date>,
    pub end_datum: Option<Date>,
    #[validate(range(min = 1))]
    pub max_teilnehmer: Option<i32>,
    #[validate(range(min = 0))]
    pub preis_cents: Option<Cents>,
}

#[derive(Debug, Clone, Default)]
pub struct KursFilter {
    pub search: Option<String>,
}
