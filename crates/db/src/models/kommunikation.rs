//! Kommunikation (message log) model and DTOs.

use async_graphql::{InputObject, SimpleObject};
use dogule_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row from the `kommunikation` table.
#[derive(Debug, Clone, FromRow, Serialize, SimpleObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Nachricht {
    #[schema(value_type = String, format = Uuid)]
    pub id: DbId,
    pub kanal: String,
    pub richtung: String,
    pub betreff: Option<String>,
    pub inhalt: String,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kunde_id: Option<DbId>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub hund_id: Option<DbId>,
    #[schema(value_type = String, format = DateTime)]
    pub gesendet_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNachricht {
    #[validate(custom(function = "dogule_core::validation::validate_kanal"))]
    pub kanal: String,
    #[validate(custom(function = "dogule_core::validation::validate_richtung"))]
    pub richtung: String,
    #[validate(length(max = 200))]
    pub betreff: Option<String>,
    #[validate(length(min = 1))]
    pub inhalt: String,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kunde_id: Option<DbId>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub hund_id: Option<DbId>,
    /// Defaults to now when omitted.
    #[schema(value_type = Option<String>, format = DateTime)]
    pub gesendet_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, InputObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNachricht {
    #[validate(custom(function = "dogule_core::validation::validate_kanal"))]
    pub kanal: Option<String>,
    #[validate(custom(function = "dogule_core::validation::validate_richtung"))]
    pub richtung: Option<String>,
    #[validate(length(max = 200))]
    pub betreff: Option<String>,
    #[validate(length(min = 1))]
    pub inhalt: Option<String>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kunde_id: Option<DbId>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub hund_id: Option<DbId>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub gesendet_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default)]
pub struct NachrichtFilter {
    pub kunde_id: Option<DbId>,
    pub kanal: Option<String>,
}
