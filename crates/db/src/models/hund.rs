//! Hund (dog) model and DTOs. Every dog belongs to exactly one Kunde.

use async_graphql::{InputObject, SimpleObject};
use dogule_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row from the `hunde` table.
#[derive(Debug, Clone, FromRow, Serialize, SimpleObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hund {
    #[schema(value_type = String, format = Uuid)]
    pub id: DbId,
    #[schema(value_type = String, format = Uuid)]
    pub kunde_id: DbId,
    pub name: String,
    pub rasse: Option<String>,
    pub geburtsdatum: Option<Date>,
    pub chip_nummer: Option<String>,
    pub notizen: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHund {
    #[schema(value_type = String, format = Uuid)]
    pub kunde_id: DbId,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    pub rasse: Option<String>,
    pub geburtsdatum: Option<Date>,
    #[validate(length(max = 50))]
    pub chip_nummer: Option<String>,
    pub notizen: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, InputObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHund {
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kunde_id: Option<DbId>,
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub rasse: Option<String>,
    pub geburtsdatum: Option<Date>,
    #[validate(length(max = 50))]
    pub chip_nummer: Option<String>,
    pub notizen: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct HundFilter {
    pub kunde_id: Option<DbId>,
}
