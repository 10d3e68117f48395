//! Kunde (customer) model and DTOs.

use async_graphql::{InputObject, SimpleObject};
use dogule_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row from the `kunden` table.
#[derive(Debug, Clone, FromRow, Serialize, SimpleObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Kunde {
    #[schema(value_type = String, format = Uuid)]
    pub id: DbId,
    pub vorname: String,
    pub nachname: String,
    pub email: Option<String>,
    pub telefon: Option<String>,
    pub adresse: Option<String>,
    pub notizen: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// DTO for creating a new customer.
#[derive(Debug, Clone, Deserialize, Validate, InputObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateKunde {
    #[validate(length(min = 1, max = 100))]
    pub vorname: String,
    #[validate(length(min = 1, max = 100))]
    pub nachname: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub telefon: Option<String>,
    #[validate(length(max = 500))]
    pub adresse: Option<String>,
    pub notizen: Option<String>,
}

/// DTO for updating a customer. Only supplied fields are changed.
#[derive(Debug, Clone, Default, Deserialize, Validate, InputObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKunde {
    #[validate(length(min = 1, max = 100))]
    pub vorname: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub nachname: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub telefon: Option<String>,
    #[validate(length(max = 500))]
    pub adresse: Option<String>,
    pub notizen: Option<String>,
}

/// List filter: case-insensitive match on name or email.
#[derive(Debug, Clone, Default)]
pub struct KundeFilter {
    pub search: Option<String>,
}
