//! Finanz (ledger entry) model and DTOs. Amounts are integer cents.

use async_graphql::{InputObject, SimpleObject};
use dogule_core::types::{Cents, Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row from the `finanzen` table. `typ` is `einnahme` or `ausgabe`.
#[derive(Debug, Clone, FromRow, Serialize, SimpleObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Finanz {
    #[schema(value_type = String, format = Uuid)]
    pub id: DbId,
    pub typ: String,
    pub betrag_cents: Cents,
    pub datum: Date,
    pub beschreibung: Option<String>,
    pub kategorie: Option<String>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kunde_id: Option<DbId>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kurs_id: Option<DbId>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFinanz {
    #[validate(custom(function = "dogule_core::validation::validate_finanz_typ"))]
    pub typ: String,
    #[validate(range(min = 0))]
    pub betrag_cents: Cents,
    /// Defaults to today when omitted.
    pub datum: Option<Date>,
    #[validate(length(max = 500))]
    pub beschreibung: Option<String>,
    #[validate(length(max = 100))]
    pub kategorie: Option<String>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kunde_id: Option<DbId>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kurs_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, InputObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFinanz {
    #[validate(custom(function = "dogule_core::validation::validate_finanz_typ"))]
    pub typ: Option<String>,
    #[validate(range(min = 0))]
    pub betrag_cents: Option<Cents>,
    pub datum: Option<Date>,
    #[validate(length(max = 500))]
    pub beschreibung: Option<String>,
    #[validate(length(max = 100))]
    pub kategorie: Option<String>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kunde_id: Option<DbId>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub kurs_id: Option<DbId>,
}

#[derive(Debug, Clone, Default)]
pub struct FinanzFilter {
    pub typ: Option<String>,
    pub from: Option<Date>,
    pub to: Option<Date>,
}

/// Sum of amounts per entry type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, SimpleObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinanzSummary {
    pub einnahme: Cents,
    pub ausgabe: Cents,
    /// `einnahme - ausgabe`.
    pub saldo: Cents,
}
