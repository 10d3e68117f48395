//! Query parameter types for list endpoints.
//!
//! Every list accepts `?limit=&offset=`; values are clamped through
//! [`PageWindow`] before they reach a repository.

use dogule_core::pagination::PageWindow;
use dogule_core::types::{Date, DbId, Timestamp};
use dogule_db::models::finanz::FinanzFilter;
use dogule_db::models::hund::HundFilter;
use dogule_db::models::kalender::KalenderFilter;
use dogule_db::models::kommunikation::NachrichtFilter;
use dogule_db::models::kunde::KundeFilter;
use dogule_db::models::kurs::KursFilter;
use serde::Deserialize;
use utoipa::IntoParams;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.limit, self.offset)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct KundeListParams {
    /// Case-insensitive match on first name, last name or email.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl KundeListParams {
    pub fn split(self) -> (KundeFilter, PageWindow) {
        (
            KundeFilter {
                search: self.search,
            },
            PageWindow::new(self.limit, self.offset),
        )
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct HundListParams {
    #[param(value_type = Option<String>, format = Uuid)]
    pub kunde_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl HundListParams {
    pub fn split(self) -> (HundFilter, PageWindow) {
        (
            HundFilter {
                kunde_id: self.kunde_id,
            },
            PageWindow::new(self.limit, self.offset),
        )
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct KursListParams {
    /// Case-insensitive match on title or trainer.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl KursListParams {
    pub fn split(self) -> (KursFilter, PageWindow) {
        (
            KursFilter {
                search: self.search,
            },
            PageWindow::new(self.limit, self.offset),
        )
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FinanzListParams {
    /// `einnahme` or `ausgabe`.
    pub typ: Option<String>,
    /// Inclusive lower bound on `datum`.
    pub from: Option<Date>,
    /// Inclusive upper bound on `datum`.
    pub to: Option<Date>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl FinanzListParams {
    pub fn split(self) -> (FinanzFilter, PageWindow) {
        (
            FinanzFilter {
                typ: self.typ,
                from: self.from,
                to: self.to,
            },
            PageWindow::new(self.limit, self.offset),
        )
    }
}

/// `?from=&to=` for the ledger summary.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRangeParams {
    pub from: Option<Date>,
    pub to: Option<Date>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct KalenderListParams {
    /// Only events ending at or after this instant.
    #[param(value_type = Option<String>, format = DateTime)]
    pub from: Option<Timestamp>,
    /// Only events starting at or before this instant.
    #[param(value_type = Option<String>, format = DateTime)]
    pub to: Option<Timestamp>,
    #[param(value_type = Option<String>, format = Uuid)]
    pub kurs_id: Option<DbId>,
    #[param(value_type = Option<String>, format = Uuid)]
    pub hund_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl KalenderListParams {
    pub fn split(self) -> (KalenderFilter, PageWindow) {
        (
            KalenderFilter {
                from: self.from,
                to: self.to,
                kurs_id: self.kurs_id,
                hund_id: self.hund_id,
            },
            PageWindow::new(self.limit, self.offset),
        )
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NachrichtListParams {
    #[param(value_type = Option<String>, format = Uuid)]
    pub kunde_id: Option<DbId>,
    pub kanal: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl NachrichtListParams {
    pub fn split(self) -> (NachrichtFilter, PageWindow) {
        (
            NachrichtFilter {
                kunde_id: self.kunde_id,
                kanal: self.kanal,
            },
            PageWindow::new(self.limit, self.offset),
        )
    }
}
