//! Dashboard aggregation.
//!
//! The six metrics are fetched concurrently and independently: a metric
//! whose query fails is logged and reported as `0`, the others are unaffected.

use async_graphql::SimpleObject;
use chrono::Utc;
use dogule_core::validation::{FINANZ_AUSGABE, FINANZ_EINNAHME};
use dogule_db::models::hund::HundFilter;
use dogule_db::models::kunde::KundeFilter;
use dogule_db::models::kurs::KursFilter;
use dogule_db::repositories::{FinanzRepo, HundRepo, KalenderRepo, KundeRepo, KursRepo};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

/// Totals shown on the dashboard tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, SimpleObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub kunden_count: i64,
    pub hunde_count: i64,
    pub kurse_count: i64,
    /// Calendar events starting now or later.
    pub upcoming_events_count: i64,
    pub einnahmen_cents: i64,
    pub ausgaben_cents: i64,
}

pub async fn summary(pool: &PgPool) -> DashboardSummary {
    let now = Utc::now();
    let kunde_filter = KundeFilter::default();
    let hund_filter = HundFilter::default();
    let kurs_filter = KursFilter::default();
    let (kunden, hunde, kurse, upcoming, einnahmen, ausgaben) = tokio::join!(
        KundeRepo::count(pool, &kunde_filter),
        HundRepo::count(pool, &hund_filter),
        KursRepo::count(pool, &kurs_filter),
        KalenderRepo::count_upcoming(pool, now),
        FinanzRepo::sum_by_typ(pool, FINANZ_EINNAHME, None, None),
        FinanzRepo::sum_by_typ(pool, FINANZ_AUSGABE, None, None),
    );

    DashboardSummary {
        kunden_count: metric("kundenCount", kunden),
        hunde_count: metric("hundeCount", hunde),
        kurse_count: metric("kurseCount", kurse),
        upcoming_events_count: metric("upcomingEventsCount", upcoming),
        einnahmen_cents: metric("einnahmenCents", einnahmen),
        ausgaben_cents: metric("ausgabenCents", ausgaben),
    }
}

fn metric(name: &'static str, result: Result<i64, sqlx::Error>) -> i64 {
    result.unwrap_or_else(|err| {
        tracing::warn!(
            metric = name,
            code = dogule_core::codes::DASHBOARD_001,
            error = %err,
            "Dashboard metric failed, reporting 0"
        );
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_metric_degrades_to_zero() {
        assert_eq!(metric("hundeCount", Err(sqlx::Error::PoolTimedOut)), 0);
        assert_eq!(metric("hundeCount", Ok(7)), 7);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let json = serde_json::to_value(DashboardSummary {
            hunde_count: 2,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["hundeCount"], 2);
        assert_eq!(json["upcomingEventsCount"], 0);
    }
}
