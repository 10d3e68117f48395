use async_graphql::{Context, Object};
use dogule_core::pagination::PageWindow;
use dogule_core::types::{Date, DbId, Timestamp};
use dogule_db::models::finanz::{Finanz, FinanzFilter, FinanzSummary};
use dogule_db::models::hund::{Hund, HundFilter};
use dogule_db::models::kalender::{KalenderEvent, KalenderFilter};
use dogule_db::models::kunde::{Kunde, KundeFilter};
use dogule_db::models::kurs::{Kurs, KursFilter};
use sqlx::PgPool;

use super::resolve;
use crate::response::Page;
use crate::services;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn kunden(
        &self,
        ctx: &Context<'_>,
        search: Option<String>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> async_graphql::Result<Page<Kunde>> {
        let pool = ctx.data::<PgPool>()?;
        resolve(
            services::kunden::list(
                pool,
                KundeFilter { search },
                PageWindow::new(limit, offset),
            )
            .await,
        )
    }

    async fn kunde(&self, ctx: &Context<'_>, id: DbId) -> async_graphql::Result<Kunde> {
        resolve(services::kunden::get(ctx.data::<PgPool>()?, id).await)
    }

    async fn hunde(
        &self,
        ctx: &Context<'_>,
        kunde_id: Option<DbId>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> async_graphql::Result<Page<Hund>> {
        let pool = ctx.data::<PgPool>()?;
        resolve(
            services::hunde::list(
                pool,
                HundFilter { kunde_id },
                PageWindow::new(limit, offset),
            )
            .await,
        )
    }

    async fn hund(&self, ctx: &Context<'_>, id: DbId) -> async_graphql::Result<Hund> {
        resolve(services::hunde::get(ctx.data::<PgPool>()?, id).await)
    }

    async fn kurse(
        &self,
        ctx: &Context<'_>,
        search: Option<String>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> async_graphql::Result<Page<Kurs>> {
        let pool = ctx.data::<PgPool>()?;
        resolve(
            services::kurse::list(pool, KursFilter { search }, PageWindow::new(limit, offset))
                .await,
        )
    }

    async fn kurs(&self, ctx: &Context<'_>, id: DbId) -> async_graphql::Result<Kurs> {
        resolve(services::kurse::get(ctx.data::<PgPool>()?, id).await)
    }

    async fn finanzen(
        &self,
        ctx: &Context<'_>,
        typ: Option<String>,
        from: Option<Date>,
        to: Option<Date>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> async_graphql::Result<Page<Finanz>> {
        let pool = ctx.data::<PgPool>()?;
        let filter = FinanzFilter { typ, from, to };
        resolve(services::finanzen::list(pool, filter, PageWindow::new(limit, offset)).await)
    }

    async fn finanz(&self, ctx: &Context<'_>, id: DbId) -> async_graphql::Result<Finanz> {
        resolve(services::finanzen::get(ctx.data::<PgPool>()?, id).await)
    }

    async fn finanz_summary(
        &self,
        ctx: &Context<'_>,
        from: Option<Date>,
        to: Option<Date>,
    ) -> async_graphql::Result<FinanzSummary> {
        resolve(services::finanzen::summary(ctx.data::<PgPool>()?, from, to).await)
    }

    async fn kalender_events(
        &self,
        ctx: &Context<'_>,
        from: Option<Timestamp>,
        to: Option<Timestamp>,
        kurs_id: Option<DbId>,
        hund_id: Option<DbId>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> async_graphql::Result<Page<KalenderEvent>> {
        let pool = ctx.data::<PgPool>()?;
        let filter = KalenderFilter {
            from,
            to,
            kurs_id,
            hund_id,
        };
        resolve(services::kalender::list(pool, filter, PageWindow::new(limit, offset)).await)
    }

    async fn kalender_event(
        &self,
        ctx: &Context<'_>,
        id: DbId,
    ) -> async_graphql::Result<KalenderEvent> {
        resolve(services::kalender::get(ctx.data::<PgPool>()?, id).await)
    }
}
