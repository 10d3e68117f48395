use async_graphql::{Context, Object};
use dogule_core::types::DbId;
use dogule_db::models::finanz::{CreateFinanz, Finanz, UpdateFinanz};
use dogule_db::models::hund::{CreateHund, Hund, UpdateHund};
use dogule_db::models::kalender::{CreateKalenderEvent, KalenderEvent, UpdateKalenderEvent};
use dogule_db::models::kunde::{CreateKunde, Kunde, UpdateKunde};
use dogule_db::models::kurs::{CreateKurs, Kurs, UpdateKurs};
use sqlx::PgPool;

use super::resolve;
use crate::services;

pub struct MutationRoot;

/// Deletes answer `true`; a missing row is a `NOT_FOUND` error, not `false`.
#[Object]
impl MutationRoot {
    async fn create_kunde(
        &self,
        ctx: &Context<'_>,
        input: CreateKunde,
    ) -> async_graphql::Result<Kunde> {
        resolve(services::kunden::create(ctx.data::<PgPool>()?, input).await)
    }

    async fn update_kunde(
        &self,
        ctx: &Context<'_>,
        id: DbId,
        input: UpdateKunde,
    ) -> async_graphql::Result<Kunde> {
        resolve(services::kunden::update(ctx.data::<PgPool>()?, id, input).await)
    }

    async fn delete_kunde(&self, ctx: &Context<'_>, id: DbId) -> async_graphql::Result<bool> {
        resolve(services::kunden::delete(ctx.data::<PgPool>()?, id).await).map(|()| true)
    }

    async fn create_hund(&self, ctx: &Context<'_>, input: CreateHund) -> async_graphql::Result<Hund> {
        resolve(services::hunde::create(ctx.data::<PgPool>()?, input).await)
    }

    async fn update_hund(
        &self,
        ctx: &Context<'_>,
        id: DbId,
        input: UpdateHund,
    ) -> async_graphql::Result<Hund> {
        resolve(services::hunde::update(ctx.data::<PgPool>()?, id, input).await)
    }

    async fn delete_hund(&self, ctx: &Context<'_>, id: DbId) -> async_graphql::Result<bool> {
        resolve(services::hunde::delete(ctx.data::<PgPool>()?, id).await).map(|()| true)
    }

    async fn create_kurs(&self, ctx: &Context<'_>, input: CreateKurs) -> async_graphql::Result<Kurs> {
        resolve(services::kurse::create(ctx.data::<PgPool>()?, input).await)
    }

    async fn update_kurs(
        &self,
        ctx: &Context<'_>,
        id: DbId,
        input: UpdateKurs,
    ) -> async_graphql::Result<Kurs> {
        resolve(services::kurse::update(ctx.data::<PgPool>()?, id, input).await)
    }

    async fn delete_kurs(&self, ctx: &Context<'_>, id: DbId) -> async_graphql::Result<bool> {
        resolve(services::kurse::delete(ctx.data::<PgPool>()?, id).await).map(|()| true)
    }

    async fn create_finanz(
        &self,
        ctx: &Context<'_>,
        input: CreateFinanz,
    ) -> async_graphql::Result<Finanz> {
        resolve(services::finanzen::create(ctx.data::<PgPool>()?, input).await)
    }

    async fn update_finanz(
        &self,
        ctx: &Context<'_>,
        id: DbId,
        input: UpdateFinanz,
    ) -> async_graphql::Result<Finanz> {
        resolve(services::finanzen::update(ctx.data::<PgPool>()?, id, input).await)
    }

    async fn delete_finanz(&self, ctx: &Context<'_>, id: DbId) -> async_graphql::Result<bool> {
        resolve(services::finanzen::delete(ctx.data::<PgPool>()?, id).await).map(|()| true)
    }

    async fn create_kalender_event(
        &self,
        ctx: &Context<'_>,
        input: CreateKalenderEvent,
    ) -> async_graphql::Result<KalenderEvent> {
        resolve(services::kalender::create(ctx.data::<PgPool>()?, input).await)
    }

    async fn update_kalender_event(
        &self,
        ctx: &Context<'_>,
        id: DbId,
        input: UpdateKalenderEvent,
    ) -> async_graphql::Result<KalenderEvent> {
        resolve(services::kalender::update(ctx.data::<PgPool>()?, id, input).await)
    }

    async fn delete_kalender_event(
        &self,
        ctx: &Context<'_>,
        id: DbId,
    ) -> async_graphql::Result<bool> {
        resolve(services::kalender::delete(ctx.data::<PgPool>()?, id).await).map(|()| true)
    }
}
