//! GraphQL surface at `/graphql`.
//!
//! Mirrors the REST create/list/get/update/delete operations for kunden,
//! hunde, kurse, finanzen and kalender through the same services, so
//! validation and error codes are identical. Errors carry the stable code
//! in `extensions.code`.

mod mutation;
mod query;

use async_graphql::{EmptySubscription, ErrorExtensions, Schema};
use sqlx::PgPool;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::error::AppResult;

pub type DoguleSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the pool as shared context data.
pub fn build_schema(pool: PgPool) -> DoguleSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}

/// Convert a service result into a GraphQL result with code extensions.
fn resolve<T>(result: AppResult<T>) -> async_graphql::Result<T> {
    result.map_err(|e| e.extend())
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::PgPoolOptions;

    use super::*;

    #[tokio::test]
    async fn sdl_exposes_five_entities() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        let sdl = build_schema(pool).sdl();

        for field in [
            "kunden(",
            "hund(",
            "kurse(",
            "finanzSummary(",
            "kalenderEvents(",
            "createKunde(",
            "updateKalenderEvent(",
            "deleteFinanz(",
        ] {
            assert!(sdl.contains(field), "missing {field}");
        }
        assert!(sdl.contains("type KundePage"));
        assert!(!sdl.contains("Nachricht"));
    }
}
