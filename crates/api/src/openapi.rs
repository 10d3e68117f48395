//! OpenAPI document served at `/docs.json`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers;

/// Registers the `bearer_auth` scheme referenced by every gated path.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearer_auth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "Access token from `/auth/login`, `/auth/register` or `/auth/refresh`.",
                        ))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Dogule API", description = "Dog school management backend"),
    modifiers(&SecurityAddon),
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::me,
        handlers::auth::logout,
        handlers::kunden::list,
        handlers::kunden::create,
        handlers::kunden::get,
        handlers::kunden::update,
        handlers::kunden::delete,
        handlers::kunden::hunde,
        handlers::kunden::kommunikation,
        handlers::hunde::list,
        handlers::hunde::create,
        handlers::hunde::get,
        handlers::hunde::update,
        handlers::hunde::delete,
        handlers::kurse::list,
        handlers::kurse::create,
        handlers::kurse::get,
        handlers::kurse::update,
        handlers::kurse::delete,
        handlers::kurse::termine,
        handlers::finanzen::list,
        handlers::finanzen::create,
        handlers::finanzen::get,
        handlers::finanzen::update,
        handlers::finanzen::delete,
        handlers::finanzen::summary,
        handlers::kalender::list,
        handlers::kalender::create,
        handlers::kalender::get,
        handlers::kalender::update,
        handlers::kalender::delete,
        handlers::kommunikation::list,
        handlers::kommunikation::create,
        handlers::kommunikation::get,
        handlers::kommunikation::update,
        handlers::kommunikation::delete,
        handlers::dashboard::summary,
        handlers::health::health,
        handlers::health::ready,
    ),
    components(schemas(crate::response::ErrorBody)),
    tags(
        (name = "auth", description = "Registration, login and refresh-token rotation"),
        (name = "kunden", description = "Customers"),
        (name = "hunde", description = "Dogs"),
        (name = "kurse", description = "Courses"),
        (name = "finanzen", description = "Ledger"),
        (name = "kalender", description = "Calendar"),
        (name = "kommunikation", description = "Message log"),
        (name = "dashboard", description = "Aggregated totals"),
        (name = "health", description = "Probes"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/auth/register",
            "/auth/refresh",
            "/api/kunden",
            "/api/kunden/{id}",
            "/api/hunde/{id}",
            "/api/kurse/{id}/termine",
            "/api/finanzen/summary",
            "/api/kalender",
            "/api/kommunikation",
            "/dashboard",
            "/ready",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
