use axum::Json;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

/// GET /docs.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
