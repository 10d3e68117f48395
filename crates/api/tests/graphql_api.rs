//! Integration tests for `/graphql`.

mod common;

use axum::http::StatusCode;
use common::{access_token, body_json, post_json, post_json_auth};
use sqlx::PgPool;

async fn graphql(
    app: axum::Router,
    token: &str,
    query: &str,
    variables: serde_json::Value,
) -> serde_json::Value {
    let response = post_json_auth(
        app,
        "/graphql",
        token,
        serde_json::json!({ "query": query, "variables": variables }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[sqlx::test]
async fn create_and_list_kunden(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let token = access_token(app.clone()).await;

    let created = graphql(
        app.clone(),
        &token,
        "mutation($input: CreateKunde!) { createKunde(input: $input) { id nachname } }",
        serde_json::json!({ "input": { "vorname": "Beat", "nachname": "Graf" } }),
    )
    .await;
    assert!(created.get("errors").is_none(), "{created}");
    assert_eq!(created["data"]["createKunde"]["nachname"], "Graf");

    let listed = graphql(
        app,
        &token,
        "{ kunden(limit: 10) { total limit data { nachname } } }",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(listed["data"]["kunden"]["total"], 1);
    assert_eq!(listed["data"]["kunden"]["limit"], 10);
    assert_eq!(listed["data"]["kunden"]["data"][0]["nachname"], "Graf");
}

#[sqlx::test]
async fn errors_carry_stable_code(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let token = access_token(app.clone()).await;

    let json = graphql(
        app,
        &token,
        r#"mutation { createKalenderEvent(input: {
            titel: "Rueckwaerts",
            startAt: "2026-03-01T10:00:00Z",
            endAt: "2026-03-01T09:00:00Z"
        }) { id } }"#,
        serde_json::json!({}),
    )
    .await;

    let error = &json["errors"][0];
    assert_eq!(error["message"], "ERR_KALENDER_INVALID_PAYLOAD");
    assert_eq!(error["extensions"]["code"], "ERR_KALENDER_INVALID_PAYLOAD");
    assert_eq!(error["extensions"]["status"], 400);
}

#[sqlx::test]
async fn update_and_delete_kalender_event(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let token = access_token(app.clone()).await;

    let created = graphql(
        app.clone(),
        &token,
        r#"mutation { createKalenderEvent(input: {
            titel: "Welpenstunde",
            startAt: "2026-03-01T09:00:00Z",
            endAt: "2026-03-01T10:00:00Z"
        }) { id } }"#,
        serde_json::json!({}),
    )
    .await;
    assert!(created.get("errors").is_none(), "{created}");
    let id = created["data"]["createKalenderEvent"]["id"]
        .as_str()
        .expect("id in response")
        .to_string();

    let updated = graphql(
        app.clone(),
        &token,
        "mutation($id: UUID!, $input: UpdateKalenderEvent!) {
            updateKalenderEvent(id: $id, input: $input) { id titel ort }
        }",
        serde_json::json!({ "id": id, "input": { "titel": "Junghunde", "ort": "Platz 2" } }),
    )
    .await;
    assert!(updated.get("errors").is_none(), "{updated}");
    assert_eq!(updated["data"]["updateKalenderEvent"]["titel"], "Junghunde");
    assert_eq!(updated["data"]["updateKalenderEvent"]["ort"], "Platz 2");

    // Only the end moves, so the stored start decides the range.
    let inverted = graphql(
        app.clone(),
        &token,
        "mutation($id: UUID!, $input: UpdateKalenderEvent!) {
            updateKalenderEvent(id: $id, input: $input) { id }
        }",
        serde_json::json!({ "id": id, "input": { "endAt": "2026-03-01T08:00:00Z" } }),
    )
    .await;
    let error = &inverted["errors"][0];
    assert_eq!(error["extensions"]["code"], "ERR_KALENDER_INVALID_PAYLOAD");
    assert_eq!(error["extensions"]["status"], 400);

    let delete = "mutation($id: UUID!) { deleteKalenderEvent(id: $id) }";
    let deleted = graphql(app.clone(), &token, delete, serde_json::json!({ "id": id })).await;
    assert!(deleted.get("errors").is_none(), "{deleted}");
    assert_eq!(deleted["data"]["deleteKalenderEvent"], true);

    let again = graphql(app.clone(), &token, delete, serde_json::json!({ "id": id })).await;
    let error = &again["errors"][0];
    assert_eq!(error["extensions"]["code"], "ERR_KALENDER_NOT_FOUND");
    assert_eq!(error["extensions"]["status"], 404);

    let fetched = graphql(
        app,
        &token,
        "query($id: UUID!) { kalenderEvent(id: $id) { id } }",
        serde_json::json!({ "id": id }),
    )
    .await;
    assert_eq!(fetched["errors"][0]["extensions"]["code"], "ERR_KALENDER_NOT_FOUND");
}

#[sqlx::test]
async fn finanz_summary_query(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let token = access_token(app.clone()).await;

    for (typ, betrag) in [("ausgabe", 1500), ("einnahme", 2500)] {
        let json = graphql(
            app.clone(),
            &token,
            "mutation($input: CreateFinanz!) { createFinanz(input: $input) { id } }",
            serde_json::json!({ "input": { "typ": typ, "betragCents": betrag } }),
        )
        .await;
        assert!(json.get("errors").is_none(), "{json}");
    }

    let json = graphql(
        app,
        &token,
        "{ finanzSummary { einnahme ausgabe saldo } }",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(json["data"]["finanzSummary"]["einnahme"], 2500);
    assert_eq!(json["data"]["finanzSummary"]["ausgabe"], 1500);
    assert_eq!(json["data"]["finanzSummary"]["saldo"], 1000);
}

#[sqlx::test]
async fn graphql_requires_bearer_token(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app,
        "/graphql",
        serde_json::json!({ "query": "{ kunden { total } }" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "ERR_AUTH_MISSING_TOKEN");
}
