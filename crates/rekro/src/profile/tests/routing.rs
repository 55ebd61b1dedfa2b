use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::profile::profile_router;

#[tokio::test]
async fn completion_route_scores_the_payload() {
    let payload = json!({
        "user": serde_json::to_value(citizen_user()).unwrap(),
        "documents": { "passport": {}, "bank_statement": { "file_name": "march.pdf" } },
    });

    let response = profile_router()
        .oneshot(
            Request::post("/api/v1/profile/completion")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["overall_percentage"], json!(50));
    assert_eq!(body["is_complete"], json!(false));
    assert_eq!(body["sections"][0]["id"], json!("personal-details"));
    assert_eq!(body["badges"], json!(["rekro_trusted", "ready_to_connect"]));
}
