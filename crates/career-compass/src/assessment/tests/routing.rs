use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use super::common::{full_responses, read_json_body, section_responses, service};
use crate::assessment::domain::Section;
use crate::assessment::router::assessment_router;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn lists_section_questions_without_answers() {
    let router = assessment_router(service());

    let response = router
        .oneshot(
            Request::get("/api/v1/assessment/sections/technical/questions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let questions = body.as_array().expect("array of questions");
    assert_eq!(questions.len(), 15);
    assert_eq!(questions[0]["id"], "aptitude_0");
    assert_eq!(questions[0]["section"], "technical");
    assert!(questions[0].get("correct").is_none());
}

#[tokio::test]
async fn unknown_section_is_rejected() {
    let router = assessment_router(service());

    let response = router
        .oneshot(
            Request::get("/api/v1/assessment/sections/astrology/questions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn scores_a_single_section() {
    let router = assessment_router(service());
    let responses = section_responses(Section::Psychometric, true);

    let response = router
        .oneshot(post_json(
            "/api/v1/assessment/sections/psychometric/score",
            json!({ "responses": responses }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["overall"], 100);
    assert_eq!(body["band"], "high");
}

#[tokio::test]
async fn incomplete_section_reports_missing_ids() {
    let router = assessment_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/assessment/sections/wiscar/score",
            json!({ "responses": { "will_0": 4 } }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    let missing = body["missing"].as_array().expect("missing ids");
    assert_eq!(missing.len(), 17);
    assert_eq!(missing[0], "will_1");
}

#[tokio::test]
async fn full_report_includes_recommendation() {
    let router = assessment_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/assessment/report",
            json!({ "responses": full_responses(true) }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["result"]["tier"], "yes");
    assert_eq!(body["result"]["overall_score"], 100);
    assert_eq!(body["technical"]["correct_answers"], 15);
}

#[tokio::test]
async fn invalid_option_is_unprocessable() {
    let router = assessment_router(service());
    let responses = full_responses(true).with("java_0", 9);

    let response = router
        .oneshot(post_json(
            "/api/v1/assessment/report",
            json!({ "responses": responses }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("java_0")));
    assert!(body.get("missing").is_none());
}
