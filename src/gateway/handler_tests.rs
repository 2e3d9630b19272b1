//! Tests for the gateway routes: validation mappings, success shapes, and
//! failure propagation, all against the scripted mock provider.

use axum::{Router, body::Body, http::Request, http::StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::gateway::{HandlerState, create_router_with_state};
use crate::harness::NAME_TEST_CASES;
use crate::provider::{MockChatProvider, ResponseEnvelope};

fn test_router(provider: MockChatProvider) -> Router {
    create_router_with_state(HandlerState::new(provider))
}

async fn send_json(router: &Router, uri: &str, body: serde_json::Value) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    router.clone().oneshot(request).await.unwrap()
}

async fn send_empty_post(router: &Router, uri: &str) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    router.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

mod health {
    use super::*;

    #[tokio::test]
    async fn healthz_reports_ok() {
        let router = test_router(MockChatProvider::new());

        let request = Request::builder()
            .method("GET")
            .uri("/healthz")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}

mod generate_route {
    use super::*;

    #[tokio::test]
    async fn returns_target_name_on_success() {
        let provider = MockChatProvider::new();
        provider.push_json(r#"{"targetName":"Jane Doe"}"#);
        let router = test_router(provider);

        let response = send_json(
            &router,
            "/generate",
            serde_json::json!({ "prompt": "a plausible customer name" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "targetName": "Jane Doe" }));
    }

    #[tokio::test]
    async fn blank_prompt_is_a_400() {
        let provider = MockChatProvider::new();
        let router = test_router(provider.clone());

        let response = send_json(&router, "/generate", serde_json::json!({ "prompt": "   " })).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Prompt is required.");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_body_is_a_400() {
        let provider = MockChatProvider::new();
        let router = test_router(provider.clone());

        let response = send_empty_post(&router, "/generate").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Prompt is required.");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn unparseable_body_is_a_400() {
        let provider = MockChatProvider::new();
        let router = test_router(provider.clone());

        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn generation_failure_is_a_500_with_the_error_message() {
        let provider = MockChatProvider::new();
        provider.push_error("connection reset");
        let router = test_router(provider);

        let response = send_json(
            &router,
            "/generate",
            serde_json::json!({ "prompt": "a name" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("connection reset")
        );
    }

    #[tokio::test]
    async fn empty_generated_name_is_a_500() {
        let provider = MockChatProvider::new();
        provider.push_json(r#"{"targetName":"  "}"#);
        let router = test_router(provider);

        let response = send_json(
            &router,
            "/generate",
            serde_json::json!({ "prompt": "a name" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("empty targetName")
        );
    }
}

mod verify_route {
    use super::*;

    #[tokio::test]
    async fn returns_verdict_on_success() {
        let provider = MockChatProvider::new();
        provider.push_json(r#"{"match":true,"confidence":9,"reason":"common nickname"}"#);
        let router = test_router(provider);

        let response = send_json(
            &router,
            "/verify",
            serde_json::json!({ "targetName": "Robert Smith", "candidateName": "Bob Smith" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["match"], true);
        assert_eq!(body["confidence"], 9.0);
        assert_eq!(body["reason"], "common nickname");
    }

    #[tokio::test]
    async fn blank_target_is_a_400() {
        let provider = MockChatProvider::new();
        let router = test_router(provider.clone());

        let response = send_json(
            &router,
            "/verify",
            serde_json::json!({ "targetName": " ", "candidateName": "Bob Smith" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No target name has been generated yet.");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn blank_candidate_is_a_400() {
        let provider = MockChatProvider::new();
        let router = test_router(provider.clone());

        let response = send_json(
            &router,
            "/verify",
            serde_json::json!({ "targetName": "Robert Smith", "candidateName": "" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Candidate name is required.");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_body_reports_the_target_first() {
        let router = test_router(MockChatProvider::new());

        let response = send_empty_post(&router, "/verify").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No target name has been generated yet.");
    }

    #[tokio::test]
    async fn refusal_is_a_500_with_the_refusal_message() {
        let provider = MockChatProvider::new();
        provider.push(ResponseEnvelope::refusal("I can't compare these."));
        let router = test_router(provider);

        let response = send_json(
            &router,
            "/verify",
            serde_json::json!({ "targetName": "A B", "candidateName": "C D" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("I can't compare these.")
        );
    }
}

mod run_tests_route {
    use super::*;

    #[tokio::test]
    async fn runs_the_fixed_table_and_reports_counts() {
        let provider = MockChatProvider::new();
        // Script a verdict per table row that agrees with the expectation.
        for case in &NAME_TEST_CASES {
            provider.push_json(&format!(
                r#"{{"match":{},"confidence":9,"reason":"scripted"}}"#,
                case.expected_match
            ));
        }
        let router = test_router(provider.clone());

        let response = send_empty_post(&router, "/run-tests").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], NAME_TEST_CASES.len());
        assert_eq!(body["passed"], NAME_TEST_CASES.len());
        assert_eq!(body["failed"], 0);
        assert_eq!(
            body["rows"].as_array().unwrap().len(),
            NAME_TEST_CASES.len()
        );
        assert_eq!(provider.call_count(), NAME_TEST_CASES.len());
    }

    #[tokio::test]
    async fn per_case_failures_ride_in_rows_not_the_status() {
        let provider = MockChatProvider::new();
        // Only the first case gets a response; the rest exhaust the script
        // and fail individually.
        provider.push_json(r#"{"match":true,"confidence":9,"reason":"scripted"}"#);
        let router = test_router(provider);

        let response = send_empty_post(&router, "/run-tests").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], NAME_TEST_CASES.len());
        assert_eq!(body["failed"], NAME_TEST_CASES.len() - 1);
        assert_eq!(body["rows"][0]["error"], serde_json::Value::Null);
        assert!(
            body["rows"][1]["error"]
                .as_str()
                .unwrap()
                .contains("mock script exhausted")
        );
    }
}
