//! Integration tests for the HTTP surface.
//!
//! Drives the full router (middleware included) with `tower::ServiceExt::oneshot`
//! over a stubbed generative service and a temp-file snapshot.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tokio::sync::Notify;
use tower::ServiceExt;

use lumina_api::config::ServerConfig;
use lumina_api::router::build_app_router;
use lumina_api::state::AppState;
use lumina_core::suggestions::Suggestions;
use lumina_genai::{GenAiError, GeneratedDraft, GenerativeService};
use lumina_store::{DraftStore, JsonFileStore};
use lumina_studio::Studio;

// ---------------------------------------------------------------------------
// Test app
// ---------------------------------------------------------------------------

/// Stub generative backend with canned successes. When `illustrate_gate`
/// is set, `illustrate` blocks until notified so tests can observe the
/// in-flight state over HTTP.
#[derive(Default)]
struct StubService {
    illustrate_gate: Option<Arc<Notify>>,
}

#[async_trait]
impl GenerativeService for StubService {
    async fn analyze(&self, _content: &str) -> Result<Suggestions, GenAiError> {
        Ok(Suggestions {
            headlines: vec!["H1".into()],
            keywords: vec!["kw".into()],
            summary: "sum".into(),
            sentiment: "Neutral".into(),
        })
    }

    async fn draft_from(&self, _topic: &str) -> Result<GeneratedDraft, GenAiError> {
        Ok(GeneratedDraft {
            title: "Stub Title".into(),
            body: "Stub body text".into(),
        })
    }

    async fn refine(&self, text: &str, _instruction: &str) -> Result<String, GenAiError> {
        Ok(format!("refined {text}"))
    }

    async fn illustrate(&self, _prompt: &str) -> Result<String, GenAiError> {
        if let Some(gate) = &self.illustrate_gate {
            gate.notified().await;
        }
        Ok("data:image/jpeg;base64,img".into())
    }
}

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".into()],
        request_timeout_secs: 5,
        data_file: String::new(),
    }
}

fn test_state(dir: &tempfile::TempDir, service: StubService) -> (AppState, ServerConfig) {
    let snapshot = Arc::new(JsonFileStore::new(dir.path().join("drafts.json")));
    let studio = Studio::new(Arc::new(service), snapshot, DraftStore::new());
    let config = test_config();
    let state = AppState {
        studio: Arc::new(studio),
        config: Arc::new(config.clone()),
    };
    (state, config)
}

fn build_test_app(dir: &tempfile::TempDir) -> Router {
    let (state, config) = test_state(dir, StubService::default());
    build_app_router(state, &config)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Health and plumbing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_test_app(&dir), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_test_app(&dir), "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_test_app(&dir), "/health").await;
    let request_id = response.headers().get("x-request-id");
    assert!(request_id.is_some(), "Response must contain an x-request-id header");
}

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_library_lists_as_empty_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_test_app(&dir), "/api/v1/drafts").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], serde_json::json!([]));
}

#[tokio::test]
async fn invalid_status_filter_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_test_app(&dir), "/api/v1/drafts?status=archived").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn delete_nonexistent_draft_reports_removed_false() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(&dir);
    let uri = format!("/api/v1/drafts/{}", uuid::Uuid::new_v4());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["removed"], false);
}

#[tokio::test]
async fn unknown_draft_id_returns_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let uri = format!("/api/v1/drafts/{}", uuid::Uuid::new_v4());
    let response = get(build_test_app(&dir), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Studio flow
// ---------------------------------------------------------------------------

/// Edit fields, save, and find the draft in the library listing.
#[tokio::test]
async fn edit_save_then_list_flow() {
    let dir = tempfile::tempdir().unwrap();
    let (state, config) = test_state(&dir, StubService::default());

    let edit = post_json(
        build_app_router(state.clone(), &config),
        "/api/v1/studio/edit",
        serde_json::json!({"title": "My Draft", "body": "Some body text"}),
    )
    .await;
    assert_eq!(edit.status(), StatusCode::OK);

    let save = post_json(
        build_app_router(state.clone(), &config),
        "/api/v1/studio/save",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(save.status(), StatusCode::OK);
    let saved = body_json(save).await;
    assert_eq!(saved["data"]["title"], "My Draft");
    assert_eq!(saved["data"]["status"], "draft");
    assert_eq!(saved["data"]["thumbnail"], "https://picsum.photos/400/300");

    let list = get(build_app_router(state, &config), "/api/v1/drafts").await;
    let listed = body_json(list).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    assert_eq!(listed["data"][0]["title"], "My Draft");
}

/// Generate from a topic: title/body replaced and suggestions synced.
#[tokio::test]
async fn generate_replaces_session_fields_and_syncs() {
    let dir = tempfile::tempdir().unwrap();
    let response = post_json(
        build_test_app(&dir),
        "/api/v1/studio/generate",
        serde_json::json!({"topic": "Remote Work"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Stub Title");
    assert_eq!(json["data"]["body"], "Stub body text");
    assert_eq!(json["data"]["suggestions"]["keywords"][0], "kw");
}

#[tokio::test]
async fn generate_without_topic_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let response = post_json(
        build_test_app(&dir),
        "/api/v1/studio/generate",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A slow illustration must not queue the rest of the surface: the session
/// view answers while the call is in flight and reports the running flag,
/// and re-triggering the same operation is a 409.
#[tokio::test]
async fn slow_illustrate_leaves_the_surface_responsive() {
    let dir = tempfile::tempdir().unwrap();
    let gate = Arc::new(Notify::new());
    let (state, config) = test_state(
        &dir,
        StubService {
            illustrate_gate: Some(gate.clone()),
        },
    );

    let edit = post_json(
        build_app_router(state.clone(), &config),
        "/api/v1/studio/edit",
        serde_json::json!({"title": "A Title"}),
    )
    .await;
    assert_eq!(edit.status(), StatusCode::OK);

    let illustrate_app = build_app_router(state.clone(), &config);
    let illustrate = tokio::spawn(async move {
        post_json(illustrate_app, "/api/v1/studio/illustrate", serde_json::json!({})).await
    });

    // The view endpoint keeps answering while the illustration is gated;
    // poll it until the running flag shows up.
    loop {
        let view = get(build_app_router(state.clone(), &config), "/api/v1/studio").await;
        assert_eq!(view.status(), StatusCode::OK);
        if body_json(view).await["data"]["ops"]["illustrate"] == "running" {
            break;
        }
        tokio::task::yield_now().await;
    }

    // Same kind again while running: conflict.
    let retrigger = post_json(
        build_app_router(state.clone(), &config),
        "/api/v1/studio/illustrate",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(retrigger.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(retrigger).await["code"], "CONFLICT");

    gate.notify_one();
    let response = illustrate.await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["generatedImage"], "data:image/jpeg;base64,img");
    assert_eq!(json["data"]["ops"]["illustrate"], "idle");
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analytics_returns_the_static_sample_data() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_test_app(&dir), "/api/v1/analytics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["stats"][0]["label"], "Total Reach");
    assert_eq!(json["data"]["stats"][0]["value"], "1.2M");
    assert_eq!(json["data"]["series"].as_array().unwrap().len(), 7);
    assert_eq!(json["data"]["series"][0]["name"], "Mon");
    assert_eq!(json["data"]["series"][0]["reach"], 4000);
}
