//! HTTP-level integration tests for the check-in server.
//!
//! Drives the full router (API routes, static fallback, error mapping) in
//! process with `oneshot`; no listener is bound.

use axum::body::Body;
use guest_checkin::{build_router, AppState, GuestDirectory};
use http_body_util::BodyExt;
use hyper::{header, Request, StatusCode};
use tempfile::TempDir;
use tower::ServiceExt;

const GUEST_LIST: &str = "Name,Table\nAlice Smith,4\nBob Jones,12\n";

// ── Test app builder ───────────────────────────────────────────

struct TestApp {
    router: axum::Router,
    _static_dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let static_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            static_dir.path().join("index.html"),
            "<html><body>check-in</body></html>",
        )
        .unwrap();
        std::fs::write(static_dir.path().join("app.js"), "console.log('hi');").unwrap();

        let state = AppState::new(GuestDirectory::parse(GUEST_LIST));
        let router = build_router(state, static_dir.path());

        Self {
            router,
            _static_dir: static_dir,
        }
    }

    async fn send(&self, request: Request<Body>) -> axum::response::Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn register(&self, body: &str) -> (StatusCode, serde_json::Value) {
        let resp = self
            .send(
                Request::builder()
                    .method("POST")
                    .uri("/api/register")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await;
        let status = resp.status();
        (status, body_json(resp).await)
    }

    async fn export(&self) -> axum::response::Response {
        self.send(
            Request::builder()
                .uri("/api/guests.csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

// ── Helpers to read response bodies ────────────────────────────

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(
        |_| serde_json::json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }),
    )
}

// ── Registration ───────────────────────────────────────────────

#[tokio::test]
async fn test_register_matches_case_insensitively() {
    let app = TestApp::new();

    let (status, body) = app.register(r#"{"name": " alice smith "}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({ "success": true, "name": "Alice Smith", "tableNumber": 4 })
    );
}

#[tokio::test]
async fn test_repeat_register_returns_same_assignment() {
    let app = TestApp::new();

    let (_, first) = app.register(r#"{"name": " alice smith "}"#).await;
    let (status, second) = app.register(r#"{"name": "ALICE SMITH"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);

    let csv = body_text(app.export().await).await;
    assert_eq!(csv.lines().count(), 2);
}

#[tokio::test]
async fn test_blank_name_is_bad_request() {
    let app = TestApp::new();

    for body in [r#"{"name": ""}"#, r#"{"name": "   "}"#, r#"{}"#, r#"{"name": null}"#] {
        let (status, json) = app.register(body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "Name is required." })
        );
    }
}

#[tokio::test]
async fn test_unknown_name_is_not_found_and_not_logged() {
    let app = TestApp::new();

    let (status, json) = app.register(r#"{"name": "Bob Nobody"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("Name not found."));

    let csv = body_text(app.export().await).await;
    assert_eq!(csv, "Name,Table,Time\n");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new();

    let (status, json) = app.register("{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);

    let (status, _) = app.register(r#"{"name": 42}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Export ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_export_headers_and_rows() {
    let app = TestApp::new();

    app.register(r#"{"name": "bob jones"}"#).await;
    app.register(r#"{"name": "Alice Smith"}"#).await;

    let resp = app.export().await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=registered-guests.csv"
    );

    let csv = body_text(resp).await;
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Name,Table,Time");
    assert!(lines[1].starts_with("\"Bob Jones\",12,"));
    assert!(lines[2].starts_with("\"Alice Smith\",4,"));
    assert!(lines[1].ends_with('Z'));
}

#[tokio::test]
async fn test_export_empty_has_header() {
    let app = TestApp::new();
    let csv = body_text(app.export().await).await;
    assert_eq!(csv, "Name,Table,Time\n");
}

// ── Static front end ───────────────────────────────────────────

#[tokio::test]
async fn test_static_file_is_served() {
    let app = TestApp::new();
    let resp = app
        .send(Request::builder().uri("/app.js").body(Body::empty()).unwrap())
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "console.log('hi');");
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_index() {
    let app = TestApp::new();
    let resp = app
        .send(
            Request::builder()
                .uri("/checkin/welcome")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("check-in"));
}
