// tests/session_api_test.rs

use std::fs;
use std::sync::Arc;

use auth_api::{build_router, AppState, StaticFiles};
use auth_core::SessionService;
use auth_infrastructure::InMemorySessionRepository;
use auth_security::Base36SessionIdGenerator;
use auth_shared::constants::MAX_REQUEST_BODY_BYTES;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

const NOT_FOUND_HTML: &str = "<html><body>custom not found</body></html>";

/// Router over a fresh session store and a temporary document root.
fn create_test_app() -> (Router, TempDir) {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("index.html"), "<h1>home</h1>").unwrap();
    fs::write(root.path().join("404.html"), NOT_FOUND_HTML).unwrap();
    fs::write(root.path().join("cursor-effect.js"), "console.log('ripple')").unwrap();
    fs::write(root.path().join("logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
    fs::write(root.path().join("notes.xyz"), "opaque").unwrap();
    fs::create_dir(root.path().join("css")).unwrap();
    fs::write(root.path().join("css").join("site.css"), "body {}").unwrap();

    let service = SessionService::new(
        Arc::new(InMemorySessionRepository::new()),
        Arc::new(Base36SessionIdGenerator::default()),
    );
    let state = AppState::new(service, StaticFiles::new(root.path(), "index.html", "404.html"));

    (build_router(state), root)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body.to_vec())
}

async fn post_json(app: &Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn check_session(app: &Router, session_id: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(format!("/api/check-session?sessionId={}", session_id))
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_login_check_logout_flow() {
    let (app, _root) = create_test_app();

    let (status, login) = post_json(
        &app,
        "/api/login",
        json!({"email": "a@b.com", "password": "x"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["success"], json!(true));

    let session_id = login["sessionId"].as_str().unwrap().to_string();
    assert_eq!(session_id.len(), 26);
    assert_eq!(
        login["user"],
        json!({"id": session_id, "email": "a@b.com", "name": "a"})
    );

    let (status, checked) = check_session(&app, &session_id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(checked, json!({"authenticated": true, "user": login["user"].clone()}));

    let (status, logout) =
        post_json(&app, "/api/logout", json!({"sessionId": session_id}).to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logout, json!({"success": true}));

    let (status, checked) = check_session(&app, &session_id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(checked, json!({"authenticated": false}));
}

#[tokio::test]
async fn test_display_name_is_local_part() {
    let (app, _root) = create_test_app();
    let (_, login) = post_json(
        &app,
        "/api/login",
        json!({"email": "jane.doe@example.com", "password": "secret"}).to_string(),
    )
    .await;
    assert_eq!(login["user"]["name"], json!("jane.doe"));
}

#[tokio::test]
async fn test_login_missing_fields() {
    let (app, _root) = create_test_app();
    let bodies = [
        json!({"email": "a@b.com"}),
        json!({"password": "x"}),
        json!({"email": "", "password": "x"}),
        json!({"email": "a@b.com", "password": ""}),
        json!({"email": null, "password": "x"}),
        json!({}),
    ];

    for body in bodies {
        let (status, response) = post_json(&app, "/api/login", body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(
            response,
            json!({"success": false, "message": "Email and password are required"})
        );
    }
}

#[tokio::test]
async fn test_login_malformed_body() {
    let (app, _root) = create_test_app();
    for body in ["not json", "", "[1, 2]", "null", r#"{"email": 5, "password": "x"}"#] {
        let (status, response) = post_json(&app, "/api/login", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{:?}", body);
        assert_eq!(
            response,
            json!({"success": false, "message": "Invalid request format"})
        );
    }
}

#[tokio::test]
async fn test_login_accepts_any_truthy_password() {
    let (app, _root) = create_test_app();
    for password in [json!(5), json!(true), json!([1]), json!({"pin": 1234})] {
        let (status, login) = post_json(
            &app,
            "/api/login",
            json!({"email": "a@b.com", "password": password}).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", password);
        assert_eq!(login["success"], json!(true));
        assert_eq!(login["user"]["name"], json!("a"));
    }
}

#[tokio::test]
async fn test_login_falsy_password_is_missing() {
    let (app, _root) = create_test_app();
    for password in [json!(0), json!(false), json!(null)] {
        let (status, response) = post_json(
            &app,
            "/api/login",
            json!({"email": "a@b.com", "password": password}).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", password);
        assert_eq!(
            response,
            json!({"success": false, "message": "Email and password are required"})
        );
    }
}

#[tokio::test]
async fn test_login_large_body_within_limit() {
    let (app, _root) = create_test_app();
    let password = "p".repeat(3 * 1024 * 1024);
    let (status, login) = post_json(
        &app,
        "/api/login",
        json!({"email": "a@b.com", "password": password}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["success"], json!(true));
}

#[tokio::test]
async fn test_oversized_body_is_invalid_format() {
    let (app, _root) = create_test_app();
    let padding = "p".repeat(MAX_REQUEST_BODY_BYTES + 1);

    for uri in ["/api/login", "/api/logout"] {
        let body = json!({"email": "a@b.com", "password": "x", "sessionId": "s", "pad": padding})
            .to_string();
        let (status, response) = post_json(&app, uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(
            response,
            json!({"success": false, "message": "Invalid request format"})
        );
    }
}

#[tokio::test]
async fn test_login_without_content_type_header() {
    let (app, _root) = create_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/login")
        .body(Body::from(json!({"email": "a@b.com", "password": "x"}).to_string()))
        .unwrap();
    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let (app, _root) = create_test_app();
    let (_, login) = post_json(
        &app,
        "/api/login",
        json!({"email": "a@b.com", "password": "x"}).to_string(),
    )
    .await;
    let session_id = login["sessionId"].as_str().unwrap();

    for _ in 0..2 {
        let (status, logout) =
            post_json(&app, "/api/logout", json!({"sessionId": session_id}).to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(logout, json!({"success": true}));
    }

    let (status, logout) = post_json(&app, "/api/logout", json!({}).to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logout, json!({"success": true}));
}

#[tokio::test]
async fn test_logout_malformed_body() {
    let (app, _root) = create_test_app();
    let (status, response) = post_json(&app, "/api/logout", "{oops").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response,
        json!({"success": false, "message": "Invalid request format"})
    );
}

#[tokio::test]
async fn test_check_session_unknown_or_missing_id() {
    let (app, _root) = create_test_app();

    let (status, checked) = check_session(&app, "never-issued").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(checked, json!({"authenticated": false}));

    let request = Request::builder()
        .uri("/api/check-session")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({"authenticated": false})
    );
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let (app, _root) = create_test_app();
    let (_, first) = post_json(
        &app,
        "/api/login",
        json!({"email": "one@x.io", "password": "p"}).to_string(),
    )
    .await;
    let (_, second) = post_json(
        &app,
        "/api/login",
        json!({"email": "two@x.io", "password": "p"}).to_string(),
    )
    .await;
    assert_ne!(first["sessionId"], second["sessionId"]);

    post_json(
        &app,
        "/api/logout",
        json!({"sessionId": first["sessionId"]}).to_string(),
    )
    .await;

    let (_, checked) = check_session(&app, second["sessionId"].as_str().unwrap()).await;
    assert_eq!(checked["authenticated"], json!(true));
    assert_eq!(checked["user"]["email"], json!("two@x.io"));
}

#[tokio::test]
async fn test_api_preflight_returns_no_content_with_cors() {
    let (app, _root) = create_test_app();
    for uri in ["/api/login", "/api/anything", "/api"] {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::NO_CONTENT, "{}", uri);
        assert!(body.is_empty());
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, POST, OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    }
}

#[tokio::test]
async fn test_api_responses_carry_cors_headers() {
    let (app, _root) = create_test_app();
    let request = Request::builder()
        .uri("/api/check-session?sessionId=abc")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(&app, request).await;
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (_, headers, _) = send(&app, request).await;
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_unknown_api_route_is_json_not_found() {
    let (app, _root) = create_test_app();
    let requests = [
        (Method::GET, "/api/unknown"),
        (Method::GET, "/api"),
        (Method::GET, "/apix"),
        (Method::GET, "/api/login"),
        (Method::POST, "/api/check-session"),
        (Method::DELETE, "/api/logout"),
    ];

    for (method, uri) in requests {
        let request = Request::builder()
            .method(method.clone())
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({"error": "Not found"})
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}

#[tokio::test]
async fn test_static_index_and_content_types() {
    let (app, _root) = create_test_app();
    let cases = [
        ("/", "text/html", b"<h1>home</h1>".to_vec()),
        ("/index.html", "text/html", b"<h1>home</h1>".to_vec()),
        ("/cursor-effect.js", "text/javascript", b"console.log('ripple')".to_vec()),
        ("/css/site.css", "text/css", b"body {}".to_vec()),
        ("/logo.png", "image/png", vec![0x89, b'P', b'N', b'G']),
        ("/notes.xyz", "application/octet-stream", b"opaque".to_vec()),
    ];

    for (uri, content_type, expected) in cases {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, headers, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(headers[header::CONTENT_TYPE], content_type, "{}", uri);
        assert_eq!(body, expected, "{}", uri);
    }
}

#[tokio::test]
async fn test_static_missing_file_serves_not_found_page() {
    let (app, _root) = create_test_app();
    for uri in ["/missing.html", "/css", "/../Cargo.toml"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, headers, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(headers[header::CONTENT_TYPE], "text/html");
        assert_eq!(String::from_utf8(body).unwrap(), NOT_FOUND_HTML);
    }
}

#[tokio::test]
async fn test_static_read_failure_is_server_error() {
    let (app, _root) = create_test_app();
    let request = Request::builder()
        .uri("/index.html/x")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(String::from_utf8(body).unwrap(), "Server Error: ENOTDIR");
}

#[tokio::test]
async fn test_static_missing_not_found_page_uses_builtin() {
    let (app, root) = create_test_app();
    fs::remove_file(root.path().join("404.html")).unwrap();

    let request = Request::builder()
        .uri("/missing.html")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(String::from_utf8(body).unwrap().contains("404 Not Found"));
}

#[tokio::test]
async fn test_health_reports_active_sessions() {
    let (app, _root) = create_test_app();
    post_json(
        &app,
        "/api/login",
        json!({"email": "a@b.com", "password": "x"}).to_string(),
    )
    .await;

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["activeSessions"], json!(1));
}
