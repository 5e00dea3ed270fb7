use axum::http::StatusCode;
use movie_catalogue::api::{self, AppState};
use movie_catalogue::config::Config;
use movie_catalogue::db::{init_db, run_migrations};
use movie_catalogue::Repository;
use std::net::IpAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

struct TestApp {
    app: axum::Router,
    repo: Arc<Repository>,
    _temp: TempDir,
}

async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();

    let pool = init_db(&db_path, 5).await.expect("init_db failed");
    run_migrations(&pool).await.expect("migrations failed");
    let repo = Arc::new(Repository::new(pool));

    let config = Config {
        bind_addr: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        database_path: db_path,
        db_max_connections: 5,
        run_migrations: true,
    };

    let app = api::create_router(AppState::new(repo.clone(), config));
    TestApp {
        app,
        repo,
        _temp: temp_dir,
    }
}

async fn send(
    app: axum::Router,
    request: axum::http::Request<axum::body::Body>,
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    (status, headers, body)
}

fn get(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_root_endpoint() {
    let test_app = setup_test_app().await;

    let (status, _, body) = send(test_app.app, get("/")).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({"Hello": "World"}));
}

#[tokio::test]
async fn test_health_endpoint() {
    let test_app = setup_test_app().await;

    let (status, _, body) = send(test_app.app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);

    let body_str = String::from_utf8(body).unwrap();
    assert!(body_str.contains("ok"));
}

#[tokio::test]
async fn test_ready_endpoint() {
    let test_app = setup_test_app().await;

    let (status, _, body) = send(test_app.app, get("/ready")).await;
    assert_eq!(status, StatusCode::OK);

    let body_str = String::from_utf8(body).unwrap();
    assert!(body_str.contains("ready"));
}

#[tokio::test]
async fn test_ready_reports_unavailable_after_pool_closed() {
    let test_app = setup_test_app().await;
    test_app.repo.close().await;

    let (status, _, body) = send(test_app.app, get("/ready")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_storage_failure_is_generic_server_error() {
    let test_app = setup_test_app().await;
    test_app.repo.close().await;

    let (status, _, body) = send(test_app.app, get("/genre")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let test_app = setup_test_app().await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/genre")
        .header("origin", "https://somewhere.example")
        .body(axum::body::Body::empty())
        .unwrap();

    let (status, headers, _) = send(test_app.app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_cors_preflight_allows_any_method() {
    let test_app = setup_test_app().await;

    let request = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/genre/1")
        .header("origin", "https://somewhere.example")
        .header("access-control-request-method", "DELETE")
        .body(axum::body::Body::empty())
        .unwrap();

    let (status, headers, _) = send(test_app.app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "*");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let test_app = setup_test_app().await;

    let (status, _, _) = send(test_app.app, get("/movies")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_end_to_end_genre_scenario() {
    let test_app = setup_test_app().await;

    let (status, _, body) = send(
        test_app.app.clone(),
        post_json("/genre", r#"{"name":"Action"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({"message": "Genre created successfully"}));

    let (_, _, body) = send(
        test_app.app.clone(),
        post_json("/genre", r#"{"name":"Action"}"#),
    )
    .await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({"message": "Genre already exists"}));

    let (status, _, body) = send(test_app.app, get("/genre")).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let genres = json.as_array().unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0]["id"], 1);
    assert_eq!(genres[0]["name"], "Action");
    assert!(genres[0]["created_at"].is_string());
}
