pub mod catalogue;
pub mod genre;
pub mod health;

use crate::config::Config;
use crate::db::Repository;
use axum::{routing::get, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        Self { repo, config }
    }
}

/// `{"message": ...}` body shared by the write and placeholder routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/genre", get(genre::list_genres).post(genre::create_genre))
        .route(
            "/genre/:id",
            get(genre::get_genre)
                .patch(genre::update_genre)
                .delete(genre::delete_genre),
        )
        .route(
            "/catalogue",
            get(catalogue::list_catalogue).post(catalogue::create_catalogue),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
