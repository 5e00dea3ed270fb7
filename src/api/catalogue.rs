use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::{AppState, MessageResponse};
use crate::domain::{Catalogue, NewCatalogue};
use crate::error::AppError;

pub const MOVIE_ADDED: &str = "Movie added successfully";

pub async fn create_catalogue(
    State(state): State<AppState>,
    payload: Result<Json<NewCatalogue>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(entry) = payload?;

    let created = state.repo.create_catalogue(&entry).await?;
    tracing::info!(
        id = created.id,
        name = %created.name,
        genre_id = ?created.genre_id,
        "movie added"
    );

    Ok(Json(MessageResponse::new(MOVIE_ADDED)))
}

pub async fn list_catalogue(
    State(state): State<AppState>,
) -> Result<Json<Vec<Catalogue>>, AppError> {
    Ok(Json(state.repo.list_catalogue().await?))
}
