use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::{AppState, MessageResponse};
use crate::domain::{Genre, GenreInsert, NewGenre};
use crate::error::AppError;

pub const GENRE_CREATED: &str = "Genre created successfully";
pub const GENRE_EXISTS: &str = "Genre already exists";
pub const NOT_IMPLEMENTED: &str = "Not implemented";

#[derive(Debug, Serialize)]
pub struct GenreIdResponse {
    pub id: i64,
}

pub async fn create_genre(
    State(state): State<AppState>,
    payload: Result<Json<NewGenre>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(genre) = payload?;

    let message = match state.repo.create_genre(&genre).await? {
        GenreInsert::Created(created) => {
            tracing::info!(id = created.id, name = %created.name, "genre created");
            GENRE_CREATED
        }
        GenreInsert::AlreadyExists => {
            tracing::info!(name = %genre.name, "genre already exists");
            GENRE_EXISTS
        }
    };

    Ok(Json(MessageResponse::new(message)))
}

pub async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, AppError> {
    Ok(Json(state.repo.list_genres().await?))
}

// The three handlers below are placeholders; none of them reads or writes storage.

pub async fn get_genre(
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<GenreIdResponse>, AppError> {
    let Path(id) = id?;
    Ok(Json(GenreIdResponse { id }))
}

pub async fn update_genre(
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(_id) = id?;
    Ok(Json(MessageResponse::new(NOT_IMPLEMENTED)))
}

pub async fn delete_genre(
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(_id) = id?;
    Ok(Json(MessageResponse::new(NOT_IMPLEMENTED)))
}
