use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{ApiResult, AppState};
use crate::api::models::{PlayerCount, PlayerCreated, RegisterPlayerRequest};

pub async fn get_players(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.players()?))
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterPlayerRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = state.service.register_player(&request.name)?;
    Ok((StatusCode::CREATED, Json(PlayerCreated { id })))
}

pub async fn count_players(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let count = state.service.count_players()?;
    Ok(Json(PlayerCount { count }))
}

pub async fn delete_players(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    state.service.delete_players()?;
    Ok(StatusCode::NO_CONTENT)
}
