use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{ApiResult, AppState};
use crate::api::models::{MatchCreated, ReportMatchRequest};
use crate::swiss::NewMatch;

pub async fn get_matches(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.matches()?))
}

pub async fn report_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportMatchRequest>,
) -> ApiResult<impl IntoResponse> {
    let match_id = state.service.report_match(&NewMatch::from(request))?;
    Ok((StatusCode::CREATED, Json(MatchCreated { match_id })))
}

pub async fn delete_matches(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    state.service.delete_matches()?;
    Ok(StatusCode::NO_CONTENT)
}
