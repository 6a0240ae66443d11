use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{ApiResult, AppState};
use crate::api::models::PairingParams;

pub async fn get_standings(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.standings()?))
}

pub async fn get_pairings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PairingParams>,
) -> ApiResult<impl IntoResponse> {
    let settings = state
        .service
        .pairing_settings()
        .overridden(params.odd_policy, params.avoid_rematches);

    Ok(Json(state.service.pairings_with(&settings)?))
}

pub async fn reset_tournament(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    state.service.reset()?;
    Ok(StatusCode::NO_CONTENT)
}
