use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    matches::{delete_matches, get_matches, report_match},
    players::{count_players, delete_players, get_players, register_player},
    rounds::{get_pairings, get_standings, reset_tournament},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/players",
            get(get_players).post(register_player).delete(delete_players),
        )
        .route("/api/players/count", get(count_players))
        .route(
            "/api/matches",
            get(get_matches).post(report_match).delete(delete_matches),
        )
        .route("/api/standings", get(get_standings))
        .route("/api/pairings", get(get_pairings))
        .route("/api/reset", post(reset_tournament))
        .with_state(state)
}
