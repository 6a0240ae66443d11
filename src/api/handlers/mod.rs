use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::api::models::ErrorBody;
use crate::database::SqliteRepository;
use crate::errors::TournamentError;
use crate::services::TournamentService;

pub mod matches;
pub mod players;
pub mod rounds;

pub struct AppState {
    pub service: TournamentService<SqliteRepository>,
}

impl AppState {
    pub fn new(service: TournamentService<SqliteRepository>) -> Self {
        Self { service }
    }
}

/// Tournament error rendered as a JSON response
pub struct ApiError(TournamentError);

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            TournamentError::InvalidMatch(_) | TournamentError::InvalidPlayer(_) => {
                StatusCode::BAD_REQUEST
            }
            TournamentError::OddPlayerCount { .. } => StatusCode::CONFLICT,
            TournamentError::MalformedStandings(_)
            | TournamentError::Storage(_)
            | TournamentError::Pool(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Request failed: {}", self.0);
        }
        (status, Json(ErrorBody { error: self.0.to_string() })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
