//! Integration tests for the HTTP API

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use swiss_pairings::api::create_router;
use swiss_pairings::api::handlers::AppState;
use swiss_pairings::config::PairingSettings;
use swiss_pairings::database::SqliteRepository;
use swiss_pairings::services::TournamentService;

fn test_app() -> Router {
    let repository = SqliteRepository::open_in_memory(true).unwrap();
    let service = TournamentService::new(repository, PairingSettings::default());
    create_router(Arc::new(AppState::new(service)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_register_and_list_players() {
    let app = test_app();

    let (status, json) = send(&app, "POST", "/api/players", Some(json!({"name": "Ada"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["id"], 1);

    let (status, json) = send(&app, "GET", "/api/players", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["name"], "Ada");

    let (_, json) = send(&app, "GET", "/api/players/count", None).await;
    assert_eq!(json["count"], 1);
}

#[tokio::test]
async fn test_standings_and_pairings() {
    let app = test_app();
    for name in ["A", "B", "C", "D"] {
        send(&app, "POST", "/api/players", Some(json!({"name": name}))).await;
    }

    let (status, json) = send(
        &app,
        "POST",
        "/api/matches",
        Some(json!({"winner": 1, "loser": 2, "winnerScore": 3, "loserScore": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["matchId"], 1);
    send(&app, "POST", "/api/matches", Some(json!({"winner": 3, "loser": 4}))).await;

    let (status, json) = send(&app, "GET", "/api/standings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["id"], 1);
    assert_eq!(json[0]["matchesPlayed"], 1);
    assert_eq!(json[1]["id"], 3);

    let (status, json) = send(&app, "GET", "/api/pairings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["pairings"][0]["first"]["id"], 1);
    assert_eq!(json["pairings"][0]["second"]["id"], 3);
    assert_eq!(json["pairings"][1]["first"]["id"], 2);
    assert_eq!(json["unpaired"], Value::Null);
}

#[tokio::test]
async fn test_odd_field_conflict_and_bye() {
    let app = test_app();
    for name in ["A", "B", "C"] {
        send(&app, "POST", "/api/players", Some(json!({"name": name}))).await;
    }

    let (status, json) = send(&app, "GET", "/api/pairings", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains("odd"));

    let (status, json) = send(&app, "GET", "/api/pairings?oddPolicy=bye", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["unpaired"]["seat"]["id"], 3);
    assert_eq!(json["unpaired"]["outcome"], "bye");
}

#[tokio::test]
async fn test_invalid_match_is_bad_request() {
    let app = test_app();
    send(&app, "POST", "/api/players", Some(json!({"name": "A"}))).await;

    let body = json!({"winner": 1, "loser": 1});
    let (status, json) = send(&app, "POST", "/api/matches", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().starts_with("Invalid match"));
}

#[tokio::test]
async fn test_purge_endpoints() {
    let app = test_app();
    send(&app, "POST", "/api/players", Some(json!({"name": "A"}))).await;
    send(&app, "POST", "/api/players", Some(json!({"name": "B"}))).await;
    send(&app, "POST", "/api/matches", Some(json!({"winner": 2, "loser": 1}))).await;

    let (status, _) = send(&app, "DELETE", "/api/players", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&app, "DELETE", "/api/matches", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, json) = send(&app, "GET", "/api/standings", None).await;
    assert_eq!(json[1]["wins"], 0);
    assert_eq!(json[1]["matchesPlayed"], 0);

    let (status, _) = send(&app, "POST", "/api/reset", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, json) = send(&app, "GET", "/api/players/count", None).await;
    assert_eq!(json["count"], 0);
}
