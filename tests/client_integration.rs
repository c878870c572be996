use httpmock::prelude::*;
use serde_json::json;

use coach_cli::client::BackendClient;
use coach_cli::config::BackendConfig;

fn client_for(server: &MockServer) -> BackendClient {
    let base_url = format!("http://{}", server.address());
    BackendClient::new(&BackendConfig::fixed(base_url)).expect("client builds")
}

#[tokio::test]
async fn game_statistics_issues_a_single_get() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/game_statistics/team_id/alpha-fc");
        then.status(200).json_body(json!({
            "teamId": "alpha-fc",
            "gamesPlayed": 3,
            "wins": 2,
            "draws": 0,
            "losses": 1,
            "goalsFor": 7,
            "goalsAgainst": 4,
            "games": [
                {"opponent": "Beta United", "goalsFor": 3, "goalsAgainst": 1, "playedAt": "2025-05-01"}
            ]
        }));
    });

    let client = client_for(&server);
    let stats = client.game_statistics("alpha-fc").await.unwrap();

    mock.assert();
    assert_eq!(stats.team_id, "alpha-fc");
    assert_eq!(stats.wins, 2);
    assert_eq!(stats.games.len(), 1);
    assert_eq!(stats.games[0].outcome(), "W");
}

#[tokio::test]
async fn training_plans_issues_a_single_get() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/training_plans/team_id/alpha-fc");
        then.status(200).json_body(json!([
            {
                "id": "tp-1",
                "title": "Pressing drills",
                "focus": "defense",
                "scheduledFor": "2025-05-10",
                "drills": [{"name": "4v4 counterpress", "durationMinutes": 20}]
            }
        ]));
    });

    let client = client_for(&server);
    let plans = client.training_plans("alpha-fc").await.unwrap();

    mock.assert();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].title, "Pressing drills");
    assert_eq!(plans[0].drills[0].duration_minutes, Some(20));
}

#[tokio::test]
async fn get_resource_returns_the_body_unmodified() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/game_statistics/team_id/t1");
        then.status(200).json_body(json!({"x": 1}));
    });

    let client = client_for(&server);
    let value: serde_json::Value = client
        .get_resource("game statistics", "/game_statistics/team_id/t1")
        .await
        .unwrap();

    assert_eq!(value, json!({"x": 1}));
}

#[tokio::test]
async fn server_error_logs_once_and_propagates_without_retry() {
    coach_cli::logging::init_logging().unwrap();

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/training_plans/team_id/alpha-fc");
        then.status(500);
    });

    let client = client_for(&server);
    let err = client.training_plans("alpha-fc").await.unwrap_err();

    // Exactly one request hit the server: no retry happened.
    mock.assert();
    assert!(err.to_string().contains("500"));

    let log_path = coach_cli::logging::get_log_file_path().expect("logging initialized");
    let log = std::fs::read_to_string(log_path).unwrap();
    assert_eq!(log.matches("training plans request failed").count(), 1);
}

#[tokio::test]
async fn malformed_body_propagates_as_request_failure() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/game_statistics/team_id/alpha-fc");
        then.status(200)
            .header("content-type", "application/json")
            .body("not json");
    });

    let client = client_for(&server);
    let result = client.game_statistics("alpha-fc").await;

    mock.assert();
    assert!(result.is_err());
}
