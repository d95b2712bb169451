// ABOUTME: Integration tests for the SportID workout stats client against a mock server
// ABOUTME: Covers request shape, payload decoding, and HTTP error classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::json;
use sportid_monitor::errors::ErrorCode;
use sportid_monitor::models::NumericValue;
use sportid_monitor::pipeline::StatsSource;
use sportid_monitor::sportid::{SportIdClient, SportIdClientConfig};
use sportid_monitor::utils::http_client::create_client;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATS_PATH: &str = "/user/9121/workout/stats";

fn create_test_client(server: &MockServer) -> SportIdClient {
    SportIdClient::new(
        SportIdClientConfig {
            base_url: server.uri(),
            user_id: 9121,
            session_cookie: "cookie-value".to_owned(),
        },
        create_client().unwrap(),
    )
}

#[tokio::test]
async fn test_fetch_sends_cookie_query_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .and(query_param("overview", "true"))
        .and(query_param("time_interval", "7"))
        .and(header("Cookie", "sportid_session=cookie-value"))
        .and(header("Accept", "application/json"))
        .and(header("User-Agent", "dd-stats-monitor 0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "alice", "distance": 5.2, "points": 12}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let records = create_test_client(&server)
        .fetch_workout_stats()
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "alice");
    assert_eq!(records[0].distance.as_f64(), Some(5.2));
    assert_eq!(records[0].points.as_f64(), Some(12.0));
}

#[tokio::test]
async fn test_fetch_keeps_string_encoded_numbers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "bob", "distance": "3.5", "points": "7"}
        ])))
        .mount(&server)
        .await;

    let records = create_test_client(&server)
        .get_workout_stats()
        .await
        .unwrap();

    assert_eq!(records[0].distance, NumericValue::Text("3.5".to_owned()));
    assert_eq!(records[0].points.as_f64(), Some(7.0));
}

#[tokio::test]
async fn test_fetch_empty_overview() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let records = create_test_client(&server)
        .get_workout_stats()
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_server_error_is_external_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = create_test_client(&server)
        .get_workout_stats()
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(err.status, Some(500));
    assert!(err.message.contains("SportID"));
    assert!(err.message.contains("boom"));
}

#[tokio::test]
async fn test_expired_cookie_is_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = create_test_client(&server)
        .get_workout_stats()
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalAuthFailed);
    assert_eq!(err.status, Some(401));
}

#[tokio::test]
async fn test_record_missing_field_is_invalid_format() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "carol", "distance": 1.0}
        ])))
        .mount(&server)
        .await;

    let err = create_test_client(&server)
        .get_workout_stats()
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[tokio::test]
async fn test_non_json_body_is_invalid_format() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = create_test_client(&server)
        .get_workout_stats()
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[tokio::test]
async fn test_unreachable_upstream_is_unavailable() {
    let client = SportIdClient::new(
        SportIdClientConfig {
            base_url: "http://127.0.0.1:1".to_owned(),
            user_id: 9121,
            session_cookie: "cookie-value".to_owned(),
        },
        create_client().unwrap(),
    );

    let err = client.get_workout_stats().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}
