// ABOUTME: Integration tests for the Datadog series client against a mock server
// ABOUTME: Verifies key headers, the series body, status reporting, and rejected submissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::{json, Value};
use sportid_monitor::datadog::{DatadogClient, DatadogClientConfig};
use sportid_monitor::errors::ErrorCode;
use sportid_monitor::models::MetricObservation;
use sportid_monitor::pipeline::MetricSink;
use sportid_monitor::utils::http_client::create_client;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(server: &MockServer) -> DatadogClient {
    DatadogClient::new(
        DatadogClientConfig {
            base_url: server.uri(),
            api_key: "api-key".to_owned(),
            app_key: "app-key".to_owned(),
        },
        create_client().unwrap(),
    )
}

fn alice_observations() -> Vec<MetricObservation> {
    vec![
        MetricObservation::gauge(
            "sportid.workout.distance",
            5.2,
            vec!["name:alice".to_owned()],
            "box1",
        ),
        MetricObservation::gauge(
            "sportid.workout.points",
            12.0,
            vec!["name:alice".to_owned()],
            "box1",
        ),
    ]
}

#[tokio::test]
async fn test_submit_sends_keys_and_returns_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/series"))
        .and(header("DD-API-KEY", "api-key"))
        .and(header("DD-APPLICATION-KEY", "app-key"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let status = create_test_client(&server)
        .submit(&alice_observations())
        .await
        .unwrap();

    assert_eq!(status, "ok");
}

#[tokio::test]
async fn test_submit_body_is_one_series_per_observation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/series"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    create_test_client(&server)
        .send_metrics(&alice_observations())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let series = body["series"].as_array().unwrap();
    assert_eq!(series.len(), 2);

    assert_eq!(series[0]["metric"], "sportid.workout.distance");
    assert_eq!(series[0]["points"][0][1], 5.2);
    assert!(series[0]["points"][0][0].as_i64().unwrap() > 0);
    assert_eq!(series[0]["tags"], json!(["name:alice"]));
    assert_eq!(series[0]["host"], "box1");
    assert_eq!(series[0]["type"], "gauge");

    assert_eq!(series[1]["metric"], "sportid.workout.points");
    assert_eq!(series[1]["points"][0][1], 12.0);
}

#[tokio::test]
async fn test_unexpected_success_body_reports_unknown() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/series"))
        .respond_with(ResponseTemplate::new(202).set_body_string("accepted"))
        .mount(&server)
        .await;

    let status = create_test_client(&server)
        .send_metrics(&alice_observations())
        .await
        .unwrap();

    assert_eq!(status, "unknown");
}

#[tokio::test]
async fn test_rejected_keys_are_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/series"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"errors": ["Forbidden"]})),
        )
        .mount(&server)
        .await;

    let err = create_test_client(&server)
        .send_metrics(&alice_observations())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalAuthFailed);
    assert_eq!(err.status, Some(403));
    assert!(err.message.contains("Datadog"));
}

#[tokio::test]
async fn test_server_error_is_external_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/series"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = create_test_client(&server)
        .send_metrics(&alice_observations())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(err.status, Some(503));
}
