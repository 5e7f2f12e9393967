use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use sojson_client::{ClientSettings, FailureKind, ReqwestClient, RequestClient};
use sojson_core::{IndentSize, OperationKind, ProcessingRequest, ProcessingResult};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestClient {
    ReqwestClient::new(ClientSettings::with_base_url(server.uri())).expect("client")
}

fn request(text: &str, indent: IndentSize) -> ProcessingRequest {
    ProcessingRequest::new(text, indent).expect("non-empty input")
}

#[tokio::test]
async fn format_posts_canonical_body_and_returns_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/format"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "text": "{\"a\":1}", "indent": 4 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": "{\n    \"a\": 1\n}"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .send(OperationKind::Format, &request("  {\"a\":1}\n", IndentSize::Four))
        .await
        .expect("format ok");

    assert_eq!(
        result,
        ProcessingResult::Transformed {
            text: "{\n    \"a\": 1\n}".to_string()
        }
    );
}

#[tokio::test]
async fn each_kind_targets_its_endpoint() {
    let server = MockServer::start().await;
    for endpoint in ["process", "format", "unescape"] {
        Mock::given(method("POST"))
            .and(path(format!("/api/{endpoint}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "result": endpoint
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    for kind in [
        OperationKind::Process,
        OperationKind::Format,
        OperationKind::Unescape,
    ] {
        let result = client
            .send(kind, &request("x", IndentSize::Two))
            .await
            .expect("ok");
        assert_eq!(
            result,
            ProcessingResult::Transformed {
                text: kind.endpoint().to_string()
            }
        );
    }
}

#[tokio::test]
async fn validate_returns_flag_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "valid": false,
            "error": "unexpected end of JSON input"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .send(OperationKind::Validate, &request("{\"a\":", IndentSize::Two))
        .await
        .expect("validate ok");

    assert_eq!(
        result,
        ProcessingResult::Validated {
            valid: false,
            detail: Some("unexpected end of JSON input".to_string())
        }
    );
}

#[tokio::test]
async fn application_failure_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/format"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "JSON syntax error: invalid character"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .send(OperationKind::Format, &request("{oops}", IndentSize::Two))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Rejected);
    assert!(!err.is_transport());
    assert_eq!(err.to_string(), "JSON syntax error: invalid character");
}

#[tokio::test]
async fn non_success_status_is_transport_failure_and_body_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/format"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "error": "should not be read"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .send(OperationKind::Format, &request("{}", IndentSize::Two))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(400));
    assert!(err.is_transport());
    assert!(!err.to_string().contains("should not be read"));
}

#[tokio::test]
async fn process_folds_errors_into_failed_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/unescape"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .process(OperationKind::Unescape, &request("\\\"x\\\"", IndentSize::Two))
        .await;

    match result {
        ProcessingResult::Failed { message } => assert!(message.contains("503")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_times_out_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/format"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "success": true, "result": "{}" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::with_base_url(server.uri())
    };
    let client = ReqwestClient::new(settings).expect("client");
    let err = client
        .send(OperationKind::Format, &request("{}", IndentSize::Two))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/format"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{\"success\":true,\"result\":\"0123456789\"}"),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        max_response_bytes: 10,
        ..ClientSettings::with_base_url(server.uri())
    };
    let client = ReqwestClient::new(settings).expect("client");
    let err = client
        .send(OperationKind::Format, &request("{}", IndentSize::Two))
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 10, .. }
    ));
}

#[tokio::test]
async fn unreachable_service_is_network_failure() {
    // Bind then drop a server so the port is known to be closed.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let client = ReqwestClient::new(ClientSettings::with_base_url(uri)).expect("client");
    let err = client
        .send(OperationKind::Validate, &request("{}", IndentSize::Two))
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(
        err.kind,
        FailureKind::Network | FailureKind::Timeout
    ));
}

#[test]
fn invalid_base_url_fails_at_construction() {
    let err = ReqwestClient::new(ClientSettings::with_base_url("not a url")).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidBaseUrl);
}
