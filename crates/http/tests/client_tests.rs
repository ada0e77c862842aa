//! Integration tests for the Lucrum HTTP client

use lucrum_http::client::{LucrumClient, error::ClientError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_client_builder() {
    let client = LucrumClient::builder()
        .base_url("http://localhost:8080/api")
        .api_key("test-key")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080/api");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = LucrumClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_client_builder_trims_trailing_slash() {
    let client = LucrumClient::new("http://localhost:8080/api/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080/api");
}

#[tokio::test]
async fn test_login_returns_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(body_json(json!({
            "email": "trader@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "session-token-123"
        })))
        .mount(&mock_server)
        .await;

    let client = LucrumClient::new(mock_server.uri()).unwrap();

    let response = client
        .login("trader@example.com".into(), "hunter2".into())
        .await
        .unwrap();
    assert_eq!(response.token, "session-token-123");
}

#[tokio::test]
async fn test_register_discards_response_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "email": "trader@example.com"
        })))
        .mount(&mock_server)
        .await;

    let client = LucrumClient::new(mock_server.uri()).unwrap();

    let result = client
        .register("trader@example.com".into(), "hunter2".into())
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_auth_with_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(header("authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "t" })))
        .mount(&mock_server)
        .await;

    let client = LucrumClient::builder()
        .base_url(mock_server.uri())
        .api_key("test-api-key")
        .build()
        .unwrap();

    let response = client.login("a@b.c".into(), "pw".into()).await;
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_error_body_field_is_preferred() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid credentials",
            "message": "authentication was rejected"
        })))
        .mount(&mock_server)
        .await;

    let client = LucrumClient::new(mock_server.uri()).unwrap();

    let err = client.login("a@b.c".into(), "wrong".into()).await.unwrap_err();
    assert!(matches!(err, ClientError::AuthenticationFailed(_)));
    assert_eq!(err.user_message("Login failed"), "invalid credentials");
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn test_error_message_field_when_no_error_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "email already taken"
        })))
        .mount(&mock_server)
        .await;

    let client = LucrumClient::new(mock_server.uri()).unwrap();

    let err = client.register("a@b.c".into(), "pw".into()).await.unwrap_err();
    assert_eq!(err.user_message("Registration failed"), "email already taken");
}

#[tokio::test]
async fn test_unstructured_error_uses_status_line() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = LucrumClient::new(mock_server.uri()).unwrap();

    let err = client.login("a@b.c".into(), "pw".into()).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
    assert_eq!(err.user_message("Something went wrong"), "404 Not Found");
}

#[tokio::test]
async fn test_server_error_passthrough() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let client = LucrumClient::new(mock_server.uri()).unwrap();

    let err = client.login("a@b.c".into(), "pw".into()).await.unwrap_err();
    assert!(matches!(err, ClientError::ServerError { status: 500, .. }));
    assert_eq!(err.status_code(), Some(500));
}
