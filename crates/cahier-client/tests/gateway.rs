//! Request construction and response mapping against a mock backend.

mod common;

use std::sync::Arc;
use std::time::Duration;

use cahier_client::{ApiClient, ApiError, ApiErrorKind, MemorySessionStore, RequestOptions};
use cahier_config::ApiConfig;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn sends_json_headers_and_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .and(header("Authorization", "Bearer tok-42"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = common::signed_in(&server, "tok-42");
    let value = client.gateway().request("/user", RequestOptions::get()).await.unwrap();
    assert_eq!(value, json!({"id": 1}));
}

#[tokio::test]
async fn omits_authorization_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/filieres"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let (client, _) = common::anonymous(&server);
    client.filieres().list(1).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn sends_body_and_custom_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/echo"))
        .and(header("X-Request-Id", "abc"))
        .and(body_json(json!({"hello": "world"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = common::anonymous(&server);
    let options = RequestOptions::post()
        .json(&json!({"hello": "world"}))
        .unwrap()
        .header("X-Request-Id", "abc");
    let value = client.gateway().request("/echo", options).await.unwrap();
    assert_eq!(value["ok"], Value::Bool(true));
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/groupes/3"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let (client, _) = common::signed_in(&server, "t");
    let value = client
        .gateway()
        .request("/admin/groupes/3", RequestOptions::delete())
        .await
        .unwrap();
    assert_eq!(value, Value::Null);

    let ack = client.groupes().delete(3).await.unwrap();
    assert!(ack.message.is_none());
}

#[tokio::test]
async fn error_status_carries_server_message_and_field_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/filieres"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The code has already been taken.",
            "errors": {"code": ["The code has already been taken."]}
        })))
        .mount(&server)
        .await;

    let (client, _) = common::signed_in(&server, "t");
    let draft = cahier_core::drafts::FiliereDraft {
        name: "Génie Info".into(),
        code: Some("GI".into()),
        description: None,
    };
    let err = client.filieres().create(&draft).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(err.to_string(), "The code has already been taken.");
    let ApiError::Api { errors, .. } = err else {
        panic!("expected an Api error");
    };
    assert!(errors.unwrap().contains_key("code"));
}

#[tokio::test]
async fn error_fallback_messages() {
    let server = MockServer::start().await;
    Mock::given(path("/api/html"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>oops</h1>"))
        .mount(&server)
        .await;
    Mock::given(path("/api/nomessage"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "no"})))
        .mount(&server)
        .await;

    let (client, _) = common::anonymous(&server);
    let err = client.gateway().request("/html", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err.message(), "An error occurred");
    assert_eq!(err.kind(), ApiErrorKind::Server);

    let err = client
        .gateway()
        .request("/nomessage", RequestOptions::get())
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Request failed");
    assert_eq!(err.kind(), ApiErrorKind::Forbidden);
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(path("/api/admin/modules"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (client, _) = common::anonymous(&server);
    let err = client.modules().list(1).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Decode);
}

#[tokio::test]
async fn wrong_shape_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(path("/api/admin/modules/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "x"}})))
        .mount(&server)
        .await;

    let (client, _) = common::anonymous(&server);
    let err = client.modules().show(1).await.unwrap_err();
    let ApiError::Decode { endpoint, .. } = err else {
        panic!("expected a decode error, got {err:?}");
    };
    assert_eq!(endpoint, "/admin/modules/1");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let config = ApiConfig {
        base_url: uri,
        ..ApiConfig::default()
    };
    let client = ApiClient::new(&config, Arc::new(MemorySessionStore::new())).unwrap();

    let err = client.filieres().list(1).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Transport);
}

#[tokio::test]
async fn configured_timeout_applies() {
    let server = MockServer::start().await;
    Mock::given(path("/api/admin/groupes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout_secs: Some(1),
        ..ApiConfig::default()
    };
    let client = ApiClient::new(&config, Arc::new(MemorySessionStore::new())).unwrap();
    let err = client.groupes().list(1).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Transport);
}
