//! `ApodClient` against a stubbed upstream.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use apodgate_core::{ApiKey, ApodGateError};
use apodgate_gateway::upstream::{ApodClient, ApodSource};

const KEY: &str = "test-key-123";

fn client(base: &str, timeout: Option<Duration>) -> ApodClient {
    ApodClient::new(base, ApiKey::new(KEY).unwrap(), timeout).unwrap()
}

#[tokio::test]
async fn relays_body_and_content_type_verbatim() {
    let server = MockServer::start().await;
    let body = r#"{"title":"x",  "url":"https://apod.example/img.jpg"}"#;
    Mock::given(method("GET"))
        .and(path("/planetary/apod"))
        .and(query_param("api_key", KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(body, "application/json; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let c = client(&format!("{}/planetary/apod", server.uri()), None);
    let payload = c.fetch().await.unwrap();

    assert_eq!(&payload.body[..], body.as_bytes());
    assert_eq!(payload.content_type, "application/json; charset=utf-8");
}

#[tokio::test]
async fn missing_content_type_defaults_to_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(r#"{"title":"x"}"#))
        .mount(&server)
        .await;

    let payload = client(&server.uri(), None).fetch().await.unwrap();
    assert_eq!(payload.content_type, "application/json");
}

#[tokio::test]
async fn non_2xx_is_an_upstream_status_error_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server.uri(), None).fetch().await.expect_err("must fail");
    assert!(matches!(err, ApodGateError::UpstreamStatus(503)));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
        .mount(&server)
        .await;

    let err = client(&server.uri(), None).fetch().await.expect_err("must fail");
    assert!(matches!(err, ApodGateError::MalformedUpstream(_)));
}

#[tokio::test]
async fn connection_refused_is_an_upstream_error_without_the_key() {
    // Port 1 is never bound in the test environment.
    let err = client("http://127.0.0.1:1/planetary/apod", None)
        .fetch()
        .await
        .expect_err("must fail");
    assert!(matches!(err, ApodGateError::Upstream(_)));
    assert!(!err.to_string().contains(KEY));
}

#[tokio::test]
async fn configured_timeout_is_enforced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"title":"late"}"#, "application/json")
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&server)
        .await;

    let err = client(&server.uri(), Some(Duration::from_millis(100)))
        .fetch()
        .await
        .expect_err("must time out");
    match err {
        ApodGateError::Upstream(msg) => assert!(msg.starts_with("timeout"), "got {msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn debug_output_redacts_key() {
    let c = client("https://api.nasa.gov/planetary/apod", None);
    let dbg = format!("{c:?}");
    assert!(dbg.contains("api.nasa.gov"));
    assert!(!dbg.contains(KEY));
}
