use std::time::Duration;

use catview_engine::{ClientSettings, Endpoint, FailureKind, RemoteClient, ReqwestClient};
use pretty_assertions::assert_eq;
use url::Url;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings::with_api_base(Url::parse(&server.uri()).unwrap())
}

#[tokio::test]
async fn tag_list_gets_sentinel_prepended() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(["cute", "funny", "orange"]))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestClient::new(settings_for(&server));
    let tags = client.fetch_tag_list().await.expect("tags ok");

    assert_eq!(tags, vec!["Any", "cute", "funny", "orange"]);
}

#[tokio::test]
async fn tag_list_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ReqwestClient::new(settings_for(&server));
    let err = client.fetch_tag_list().await.unwrap_err();

    assert_eq!(err.endpoint, Endpoint::Tags);
    assert_eq!(err.cause, FailureKind::HttpStatus(503));
    assert!(err.to_string().starts_with("tags request failed"));
}

#[tokio::test]
async fn tag_list_rejects_non_string_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"tags": []})))
        .mount(&server)
        .await;

    let client = ReqwestClient::new(settings_for(&server));
    let err = client.fetch_tag_list().await.unwrap_err();

    assert_eq!(err.endpoint, Endpoint::Tags);
    assert_eq!(err.cause, FailureKind::Decode);
}

#[tokio::test]
async fn tag_list_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(["late"]),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        tags_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let client = ReqwestClient::new(settings);
    let err = client.fetch_tag_list().await.unwrap_err();

    assert_eq!(err.endpoint, Endpoint::Tags);
    assert_eq!(err.cause, FailureKind::Timeout);
}

#[tokio::test]
async fn image_bytes_are_returned_unchanged() {
    let server = MockServer::start().await;
    let body: Vec<u8> = vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3];
    Mock::given(method("GET"))
        .and(path("/cat/cute/says/hi%20there"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.clone(), "image/png"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestClient::new(settings_for(&server));
    let url = format!("{}/cat/cute/says/hi%20there?fontSize=30&fontColor=red", server.uri());
    let bytes = client.fetch_image_bytes(&url).await.expect("image ok");

    assert_eq!(bytes, body);
}

#[tokio::test]
async fn image_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cat/nonexistent"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ReqwestClient::new(settings_for(&server));
    let url = format!("{}/cat/nonexistent", server.uri());
    let err = client.fetch_image_bytes(&url).await.unwrap_err();

    assert_eq!(err.endpoint, Endpoint::Image);
    assert_eq!(err.cause, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn image_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(vec![1u8, 2, 3], "image/jpeg"),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        image_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let client = ReqwestClient::new(settings);
    let err = client
        .fetch_image_bytes(&format!("{}/cat", server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.endpoint, Endpoint::Image);
    assert_eq!(err.cause, FailureKind::Timeout);
}

#[tokio::test]
async fn image_rejects_oversized_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cat"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![7u8; 64], "image/gif"))
        .mount(&server)
        .await;

    let settings = ClientSettings {
        max_image_bytes: 32,
        ..settings_for(&server)
    };
    let client = ReqwestClient::new(settings);
    let err = client
        .fetch_image_bytes(&format!("{}/cat", server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.cause, FailureKind::TooLarge { max_bytes: 32 });
}

#[tokio::test]
async fn image_rejects_malformed_url() {
    let client = ReqwestClient::new(ClientSettings::for_default_service().unwrap());
    let err = client.fetch_image_bytes("not a url").await.unwrap_err();

    assert_eq!(err.endpoint, Endpoint::Image);
    assert_eq!(err.cause, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn tag_list_rejects_oversized_body() {
    let server = MockServer::start().await;
    let huge: Vec<String> = (0..200).map(|i| format!("tag-{i}")).collect();
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(huge))
        .mount(&server)
        .await;

    let settings = ClientSettings {
        max_tags_bytes: 64,
        ..settings_for(&server)
    };
    let client = ReqwestClient::new(settings);
    let err = client.fetch_tag_list().await.unwrap_err();

    assert_eq!(err.endpoint, Endpoint::Tags);
    assert_eq!(err.cause, FailureKind::TooLarge { max_bytes: 64 });
}

#[tokio::test]
async fn image_with_dot_only_segment_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![1u8], "image/png"))
        .expect(0)
        .mount(&server)
        .await;

    let client = ReqwestClient::new(settings_for(&server));
    let url = format!("{}/cat/says/%2E%2E?fontSize=30&fontColor=red", server.uri());
    let err = client.fetch_image_bytes(&url).await.unwrap_err();

    assert_eq!(err.endpoint, Endpoint::Image);
    assert_eq!(err.cause, FailureKind::InvalidUrl);
}
