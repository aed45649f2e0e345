//! End-to-end requests through the reqwest executor.

use crate::integration::mock_server::MockServerFixture;
use eventstreams_admin::adminrest::*;
use eventstreams_admin::auth::Authenticator;
use eventstreams_admin::schemaregistry::{SetSchemaVersionStateParams, SchemaState};
use eventstreams_admin::Error;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_json_response_is_decoded() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_response(
            "GET",
            "/admin/topics/orders",
            200,
            r#"{"name":"orders","partitions":3,"replicationFactor":3}"#,
        )
        .await;

    let admin = fixture.admin_client(Authenticator::NoAuth);
    let response = admin
        .get_topic(GetTopicParams {
            topic_name: Some("orders".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.status_text, "OK");
    assert_eq!(
        response.headers.get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let topic: TopicDetail = response.json().unwrap();
    assert_eq!(topic.partitions, Some(3));
}

#[tokio::test]
async fn test_not_found_maps_to_remote_error() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_error_response(
            "DELETE",
            "/admin/topics/missing",
            404,
            r#"{"error_code":404,"message":"topic not found"}"#,
            1,
        )
        .await;

    let admin = fixture.admin_client(Authenticator::NoAuth);
    let err = admin
        .delete_topic(DeleteTopicParams {
            topic_name: Some("missing".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    mock.assert_async().await;
    match err {
        Error::Remote {
            status,
            retryable,
            ref message,
            ..
        } => {
            assert_eq!(status, 404);
            assert!(!retryable);
            assert!(message.contains("topic not found"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_empty_body_gives_no_result() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_matching(
            "PUT",
            "/artifacts/s1/versions/2/state",
            Matcher::Any,
            Matcher::Json(json!({"state": "DISABLED"})),
            204,
        )
        .await;

    let registry = fixture.registry_client();
    let response = registry
        .set_schema_version_state(SetSchemaVersionStateParams {
            id: Some("s1".into()),
            version: Some(2),
            state: Some(SchemaState::Disabled),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.status, 204);
    assert!(response.result.is_none());
    assert!(response.json::<serde_json::Value>().is_err());
}

#[tokio::test]
async fn test_query_and_body_reach_the_wire() {
    let fixture = MockServerFixture::new().await;
    let list = fixture
        .mock_matching(
            "GET",
            "/admin/topics",
            Matcher::AllOf(vec![
                Matcher::UrlEncoded("topic_filter".into(), "orders*".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
            ]),
            Matcher::Any,
            200,
        )
        .await;
    let create = fixture
        .mock_matching(
            "POST",
            "/admin/topics",
            Matcher::Any,
            Matcher::Json(json!({"name": "t1", "partitions": 3})),
            202,
        )
        .await;

    let admin = fixture.admin_client(Authenticator::NoAuth);
    admin
        .list_topics(ListTopicsParams {
            topic_filter: Some("orders*".into()),
            page: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    let created = admin
        .create_topic(CreateTopicParams {
            name: Some("t1".into()),
            partitions: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();

    list.assert_async().await;
    create.assert_async().await;
    assert_eq!(created.status, 202);
}

#[tokio::test]
async fn test_api_key_is_sent_as_basic_auth() {
    let fixture = MockServerFixture::new().await;
    // base64("token:key")
    let mock = fixture
        .mock_authorized("GET", "/admin/status", "Basic dG9rZW46a2V5")
        .await;

    let admin = fixture.admin_client(Authenticator::api_key("key"));
    admin.get_status(GetStatusParams::default()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_authorized("GET", "/admin/cluster", "Bearer abc.def")
        .await;

    let admin = fixture.admin_client(Authenticator::bearer("abc.def"));
    admin.get_cluster(GetClusterParams::default()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_errors_are_retried_when_enabled() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_error_response("GET", "/admin/brokers", 503, r#"{"message":"busy"}"#, 3)
        .await;

    let admin = fixture.retrying_admin_client(2);
    let err = admin
        .list_brokers(ListBrokersParams::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_server_errors_are_not_retried_by_default() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_error_response("GET", "/admin/brokers", 500, r#"{"message":"boom"}"#, 1)
        .await;

    let admin = fixture.admin_client(Authenticator::NoAuth);
    let err = admin
        .list_brokers(ListBrokersParams::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, Error::Remote { retryable: true, .. }));
}

#[tokio::test]
async fn test_client_errors_are_never_retried() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_error_response("GET", "/admin/quotas/unknown", 404, "{}", 1)
        .await;

    let admin = fixture.retrying_admin_client(3);
    let err = admin
        .get_quota(GetQuotaParams {
            entity_name: Some("unknown".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    // Nothing listens on the discard port.
    let admin = AdminrestV1::builder()
        .service_url("http://127.0.0.1:9")
        .build()
        .unwrap();
    let err = admin.get_status(GetStatusParams::default()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
