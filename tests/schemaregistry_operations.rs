//! Schema registry operations against a recording executor.

mod support;

use eventstreams_admin::operation::HttpMethod;
use eventstreams_admin::schemaregistry::*;
use eventstreams_admin::{CallParameters, Error};
use serde_json::json;
use support::RecordingExecutor;

fn sample_schema() -> serde_json::Value {
    json!({
        "type": "record",
        "name": "Order",
        "fields": [{"name": "id", "type": "string"}]
    })
}

#[tokio::test]
async fn set_schema_version_state_puts_state() {
    let executor = RecordingExecutor::new();
    let registry = SchemaregistryV1::with_executor(executor.clone());

    registry
        .set_schema_version_state(SetSchemaVersionStateParams {
            id: Some("s1".into()),
            version: Some(2),
            state: Some(SchemaState::Disabled),
            ..Default::default()
        })
        .await
        .unwrap();

    let request = executor.last();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.path, "/artifacts/s1/versions/2/state");
    assert_eq!(request.body, Some(json!({"state": "DISABLED"})));
    assert!(request.header("accept").is_none());
    assert_eq!(request.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn set_schema_state_requires_state() {
    let executor = RecordingExecutor::new();
    let registry = SchemaregistryV1::with_executor(executor.clone());

    let err = registry
        .set_schema_state(SetSchemaStateParams {
            id: Some("s1".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Missing required parameters: state"));
    assert_eq!(executor.count(), 0);
}

#[tokio::test]
async fn update_global_rule_reports_every_missing_name() {
    let executor = RecordingExecutor::new();
    let registry = SchemaregistryV1::with_executor(executor.clone());

    let err = registry
        .update_global_rule(UpdateGlobalRuleParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert!(err
        .to_string()
        .contains("Missing required parameters: rule, type, config"));
    assert_eq!(executor.count(), 0);
}

#[tokio::test]
async fn update_global_rule_sends_rule_body() {
    let executor = RecordingExecutor::new();
    let registry = SchemaregistryV1::with_executor(executor.clone());

    registry
        .update_global_rule(UpdateGlobalRuleParams {
            rule: Some(RuleType::Compatibility),
            rule_type: Some(RuleType::Compatibility),
            config: Some(RuleConfig::BackwardTransitive),
            ..Default::default()
        })
        .await
        .unwrap();

    let request = executor.last();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.path, "/rules/COMPATIBILITY");
    assert_eq!(
        request.body,
        Some(json!({"type": "COMPATIBILITY", "config": "BACKWARD_TRANSITIVE"}))
    );
}

#[tokio::test]
async fn schema_rule_paths_carry_both_ids() {
    let executor = RecordingExecutor::new();
    let registry = SchemaregistryV1::with_executor(executor.clone());

    registry
        .create_schema_rule(CreateSchemaRuleParams {
            id: Some("orders-value".into()),
            rule_type: Some(RuleType::Compatibility),
            config: Some(RuleConfig::Full),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(executor.last().method, HttpMethod::Post);
    assert_eq!(executor.last().path, "/artifacts/orders-value/rules");

    registry
        .delete_schema_rule(DeleteSchemaRuleParams {
            id: Some("orders-value".into()),
            rule: Some(RuleType::Compatibility),
            ..Default::default()
        })
        .await
        .unwrap();
    let request = executor.last();
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.path, "/artifacts/orders-value/rules/COMPATIBILITY");
    assert!(request.header("accept").is_none());
    assert!(request.body.is_none());
}

#[tokio::test]
async fn unknown_rule_config_passes_through() {
    let executor = RecordingExecutor::new();
    let registry = SchemaregistryV1::with_executor(executor.clone());

    registry
        .update_schema_rule(UpdateSchemaRuleParams {
            id: Some("s1".into()),
            rule: Some(RuleType::Compatibility),
            rule_type: Some(RuleType::Compatibility),
            config: Some(RuleConfig::from("FULL_LENIENT")),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        executor.last().body_field("config"),
        Some(&json!("FULL_LENIENT"))
    );
}

#[tokio::test]
async fn create_schema_sends_artifact_id_header() {
    let executor = RecordingExecutor::new();
    let registry = SchemaregistryV1::with_executor(executor.clone());

    registry
        .create_schema(CreateSchemaParams {
            schema: Some(sample_schema()),
            x_registry_artifact_id: Some("orders-value".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let request = executor.last();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.path, "/artifacts");
    assert_eq!(request.header("x-registry-artifactid"), Some("orders-value"));
    assert_eq!(request.body, Some(json!({"schema": sample_schema()})));
}

#[tokio::test]
async fn list_versions_passes_jsonformat() {
    let executor = RecordingExecutor::new();
    let registry = SchemaregistryV1::with_executor(executor.clone());

    registry
        .list_versions(ListVersionsParams {
            id: Some("s1".into()),
            jsonformat: Some("object".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let request = executor.last();
    assert_eq!(request.path, "/artifacts/s1/versions");
    assert_eq!(request.query.get("jsonformat").map(String::as_str), Some("object"));
}

#[tokio::test]
async fn version_operations_resolve_numeric_version() {
    let executor = RecordingExecutor::new();
    let registry = SchemaregistryV1::with_executor(executor.clone());

    registry
        .get_version(GetVersionParams {
            id: Some("s1".into()),
            version: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(executor.last().path, "/artifacts/s1/versions/3");

    registry
        .delete_version(DeleteVersionParams {
            id: Some("s1".into()),
            version: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(executor.last().method, HttpMethod::Delete);
}

#[tokio::test]
async fn create_version_decodes_metadata() {
    let executor = RecordingExecutor::replying(json!({
        "createdOn": 1_700_000_000_000i64,
        "globalId": 11,
        "id": "s1",
        "modifiedOn": 1_700_000_000_000i64,
        "type": "AVRO",
        "version": 4
    }));
    let registry = SchemaregistryV1::with_executor(executor.clone());

    let meta: SchemaMetadata = registry
        .create_version(CreateVersionParams {
            id: Some("s1".into()),
            schema: Some(sample_schema()),
            ..Default::default()
        })
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(meta.version, 4);
    assert_eq!(executor.last().path, "/artifacts/s1/versions");
}

#[tokio::test]
async fn invoke_operation_with_header_key() {
    let executor = RecordingExecutor::new();
    let registry = SchemaregistryV1::with_executor(executor.clone());

    registry
        .invoke_operation(
            "getLatestSchema",
            Some(
                CallParameters::new()
                    .with("id", "s1")
                    .with("headers", json!({"Accept": "application/vnd.apache.avro+json"})),
            ),
        )
        .await
        .unwrap();

    let request = executor.last();
    assert_eq!(request.path, "/artifacts/s1");
    assert_eq!(request.header("accept"), Some("application/vnd.apache.avro+json"));
}

#[test]
fn builder_requires_service_url() {
    let err = SchemaregistryV1::builder().build().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Service URL is required"));
}
