//! Typed parameters for the schema registry operations.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::models::{RuleConfig, RuleType, SchemaState};
use crate::wire::operation_params;

type Headers = Option<BTreeMap<String, String>>;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGlobalRuleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleType>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGlobalRuleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleType>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<RuleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RuleConfig>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchemaRuleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<RuleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RuleConfig>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSchemaRuleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleType>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSchemaRuleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleType>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<RuleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RuleConfig>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSchemaRuleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleType>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSchemaStateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SchemaState>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSchemaVersionStateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SchemaState>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVersionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `number` (the default) or `object`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsonformat: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVersionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The AVRO schema document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVersionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteVersionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSchemasParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsonformat: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchemaParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    /// Sent as `X-Registry-ArtifactId`; the registry generates an id when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_registry_artifact_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLatestSchemaParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSchemaParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSchemaParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    #[serde(skip)]
    pub headers: Headers,
}

operation_params!(
    GetGlobalRuleParams,
    UpdateGlobalRuleParams,
    CreateSchemaRuleParams,
    GetSchemaRuleParams,
    UpdateSchemaRuleParams,
    DeleteSchemaRuleParams,
    SetSchemaStateParams,
    SetSchemaVersionStateParams,
    ListVersionsParams,
    CreateVersionParams,
    GetVersionParams,
    DeleteVersionParams,
    ListSchemasParams,
    CreateSchemaParams,
    GetLatestSchemaParams,
    DeleteSchemaParams,
    UpdateSchemaParams,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OperationParams;
    use serde_json::json;

    #[test]
    fn rule_type_serializes_under_type() {
        let params = UpdateGlobalRuleParams {
            rule: Some(RuleType::Compatibility),
            rule_type: Some(RuleType::Compatibility),
            config: Some(RuleConfig::Backward),
            ..Default::default()
        }
        .to_call_parameters()
        .unwrap();
        assert_eq!(params.get("type"), Some(&json!("COMPATIBILITY")));
        assert_eq!(params.get("config"), Some(&json!("BACKWARD")));
        assert!(!params.contains("ruleType"));
    }

    #[test]
    fn artifact_id_uses_camel_case_name() {
        let params = CreateSchemaParams {
            x_registry_artifact_id: Some("orders-value".into()),
            ..Default::default()
        }
        .to_call_parameters()
        .unwrap();
        assert_eq!(params.get("xRegistryArtifactId"), Some(&json!("orders-value")));
        assert!(!params.contains("schema"));
    }
}
