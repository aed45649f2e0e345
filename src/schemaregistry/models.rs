//! Schema registry models and wire constants.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::wire::wire_enum;

wire_enum! {
    /// Kind of rule. Also names the rule in `/rules/{rule}` paths.
    pub enum RuleType {
        Compatibility => "COMPATIBILITY",
    }
}

wire_enum! {
    /// Compatibility level enforced by a `COMPATIBILITY` rule.
    pub enum RuleConfig {
        Backward => "BACKWARD",
        BackwardTransitive => "BACKWARD_TRANSITIVE",
        Forward => "FORWARD",
        ForwardTransitive => "FORWARD_TRANSITIVE",
        Full => "FULL",
        FullTransitive => "FULL_TRANSITIVE",
        None => "NONE",
    }
}

wire_enum! {
    /// Whether a schema or schema version can be used.
    pub enum SchemaState {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

/// Constraint on which new schema versions the registry accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    pub config: RuleConfig,
}

impl Rule {
    pub fn compatibility(config: RuleConfig) -> Self {
        Self {
            rule_type: RuleType::Compatibility,
            config,
        }
    }
}

/// Metadata of one schema version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaMetadata {
    /// Creation time, UNIX epoch milliseconds.
    pub created_on: i64,
    /// Globally unique id of the schema's first version.
    pub global_id: i64,
    /// `X-Registry-ArtifactId` of the create call, or a generated UUID.
    pub id: String,
    pub modified_on: i64,
    /// Always `AVRO`.
    #[serde(rename = "type")]
    pub schema_type: String,
    pub version: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvroSchema {
    pub schema: Option<Value>,
}
