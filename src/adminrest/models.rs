//! Admin REST request and response models.

use serde::{Deserialize, Serialize};

use crate::wire::wire_enum;

wire_enum! {
    /// Overall health reported by `getStatus`.
    pub enum InstanceStatus {
        Available => "available",
        Degraded => "degraded",
        Offline => "offline",
        Unknown => "unknown",
    }
}

wire_enum! {
    /// How `updateConsumerGroup` moves the group's offsets.
    pub enum ResetMode {
        Earliest => "earliest",
        Latest => "latest",
        Datetime => "datetime",
        Offset => "offset",
    }
}

/// Config property for a new topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ConfigCreate {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

/// Config property change for an existing topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Reset the property to its broker default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_to_default: Option<bool>,
}

/// Delete every record of `partition` before `before_offset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordDeleteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_offset: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplicaAssignmentBrokers {
    #[serde(default)]
    pub replicas: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplicaAssignment {
    pub id: Option<i64>,
    pub brokers: Option<ReplicaAssignmentBrokers>,
}

/// Topic-level config values as reported by `getTopic`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicConfigs {
    #[serde(rename = "cleanup.policy")]
    pub cleanup_policy: Option<String>,
    #[serde(rename = "min.insync.replicas")]
    pub min_insync_replicas: Option<String>,
    #[serde(rename = "retention.bytes")]
    pub retention_bytes: Option<String>,
    #[serde(rename = "retention.ms")]
    pub retention_ms: Option<String>,
    #[serde(rename = "segment.bytes")]
    pub segment_bytes: Option<String>,
    #[serde(rename = "segment.index.bytes")]
    pub segment_index_bytes: Option<String>,
    #[serde(rename = "segment.ms")]
    pub segment_ms: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDetail {
    pub name: Option<String>,
    pub partitions: Option<i64>,
    pub replication_factor: Option<i64>,
    pub retention_ms: Option<i64>,
    pub cleanup_policy: Option<String>,
    pub configs: Option<TopicConfigs>,
    #[serde(default)]
    pub replica_assignments: Vec<ReplicaAssignment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotaDetail {
    pub entity_name: Option<String>,
    pub producer_byte_rate: Option<i64>,
    pub consumer_byte_rate: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotaList {
    #[serde(default)]
    pub data: Vec<QuotaDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerSummary {
    pub id: Option<i64>,
    pub host: Option<String>,
    pub port: Option<i64>,
    pub rack: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerConfig {
    pub name: Option<String>,
    pub value: Option<String>,
    pub is_sensitive: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerDetail {
    pub id: Option<i64>,
    pub host: Option<String>,
    pub port: Option<i64>,
    pub rack: Option<String>,
    #[serde(default)]
    pub configs: Vec<BrokerConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: Option<String>,
    pub controller: Option<BrokerSummary>,
    #[serde(default)]
    pub brokers: Vec<BrokerSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    pub consumer_id: Option<String>,
    pub client_id: Option<String>,
    pub host: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionLag {
    pub topic: Option<String>,
    pub partition: Option<i64>,
    pub current_offset: Option<i64>,
    pub end_offset: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumerGroup {
    pub group_id: Option<String>,
    pub state: Option<String>,
    #[serde(default)]
    pub members: Vec<GroupMember>,
    #[serde(default)]
    pub lag: Vec<PartitionLag>,
}

/// One partition's offset after an `updateConsumerGroup` reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupResetResult {
    pub topic: Option<String>,
    pub partition: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MirroringTopicSelection {
    #[serde(default)]
    pub includes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MirroringActiveTopics {
    #[serde(default)]
    pub active_topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceStatusResponse {
    pub status: InstanceStatus,
}
