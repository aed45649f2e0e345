//! Typed parameters for the Admin REST operations.
//!
//! Field names serialize to the camelCase parameter names of the operation
//! table; the wire renaming happens in the request builder.

use std::collections::BTreeMap;

use serde::Serialize;

use super::models::{ConfigCreate, ConfigUpdate, RecordDeleteRequest, ResetMode};
use crate::wire::operation_params;

type Headers = Option<BTreeMap<String, String>>;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitions: Option<i64>,
    /// Takes precedence over `partitions`; the service defaults to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<ConfigCreate>>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTopicsParams {
    /// `*` wildcards, or a regular expression between `/` delimiters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTopicParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTopicParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopicParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_total_partition_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<ConfigUpdate>>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTopicRecordsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_to_delete: Option<Vec<RecordDeleteRequest>>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuotaParams {
    /// Principal the quota applies to, or `default`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer_byte_rate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_byte_rate: Option<i64>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuotasParams {
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetQuotaParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuotaParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer_byte_rate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_byte_rate: Option<i64>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteQuotaParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBrokersParams {
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBrokerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_id: Option<i64>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBrokerConfigParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetClusterParams {
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConsumerGroupsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetConsumerGroupParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConsumerGroupParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConsumerGroupParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Topic whose offsets are reset; all topics of the group when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ResetMode>,
    /// Timestamp or offset, depending on `mode`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// `false` for a dry run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute: Option<bool>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMirroringTopicSelectionParams {
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceMirroringTopicSelectionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMirroringActiveTopicsParams {
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStatusParams {
    #[serde(skip)]
    pub headers: Headers,
}

operation_params!(
    CreateTopicParams,
    ListTopicsParams,
    GetTopicParams,
    DeleteTopicParams,
    UpdateTopicParams,
    DeleteTopicRecordsParams,
    CreateQuotaParams,
    ListQuotasParams,
    GetQuotaParams,
    UpdateQuotaParams,
    DeleteQuotaParams,
    ListBrokersParams,
    GetBrokerParams,
    GetBrokerConfigParams,
    GetClusterParams,
    ListConsumerGroupsParams,
    GetConsumerGroupParams,
    DeleteConsumerGroupParams,
    UpdateConsumerGroupParams,
    GetMirroringTopicSelectionParams,
    ReplaceMirroringTopicSelectionParams,
    GetMirroringActiveTopicsParams,
    GetStatusParams,
);
