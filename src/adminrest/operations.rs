//! Admin REST operation table.

use crate::operation::{
    HttpMethod, OperationDescriptor, ParamBinding as P, APPLICATION_JSON as JSON,
};

pub static CREATE_TOPIC: OperationDescriptor = OperationDescriptor {
    operation_id: "createTopic",
    method: HttpMethod::Post,
    path: "/admin/topics",
    params: &[
        P::body("name", "name"),
        P::body("partitions", "partitions"),
        P::body("partitionCount", "partition_count"),
        P::body("configs", "configs"),
    ],
    accept: Some(JSON),
    content_type: Some(JSON),
};

pub static LIST_TOPICS: OperationDescriptor = OperationDescriptor {
    operation_id: "listTopics",
    method: HttpMethod::Get,
    path: "/admin/topics",
    params: &[
        P::query("topicFilter", "topic_filter"),
        P::query("perPage", "per_page"),
        P::query("page", "page"),
    ],
    accept: Some(JSON),
    content_type: None,
};

pub static GET_TOPIC: OperationDescriptor = OperationDescriptor {
    operation_id: "getTopic",
    method: HttpMethod::Get,
    path: "/admin/topics/{topic_name}",
    params: &[P::path("topicName", "topic_name")],
    accept: Some(JSON),
    content_type: None,
};

pub static DELETE_TOPIC: OperationDescriptor = OperationDescriptor {
    operation_id: "deleteTopic",
    method: HttpMethod::Delete,
    path: "/admin/topics/{topic_name}",
    params: &[P::path("topicName", "topic_name")],
    accept: Some(JSON),
    content_type: None,
};

pub static UPDATE_TOPIC: OperationDescriptor = OperationDescriptor {
    operation_id: "updateTopic",
    method: HttpMethod::Patch,
    path: "/admin/topics/{topic_name}",
    params: &[
        P::path("topicName", "topic_name"),
        P::body("newTotalPartitionCount", "new_total_partition_count"),
        P::body("configs", "configs"),
    ],
    accept: Some(JSON),
    content_type: Some(JSON),
};

pub static DELETE_TOPIC_RECORDS: OperationDescriptor = OperationDescriptor {
    operation_id: "deleteTopicRecords",
    method: HttpMethod::Delete,
    path: "/admin/topics/{topic_name}/records",
    params: &[
        P::path("topicName", "topic_name"),
        P::body("recordsToDelete", "records_to_delete"),
    ],
    accept: Some(JSON),
    content_type: Some(JSON),
};

pub static CREATE_QUOTA: OperationDescriptor = OperationDescriptor {
    operation_id: "createQuota",
    method: HttpMethod::Post,
    path: "/admin/quotas/{entity_name}",
    params: &[
        P::path("entityName", "entity_name"),
        P::body("producerByteRate", "producer_byte_rate"),
        P::body("consumerByteRate", "consumer_byte_rate"),
    ],
    accept: None,
    content_type: Some(JSON),
};

pub static LIST_QUOTAS: OperationDescriptor = OperationDescriptor {
    operation_id: "listQuotas",
    method: HttpMethod::Get,
    path: "/admin/quotas",
    params: &[],
    accept: Some(JSON),
    content_type: None,
};

pub static GET_QUOTA: OperationDescriptor = OperationDescriptor {
    operation_id: "getQuota",
    method: HttpMethod::Get,
    path: "/admin/quotas/{entity_name}",
    params: &[P::path("entityName", "entity_name")],
    accept: Some(JSON),
    content_type: None,
};

pub static UPDATE_QUOTA: OperationDescriptor = OperationDescriptor {
    operation_id: "updateQuota",
    method: HttpMethod::Patch,
    path: "/admin/quotas/{entity_name}",
    params: &[
        P::path("entityName", "entity_name"),
        P::body("producerByteRate", "producer_byte_rate"),
        P::body("consumerByteRate", "consumer_byte_rate"),
    ],
    accept: None,
    content_type: Some(JSON),
};

pub static DELETE_QUOTA: OperationDescriptor = OperationDescriptor {
    operation_id: "deleteQuota",
    method: HttpMethod::Delete,
    path: "/admin/quotas/{entity_name}",
    params: &[P::path("entityName", "entity_name")],
    accept: None,
    content_type: None,
};

pub static LIST_BROKERS: OperationDescriptor = OperationDescriptor {
    operation_id: "listBrokers",
    method: HttpMethod::Get,
    path: "/admin/brokers",
    params: &[],
    accept: Some(JSON),
    content_type: None,
};

pub static GET_BROKER: OperationDescriptor = OperationDescriptor {
    operation_id: "getBroker",
    method: HttpMethod::Get,
    path: "/admin/brokers/{broker_id}",
    params: &[P::path("brokerId", "broker_id")],
    accept: Some(JSON),
    content_type: None,
};

pub static GET_BROKER_CONFIG: OperationDescriptor = OperationDescriptor {
    operation_id: "getBrokerConfig",
    method: HttpMethod::Get,
    path: "/admin/brokers/{broker_id}/configs",
    params: &[
        P::path("brokerId", "broker_id"),
        P::query("configFilter", "config_filter"),
        P::query("verbose", "verbose"),
    ],
    accept: Some(JSON),
    content_type: None,
};

pub static GET_CLUSTER: OperationDescriptor = OperationDescriptor {
    operation_id: "getCluster",
    method: HttpMethod::Get,
    path: "/admin/cluster",
    params: &[],
    accept: Some(JSON),
    content_type: None,
};

pub static LIST_CONSUMER_GROUPS: OperationDescriptor = OperationDescriptor {
    operation_id: "listConsumerGroups",
    method: HttpMethod::Get,
    path: "/admin/consumergroups",
    params: &[
        P::query("groupFilter", "group_filter"),
        P::query("perPage", "per_page"),
        P::query("page", "page"),
    ],
    accept: Some(JSON),
    content_type: None,
};

pub static GET_CONSUMER_GROUP: OperationDescriptor = OperationDescriptor {
    operation_id: "getConsumerGroup",
    method: HttpMethod::Get,
    path: "/admin/consumergroups/{group_id}",
    params: &[P::path("groupId", "group_id")],
    accept: Some(JSON),
    content_type: None,
};

pub static DELETE_CONSUMER_GROUP: OperationDescriptor = OperationDescriptor {
    operation_id: "deleteConsumerGroup",
    method: HttpMethod::Delete,
    path: "/admin/consumergroups/{group_id}",
    params: &[P::path("groupId", "group_id")],
    accept: None,
    content_type: None,
};

pub static UPDATE_CONSUMER_GROUP: OperationDescriptor = OperationDescriptor {
    operation_id: "updateConsumerGroup",
    method: HttpMethod::Patch,
    path: "/admin/consumergroups/{group_id}",
    params: &[
        P::path("groupId", "group_id"),
        P::body("topic", "topic"),
        P::body("mode", "mode"),
        P::body("value", "value"),
        P::body("execute", "execute"),
    ],
    accept: Some(JSON),
    content_type: Some(JSON),
};

pub static GET_MIRRORING_TOPIC_SELECTION: OperationDescriptor = OperationDescriptor {
    operation_id: "getMirroringTopicSelection",
    method: HttpMethod::Get,
    path: "/admin/mirroring/topic-selection",
    params: &[],
    accept: Some(JSON),
    content_type: None,
};

pub static REPLACE_MIRRORING_TOPIC_SELECTION: OperationDescriptor = OperationDescriptor {
    operation_id: "replaceMirroringTopicSelection",
    method: HttpMethod::Post,
    path: "/admin/mirroring/topic-selection",
    params: &[P::body("includes", "includes")],
    accept: Some(JSON),
    content_type: Some(JSON),
};

pub static GET_MIRRORING_ACTIVE_TOPICS: OperationDescriptor = OperationDescriptor {
    operation_id: "getMirroringActiveTopics",
    method: HttpMethod::Get,
    path: "/admin/mirroring/active-topics",
    params: &[],
    accept: Some(JSON),
    content_type: None,
};

pub static GET_STATUS: OperationDescriptor = OperationDescriptor {
    operation_id: "getStatus",
    method: HttpMethod::Get,
    path: "/admin/status",
    params: &[],
    accept: Some(JSON),
    content_type: None,
};

/// Every Admin REST operation, in API documentation order.
pub static OPERATIONS: &[&OperationDescriptor] = &[
    &CREATE_TOPIC,
    &LIST_TOPICS,
    &GET_TOPIC,
    &DELETE_TOPIC,
    &UPDATE_TOPIC,
    &DELETE_TOPIC_RECORDS,
    &CREATE_QUOTA,
    &LIST_QUOTAS,
    &GET_QUOTA,
    &UPDATE_QUOTA,
    &DELETE_QUOTA,
    &LIST_BROKERS,
    &GET_BROKER,
    &GET_BROKER_CONFIG,
    &GET_CLUSTER,
    &LIST_CONSUMER_GROUPS,
    &GET_CONSUMER_GROUP,
    &DELETE_CONSUMER_GROUP,
    &UPDATE_CONSUMER_GROUP,
    &GET_MIRRORING_TOPIC_SELECTION,
    &REPLACE_MIRRORING_TOPIC_SELECTION,
    &GET_MIRRORING_ACTIVE_TOPICS,
    &GET_STATUS,
];
