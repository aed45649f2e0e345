//! # Admin REST
//!
//! Topic, quota, broker, consumer group and mirroring administration for an
//! Event Streams instance.
//!
//! ```rust,no_run
//! use eventstreams_admin::adminrest::{AdminrestV1, CreateTopicParams};
//! use eventstreams_admin::auth::Authenticator;
//!
//! # async fn run() -> eventstreams_admin::Result<()> {
//! let admin = AdminrestV1::builder()
//!     .service_url("https://kafka-admin.example.com")
//!     .authenticator(Authenticator::api_key("my-api-key"))
//!     .build()?;
//!
//! let response = admin
//!     .create_topic(CreateTopicParams {
//!         name: Some("orders".into()),
//!         partitions: Some(3),
//!         ..Default::default()
//!     })
//!     .await?;
//! assert!(response.is_success());
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod operations;
pub mod params;

use std::sync::Arc;

use crate::client::{Service, ServiceBuilder};
use crate::operation::{CallParameters, Dispatcher, OperationDescriptor, ResponseEnvelope};
use crate::transport::RequestExecutor;
use crate::Result;

pub use models::*;
pub use params::*;

pub type AdminrestV1Builder = ServiceBuilder<AdminrestV1>;

/// Admin REST client.
#[derive(Debug, Clone)]
pub struct AdminrestV1 {
    dispatcher: Dispatcher,
}

impl Service for AdminrestV1 {
    const DEFAULT_SERVICE_NAME: &'static str = "adminrest";
    const DEFAULT_SERVICE_URL: Option<&'static str> = Some("https://adminrest.cloud.ibm.com");

    fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

impl AdminrestV1 {
    pub fn builder() -> AdminrestV1Builder {
        ServiceBuilder::new()
    }

    /// Client that sends every request through `executor`.
    pub fn with_executor(executor: Arc<dyn RequestExecutor>) -> Self {
        Self::from_dispatcher(Dispatcher::new(Self::DEFAULT_SERVICE_NAME, executor))
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn operations() -> &'static [&'static OperationDescriptor] {
        operations::OPERATIONS
    }

    /// Run an operation by its id with untyped parameters.
    pub async fn invoke_operation(
        &self,
        operation_id: &str,
        params: Option<CallParameters>,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_by_id(operations::OPERATIONS, operation_id, params)
            .await
    }

    /// Create a topic.
    pub async fn create_topic(&self, params: CreateTopicParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::CREATE_TOPIC, &params)
            .await
    }

    /// List topics, optionally filtered and paged.
    pub async fn list_topics(&self, params: ListTopicsParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::LIST_TOPICS, &params)
            .await
    }

    /// Describe one topic. Decodes into [`TopicDetail`].
    pub async fn get_topic(&self, params: GetTopicParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_TOPIC, &params)
            .await
    }

    pub async fn delete_topic(&self, params: DeleteTopicParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::DELETE_TOPIC, &params)
            .await
    }

    /// Increase the partition count or change configs of a topic.
    pub async fn update_topic(&self, params: UpdateTopicParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::UPDATE_TOPIC, &params)
            .await
    }

    pub async fn delete_topic_records(
        &self,
        params: DeleteTopicRecordsParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::DELETE_TOPIC_RECORDS, &params)
            .await
    }

    pub async fn create_quota(&self, params: CreateQuotaParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::CREATE_QUOTA, &params)
            .await
    }

    /// Decodes into [`QuotaList`].
    pub async fn list_quotas(&self, params: ListQuotasParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::LIST_QUOTAS, &params)
            .await
    }

    pub async fn get_quota(&self, params: GetQuotaParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_QUOTA, &params)
            .await
    }

    pub async fn update_quota(&self, params: UpdateQuotaParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::UPDATE_QUOTA, &params)
            .await
    }

    pub async fn delete_quota(&self, params: DeleteQuotaParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::DELETE_QUOTA, &params)
            .await
    }

    pub async fn list_brokers(&self, params: ListBrokersParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::LIST_BROKERS, &params)
            .await
    }

    /// Decodes into [`BrokerDetail`].
    pub async fn get_broker(&self, params: GetBrokerParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_BROKER, &params)
            .await
    }

    pub async fn get_broker_config(
        &self,
        params: GetBrokerConfigParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_BROKER_CONFIG, &params)
            .await
    }

    /// Decodes into [`Cluster`].
    pub async fn get_cluster(&self, params: GetClusterParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_CLUSTER, &params)
            .await
    }

    pub async fn list_consumer_groups(
        &self,
        params: ListConsumerGroupsParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::LIST_CONSUMER_GROUPS, &params)
            .await
    }

    /// Decodes into [`ConsumerGroup`].
    pub async fn get_consumer_group(
        &self,
        params: GetConsumerGroupParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_CONSUMER_GROUP, &params)
            .await
    }

    pub async fn delete_consumer_group(
        &self,
        params: DeleteConsumerGroupParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::DELETE_CONSUMER_GROUP, &params)
            .await
    }

    /// Reset a consumer group's offsets. With `execute: false` the service
    /// only reports the offsets it would set.
    pub async fn update_consumer_group(
        &self,
        params: UpdateConsumerGroupParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::UPDATE_CONSUMER_GROUP, &params)
            .await
    }

    pub async fn get_mirroring_topic_selection(
        &self,
        params: GetMirroringTopicSelectionParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_MIRRORING_TOPIC_SELECTION, &params)
            .await
    }

    /// Replace the set of topic patterns selected for mirroring.
    pub async fn replace_mirroring_topic_selection(
        &self,
        params: ReplaceMirroringTopicSelectionParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::REPLACE_MIRRORING_TOPIC_SELECTION, &params)
            .await
    }

    pub async fn get_mirroring_active_topics(
        &self,
        params: GetMirroringActiveTopicsParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_MIRRORING_ACTIVE_TOPICS, &params)
            .await
    }

    /// Decodes into [`InstanceStatusResponse`].
    pub async fn get_status(&self, params: GetStatusParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_STATUS, &params)
            .await
    }
}
