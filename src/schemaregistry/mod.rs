//! # Schema Registry
//!
//! AVRO schemas, their versions and compatibility rules. The registry has no
//! global endpoint, so a service URL is always required.
//!
//! ```rust,no_run
//! use eventstreams_admin::schemaregistry::{
//!     RuleConfig, RuleType, SchemaregistryV1, UpdateGlobalRuleParams,
//! };
//!
//! # async fn run() -> eventstreams_admin::Result<()> {
//! let registry = SchemaregistryV1::builder()
//!     .service_url("https://registry.example.com/confluent")
//!     .build()?;
//!
//! registry
//!     .update_global_rule(UpdateGlobalRuleParams {
//!         rule: Some(RuleType::Compatibility),
//!         rule_type: Some(RuleType::Compatibility),
//!         config: Some(RuleConfig::Backward),
//!         ..Default::default()
//!     })
//!     .await?;
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

pub type SchemaregistryV1Builder = ServiceBuilder<SchemaregistryV1>;

/// Schema registry client.
#[derive(Debug, Clone)]
pub struct SchemaregistryV1 {
    dispatcher: Dispatcher,
}

impl Service for SchemaregistryV1 {
    const DEFAULT_SERVICE_NAME: &'static str = "schemaregistry";
    const DEFAULT_SERVICE_URL: Option<&'static str> = None;

    fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

impl SchemaregistryV1 {
    pub fn builder() -> SchemaregistryV1Builder {
        ServiceBuilder::new()
    }

    pub fn with_executor(executor: Arc<dyn RequestExecutor>) -> Self {
        Self::from_dispatcher(Dispatcher::new(Self::DEFAULT_SERVICE_NAME, executor))
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn operations() -> &'static [&'static OperationDescriptor] {
        operations::OPERATIONS
    }

    pub async fn invoke_operation(
        &self,
        operation_id: &str,
        params: Option<CallParameters>,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_by_id(operations::OPERATIONS, operation_id, params)
            .await
    }

    /// Decodes into [`Rule`].
    pub async fn get_global_rule(&self, params: GetGlobalRuleParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_GLOBAL_RULE, &params)
            .await
    }

    pub async fn update_global_rule(
        &self,
        params: UpdateGlobalRuleParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::UPDATE_GLOBAL_RULE, &params)
            .await
    }

    /// Add a rule to one schema, overriding the global rule of that type.
    pub async fn create_schema_rule(
        &self,
        params: CreateSchemaRuleParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::CREATE_SCHEMA_RULE, &params)
            .await
    }

    pub async fn get_schema_rule(&self, params: GetSchemaRuleParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_SCHEMA_RULE, &params)
            .await
    }

    pub async fn update_schema_rule(
        &self,
        params: UpdateSchemaRuleParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::UPDATE_SCHEMA_RULE, &params)
            .await
    }

    pub async fn delete_schema_rule(
        &self,
        params: DeleteSchemaRuleParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::DELETE_SCHEMA_RULE, &params)
            .await
    }

    /// Enable or disable every version of a schema.
    pub async fn set_schema_state(&self, params: SetSchemaStateParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::SET_SCHEMA_STATE, &params)
            .await
    }

    pub async fn set_schema_version_state(
        &self,
        params: SetSchemaVersionStateParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::SET_SCHEMA_VERSION_STATE, &params)
            .await
    }

    pub async fn list_versions(&self, params: ListVersionsParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::LIST_VERSIONS, &params)
            .await
    }

    /// Decodes into [`SchemaMetadata`].
    pub async fn create_version(&self, params: CreateVersionParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::CREATE_VERSION, &params)
            .await
    }

    pub async fn get_version(&self, params: GetVersionParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_VERSION, &params)
            .await
    }

    pub async fn delete_version(&self, params: DeleteVersionParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::DELETE_VERSION, &params)
            .await
    }

    pub async fn list_schemas(&self, params: ListSchemasParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::LIST_SCHEMAS, &params)
            .await
    }

    /// Decodes into [`SchemaMetadata`].
    pub async fn create_schema(&self, params: CreateSchemaParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::CREATE_SCHEMA, &params)
            .await
    }

    pub async fn get_latest_schema(
        &self,
        params: GetLatestSchemaParams,
    ) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::GET_LATEST_SCHEMA, &params)
            .await
    }

    pub async fn delete_schema(&self, params: DeleteSchemaParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::DELETE_SCHEMA, &params)
            .await
    }

    pub async fn update_schema(&self, params: UpdateSchemaParams) -> Result<ResponseEnvelope> {
        self.dispatcher
            .invoke_typed(&operations::UPDATE_SCHEMA, &params)
            .await
    }
}
