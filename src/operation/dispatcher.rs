//! Validate, build, dispatch.

use std::sync::Arc;

use tracing::debug;

use super::builder::build_request;
use super::descriptor::OperationDescriptor;
use super::params::{CallParameters, OperationParams};
use super::request::{RequestDescriptor, ResponseEnvelope};
use super::validator::validate;
use crate::transport::RequestExecutor;
use crate::{Error, ErrorContext, Result};

/// Runs operations of one service against a [`RequestExecutor`].
///
/// Cheap to clone; holds no per-call state.
#[derive(Clone)]
pub struct Dispatcher {
    service_name: String,
    executor: Arc<dyn RequestExecutor>,
}

impl Dispatcher {
    pub fn new(service_name: impl Into<String>, executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            service_name: service_name.into(),
            executor,
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn executor(&self) -> &Arc<dyn RequestExecutor> {
        &self.executor
    }

    /// Validate and build without dispatching.
    pub fn prepare(
        &self,
        descriptor: &OperationDescriptor,
        params: Option<&CallParameters>,
    ) -> Result<RequestDescriptor> {
        if let Err(err) = validate(
            params,
            descriptor.required_params(),
            descriptor.accepted_params(),
        )
        .into_result()
        {
            debug!(
                service = self.service_name.as_str(),
                operation = descriptor.operation_id,
                error = %err,
                "rejected call before dispatch"
            );
            return Err(err);
        }

        let empty = CallParameters::new();
        build_request(descriptor, params.unwrap_or(&empty), &self.service_name)
    }

    /// Run one call. Invalid calls never reach the executor; executor
    /// results are returned unchanged.
    pub async fn invoke(
        &self,
        descriptor: &OperationDescriptor,
        params: Option<CallParameters>,
    ) -> Result<ResponseEnvelope> {
        let request = self.prepare(descriptor, params.as_ref())?;
        debug!(
            service = self.service_name.as_str(),
            operation = descriptor.operation_id,
            method = %request.method,
            path = request.path.as_str(),
            "dispatching request"
        );
        self.executor.execute(request).await
    }

    pub async fn invoke_typed<P: OperationParams>(
        &self,
        descriptor: &OperationDescriptor,
        params: &P,
    ) -> Result<ResponseEnvelope> {
        let params = params.to_call_parameters()?;
        self.invoke(descriptor, Some(params)).await
    }

    /// Look `operation_id` up in `table` and run it.
    pub async fn invoke_by_id(
        &self,
        table: &[&OperationDescriptor],
        operation_id: &str,
        params: Option<CallParameters>,
    ) -> Result<ResponseEnvelope> {
        let descriptor = table
            .iter()
            .find(|op| op.operation_id == operation_id)
            .ok_or_else(|| {
                Error::validation_with_context(
                    format!("Unknown operation: {}", operation_id),
                    ErrorContext::new()
                        .with_operation(operation_id)
                        .with_source(self.service_name.clone()),
                )
            })?;
        self.invoke(descriptor, params).await
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("service_name", &self.service_name)
            .finish_non_exhaustive()
    }
}
