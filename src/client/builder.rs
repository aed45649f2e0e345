use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::Authenticator;
use crate::operation::Dispatcher;
use crate::transport::{ExecutorConfig, HttpExecutor, RequestExecutor, RetryConfig};
use crate::{Error, ErrorContext, Result};

/// Implemented by the service clients so one builder can construct both.
pub trait Service: Sized {
    /// Name used in diagnostic headers and logs.
    const DEFAULT_SERVICE_NAME: &'static str;
    /// URL used when none is configured; `None` makes the URL mandatory.
    const DEFAULT_SERVICE_URL: Option<&'static str>;

    fn from_dispatcher(dispatcher: Dispatcher) -> Self;
}

/// Builder for service clients.
///
/// Keep this surface area small and predictable: a URL, credentials,
/// connection settings, or a ready-made executor.
pub struct ServiceBuilder<S> {
    service_name: Option<String>,
    service_url: Option<String>,
    authenticator: Authenticator,
    config: ExecutorConfig,
    executor: Option<Arc<dyn RequestExecutor>>,
    _service: PhantomData<fn() -> S>,
}

impl<S: Service> ServiceBuilder<S> {
    pub fn new() -> Self {
        Self {
            service_name: None,
            service_url: None,
            authenticator: Authenticator::NoAuth,
            config: ExecutorConfig::default(),
            executor: None,
            _service: PhantomData,
        }
    }

    /// Override the service name reported in diagnostic headers.
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    /// Base URL of the service (e.g. the instance's `kafka_admin_url`).
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    pub fn authenticator(mut self, authenticator: Authenticator) -> Self {
        self.authenticator = authenticator;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Retry transient failures with exponential backoff.
    pub fn enable_retries(mut self, retry: RetryConfig) -> Self {
        self.config.retry = Some(retry);
        self
    }

    pub fn disable_retries(mut self) -> Self {
        self.config.retry = None;
        self
    }

    pub fn executor_config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom executor instead of the built-in HTTP one.
    ///
    /// URL, credentials and connection settings are ignored in that case.
    pub fn executor(mut self, executor: Arc<dyn RequestExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn build(self) -> Result<S> {
        let service_name = self
            .service_name
            .unwrap_or_else(|| S::DEFAULT_SERVICE_NAME.to_string());

        let executor = match self.executor {
            Some(executor) => executor,
            None => {
                let url = self
                    .service_url
                    .or_else(|| S::DEFAULT_SERVICE_URL.map(str::to_string))
                    .ok_or_else(|| {
                        Error::configuration_with_context(
                            "Service URL is required",
                            ErrorContext::new()
                                .with_field_path("service_url")
                                .with_source(service_name.clone()),
                        )
                    })?;
                Arc::new(HttpExecutor::new(&url, self.authenticator, self.config)?)
                    as Arc<dyn RequestExecutor>
            }
        };

        Ok(S::from_dispatcher(Dispatcher::new(service_name, executor)))
    }
}

impl<S: Service> Default for ServiceBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
