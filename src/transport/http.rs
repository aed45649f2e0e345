use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use tracing::{info, warn};
use url::Url;

use super::{RequestExecutor, TransportError};
use crate::auth::Authenticator;
use crate::operation::{RequestDescriptor, ResponseEnvelope};
use crate::{Error, ErrorContext, Result};

/// Retry policy applied by [`HttpExecutor`].
///
/// Only connection failures, timeouts, `429` and `5xx` responses are retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Extra attempts after the first one.
    pub max_retries: u32,
    pub min_interval: Duration,
    pub max_interval: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 4,
            min_interval: Duration::from_secs(1),
            max_interval: Duration::from_secs(30),
        }
    }
}

impl RetryConfig {
    /// Exponential backoff: min_interval * 2^attempt, capped at max_interval.
    fn backoff(&self, attempt: u32) -> Duration {
        let base = self.min_interval.as_millis() as u64;
        let cap = self.max_interval.as_millis() as u64;
        let delay = base.saturating_mul(1u64 << attempt.min(32));
        Duration::from_millis(delay.min(cap))
    }
}

/// Connection settings for [`HttpExecutor`].
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    pub timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
    /// Retries are disabled unless set.
    pub retry: Option<RetryConfig>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            pool_max_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
            retry: None,
        }
    }
}

/// reqwest-backed [`RequestExecutor`].
#[derive(Debug)]
pub struct HttpExecutor {
    client: reqwest::Client,
    base_url: String,
    authenticator: Authenticator,
    retry: Option<RetryConfig>,
}

impl HttpExecutor {
    pub fn new(
        service_url: &str,
        authenticator: Authenticator,
        config: ExecutorConfig,
    ) -> Result<Self> {
        let parsed = Url::parse(service_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid service URL: {}", e),
                ErrorContext::new()
                    .with_field_path("service_url")
                    .with_details(service_url)
                    .with_source("http_executor"),
            )
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "Service URL must be an absolute http(s) URL",
                ErrorContext::new()
                    .with_field_path("service_url")
                    .with_details(service_url)
                    .with_source("http_executor"),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(config.pool_idle_timeout))
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: service_url.trim_end_matches('/').to_string(),
            authenticator,
            retry: config.retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute_once(&self, request: &RequestDescriptor) -> Result<ResponseEnvelope> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .headers(request.headers.clone());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }
        builder = self.authenticator.apply(builder);

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let headers = response.headers().clone();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !status.is_success() {
            let code = status.as_u16();
            let retryable = code == 429 || status.is_server_error();
            info!(
                http_status = code,
                operation = request.operation_id,
                path = request.path.as_str(),
                retryable,
                "eventstreams request failed"
            );
            return Err(Error::Remote {
                status: code,
                status_text,
                message: String::from_utf8_lossy(&bytes).into_owned(),
                retryable,
                retry_after_ms: retry_after_ms(&headers),
            });
        }

        let result = if bytes.is_empty() {
            None
        } else {
            Some(
                serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                    serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
                }),
            )
        };

        Ok(ResponseEnvelope {
            result,
            status: status.as_u16(),
            status_text,
            headers,
        })
    }

    fn retry_delay(&self, attempt: u32, error: &Error) -> Option<Duration> {
        let policy = self.retry.as_ref()?;
        if attempt >= policy.max_retries {
            return None;
        }
        match error {
            Error::Remote {
                retryable: true,
                retry_after_ms,
                ..
            } => Some(
                retry_after_ms
                    .map(Duration::from_millis)
                    .unwrap_or_else(|| policy.backoff(attempt))
                    .min(policy.max_interval),
            ),
            Error::Transport(e) if e.is_transient() => Some(policy.backoff(attempt)),
            _ => None,
        }
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, request: RequestDescriptor) -> Result<ResponseEnvelope> {
        let mut attempt = 0;
        loop {
            match self.execute_once(&request).await {
                Ok(response) => return Ok(response),
                Err(err) => match self.retry_delay(attempt, &err) {
                    Some(delay) => {
                        warn!(
                            operation = request.operation_id,
                            attempt = attempt + 1,
                            delay_ms = delay.as_millis() as u64,
                            error = %err,
                            "retrying eventstreams request"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                    None => return Err(err),
                },
            }
        }
    }
}

/// Best-effort parsing of `Retry-After: <seconds>`.
fn retry_after_ms(headers: &HeaderMap) -> Option<u64> {
    let raw = headers.get(RETRY_AFTER)?.to_str().ok()?;
    let secs: u64 = raw.trim().parse().ok()?;
    Some(secs.saturating_mul(1000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = RetryConfig {
            max_retries: 5,
            min_interval: Duration::from_millis(100),
            max_interval: Duration::from_millis(350),
        };
        assert_eq!(policy.backoff(0), Duration::from_millis(100));
        assert_eq!(policy.backoff(1), Duration::from_millis(200));
        assert_eq!(policy.backoff(2), Duration::from_millis(350));
        assert_eq!(policy.backoff(40), Duration::from_millis(350));
    }

    #[test]
    fn rejects_relative_service_url() {
        let err = HttpExecutor::new("adminrest", Authenticator::NoAuth, ExecutorConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let executor = HttpExecutor::new(
            "https://adminrest.cloud.ibm.com/",
            Authenticator::NoAuth,
            ExecutorConfig::default(),
        )
        .unwrap();
        assert_eq!(executor.base_url(), "https://adminrest.cloud.ibm.com");
    }

    #[test]
    fn retry_only_when_enabled_and_retryable() {
        let remote = |status, retryable| Error::Remote {
            status,
            status_text: String::new(),
            message: String::new(),
            retryable,
            retry_after_ms: None,
        };

        let without = HttpExecutor::new(
            "http://localhost:9",
            Authenticator::NoAuth,
            ExecutorConfig::default(),
        )
        .unwrap();
        assert!(without.retry_delay(0, &remote(503, true)).is_none());

        let with = HttpExecutor::new(
            "http://localhost:9",
            Authenticator::NoAuth,
            ExecutorConfig {
                retry: Some(RetryConfig {
                    max_retries: 1,
                    min_interval: Duration::from_millis(10),
                    max_interval: Duration::from_millis(50),
                }),
                ..ExecutorConfig::default()
            },
        )
        .unwrap();
        assert_eq!(
            with.retry_delay(0, &remote(503, true)),
            Some(Duration::from_millis(10))
        );
        assert!(with.retry_delay(1, &remote(503, true)).is_none());
        assert!(with.retry_delay(0, &remote(404, false)).is_none());
    }

    #[test]
    fn parses_retry_after_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, "3".parse().unwrap());
        assert_eq!(retry_after_ms(&headers), Some(3000));
        headers.insert(RETRY_AFTER, "Wed, 21 Oct 2015 07:28:00 GMT".parse().unwrap());
        assert_eq!(retry_after_ms(&headers), None);
    }
}
