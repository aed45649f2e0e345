//! Diagnostic headers attached to every request.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

/// SDK name reported in the `User-Agent` header.
pub const SDK_NAME: &str = "eventstreams_sdk";

/// Build the per-operation diagnostic headers.
///
/// Computed on every call rather than cached.
pub fn sdk_headers(service_name: &str, service_version: &str, operation_id: &str) -> HeaderMap {
    let agent = format!(
        "{}/{} (lang=rust; os.name={}; os.arch={})",
        SDK_NAME,
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
    );

    tracing::trace!(
        service = service_name,
        version = service_version,
        operation = operation_id,
        user_agent = agent.as_str(),
        "composed sdk headers"
    );

    let mut headers = HeaderMap::new();
    // Built only from ASCII constants, so this cannot fail in practice.
    if let Ok(value) = HeaderValue::from_str(&agent) {
        headers.insert(USER_AGENT, value);
    }
    headers
}
