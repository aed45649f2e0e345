//! Request and response value types exchanged with the executor.
//!
//! Both are plain data: the core builds a [`RequestDescriptor`] without
//! touching the network and the executor answers with a
//! [`ResponseEnvelope`].

use std::collections::BTreeMap;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::descriptor::HttpMethod;
use crate::Result;

/// Fully resolved HTTP request, ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub operation_id: &'static str,
    pub method: HttpMethod,
    /// Path with every placeholder substituted and percent-encoded.
    pub path: String,
    pub query: BTreeMap<String, String>,
    /// JSON object body; `None` for operations without body parameters.
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl RequestDescriptor {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body field by wire name.
    pub fn body_field(&self, wire: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|b| b.get(wire))
    }
}

/// Result of an executed request, passed through unchanged to the caller.
#[derive(Debug, Clone, Default)]
pub struct ResponseEnvelope {
    /// Decoded body; `None` when the service sent no content.
    pub result: Option<Value>,
    pub status: u16,
    pub status_text: String,
    pub headers: HeaderMap,
}

impl ResponseEnvelope {
    pub fn new(status: u16, status_text: impl Into<String>, result: Option<Value>) -> Self {
        Self {
            result,
            status,
            status_text: status_text.into(),
            headers: HeaderMap::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the result into a typed model.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.result.clone().ok_or_else(|| {
            <serde_json::Error as serde::de::Error>::custom(format!(
                "response has no body to decode (status {})",
                self.status
            ))
        })?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Status {
        status: String,
    }

    #[test]
    fn decodes_typed_result() {
        let envelope = ResponseEnvelope::new(200, "OK", Some(json!({"status": "available"})));
        assert!(envelope.is_success());
        let status: Status = envelope.json().unwrap();
        assert_eq!(status.status, "available");
    }

    #[test]
    fn empty_body_cannot_be_decoded() {
        let envelope = ResponseEnvelope::new(202, "Accepted", None);
        assert!(envelope.is_success());
        let err = envelope.json::<Status>().unwrap_err();
        assert!(!err.is_validation());
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn no_content_decode_failure_is_not_a_validation_error() {
        let envelope = ResponseEnvelope::new(204, "No Content", None);
        let err = envelope.json::<Value>().unwrap_err();
        assert!(!err.is_validation());
        assert!(err.to_string().contains("status 204"));
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        let request = RequestDescriptor {
            operation_id: "listTopics",
            method: HttpMethod::Get,
            path: "/admin/topics".into(),
            query: BTreeMap::new(),
            body: None,
            headers,
        };
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert!(request.body_field("name").is_none());
    }
}
