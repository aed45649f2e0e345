//! Caller-supplied parameters for a single invocation.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::descriptor::HEADERS_PARAM;
use crate::{Error, ErrorContext, Result};

/// Typed parameters for one operation.
///
/// Implementors serialize their fields under the camelCase parameter names,
/// skipping unset ones, and keep header overrides out of the serialized form.
pub trait OperationParams: Serialize {
    fn header_overrides(&self) -> Option<&BTreeMap<String, String>>;

    fn to_call_parameters(&self) -> Result<CallParameters> {
        CallParameters::from_serializable(self, self.header_overrides().cloned())
    }
}

/// Parameter map for one call: camelCase name to JSON value, plus optional
/// header overrides.
///
/// A `null` value is indistinguishable from an absent key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallParameters {
    values: BTreeMap<String, Value>,
    headers: Option<BTreeMap<String, String>>,
}

impl CallParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from a typed params struct.
    ///
    /// The struct must serialize to a JSON object; `None` fields should be
    /// skipped so they stay absent.
    pub fn from_serializable<P: Serialize + ?Sized>(
        params: &P,
        headers: Option<BTreeMap<String, String>>,
    ) -> Result<Self> {
        let values = match serde_json::to_value(params)? {
            Value::Object(map) => map.into_iter().collect(),
            Value::Null => BTreeMap::new(),
            other => {
                return Err(Error::validation_with_context(
                    "Operation parameters must be an object",
                    ErrorContext::new()
                        .with_details(format!("got {}", json_kind(&other)))
                        .with_source("call_parameters"),
                ))
            }
        };
        Ok(Self { values, headers })
    }

    /// Set a parameter. Setting `headers` to an object replaces the header
    /// overrides instead; any other `headers` value is kept as-is and
    /// rejected when the request is built.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        if name == HEADERS_PARAM {
            if let Value::Object(map) = &value {
                self.headers = Some(
                    map.iter()
                        .map(|(k, v)| (k.clone(), value_to_string(v)))
                        .collect(),
                );
                return;
            }
        }
        self.values.insert(name, value);
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add one header override; later overrides for the same name win.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Value for `name`, treating `null` as absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    pub fn contains(&self, name: &str) -> bool {
        if name == HEADERS_PARAM {
            return self.headers.is_some();
        }
        self.get(name).is_some()
    }

    /// Names of every present (non-null) parameter, `headers` included.
    pub fn present_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, _)| k.as_str())
            .chain(self.headers.as_ref().map(|_| HEADERS_PARAM))
    }

    pub fn headers(&self) -> Option<&BTreeMap<String, String>> {
        self.headers.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.present_names().next().is_none()
    }
}

/// Render a scalar parameter value the way it appears in a path, query or
/// header. Arrays are joined with commas.
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
