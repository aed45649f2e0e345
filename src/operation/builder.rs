//! Request descriptor construction.
//!
//! Maps validated [`CallParameters`] onto an operation's path template,
//! query string, JSON body and headers. Nothing here performs I/O.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::{Map, Value};

use super::descriptor::{OperationDescriptor, ParamLocation, HEADERS_PARAM};
use super::headers::sdk_headers;
use super::params::{json_kind, value_to_string, CallParameters};
use super::request::RequestDescriptor;
use crate::{Error, ErrorContext, Result};

/// API version segment reported to the header composer.
const SERVICE_VERSION: &str = "v1";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}/]+)\}").expect("placeholder pattern is valid"));

/// Build the request for one call of `descriptor`.
///
/// Header precedence, lowest to highest: diagnostic headers, the
/// operation's fixed `Accept`/`Content-Type`, header-bound parameters,
/// caller overrides.
pub fn build_request(
    descriptor: &OperationDescriptor,
    params: &CallParameters,
    service_name: &str,
) -> Result<RequestDescriptor> {
    if let Some(value) = params.get(HEADERS_PARAM) {
        return Err(Error::validation_with_context(
            "Header overrides must be an object",
            ErrorContext::new()
                .with_operation(descriptor.operation_id)
                .with_field_path(HEADERS_PARAM)
                .with_details(format!("got {}", json_kind(value)))
                .with_source("request_builder"),
        ));
    }

    let path = resolve_path(descriptor, params)?;

    let query: BTreeMap<String, String> = descriptor
        .bindings(ParamLocation::Query)
        .filter_map(|b| params.get(b.name).map(|v| (b.wire.to_string(), value_to_string(v))))
        .collect();

    let body = if descriptor.has_body() {
        let fields: Map<String, Value> = descriptor
            .bindings(ParamLocation::Body)
            .filter_map(|b| params.get(b.name).map(|v| (b.wire.to_string(), v.clone())))
            .collect();
        Some(Value::Object(fields))
    } else {
        None
    };

    let mut headers = sdk_headers(service_name, SERVICE_VERSION, descriptor.operation_id);
    if let Some(accept) = descriptor.accept {
        headers.insert(ACCEPT, HeaderValue::from_static(accept));
    }
    if let Some(content_type) = descriptor.content_type {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    for binding in descriptor.bindings(ParamLocation::Header) {
        if let Some(value) = params.get(binding.name) {
            insert_header(&mut headers, descriptor, binding.wire, &value_to_string(value))?;
        }
    }
    if let Some(overrides) = params.headers() {
        for (name, value) in overrides {
            insert_header(&mut headers, descriptor, name, value)?;
        }
    }

    Ok(RequestDescriptor {
        operation_id: descriptor.operation_id,
        method: descriptor.method,
        path,
        query,
        body,
        headers,
    })
}

fn resolve_path(descriptor: &OperationDescriptor, params: &CallParameters) -> Result<String> {
    let mut unresolved = Vec::new();
    let path = PLACEHOLDER.replace_all(descriptor.path, |caps: &Captures| {
        let wire = &caps[1];
        let value = descriptor
            .bindings(ParamLocation::Path)
            .find(|b| b.wire == wire)
            .and_then(|b| params.get(b.name));
        match value {
            Some(v) => encode_component(&value_to_string(v)),
            None => {
                unresolved.push(wire.to_string());
                String::new()
            }
        }
    });

    if !unresolved.is_empty() {
        return Err(Error::validation_with_context(
            format!("Missing required parameters: {}", unresolved.join(", ")),
            ErrorContext::new()
                .with_operation(descriptor.operation_id)
                .with_field_path(unresolved.join(", "))
                .with_source("request_builder"),
        ));
    }
    Ok(path.into_owned())
}

/// Percent-encode one path segment (spaces as `%20`, `/` escaped).
fn encode_component(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn insert_header(
    headers: &mut HeaderMap,
    descriptor: &OperationDescriptor,
    name: &str,
    value: &str,
) -> Result<()> {
    let invalid = |details: String| {
        Error::validation_with_context(
            format!("Invalid header: {}", name),
            ErrorContext::new()
                .with_operation(descriptor.operation_id)
                .with_field_path("headers")
                .with_details(details)
                .with_source("request_builder"),
        )
    };
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
    let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
    headers.insert(header_name, header_value);
    Ok(())
}
