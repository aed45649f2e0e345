//! Static per-operation metadata.

use std::fmt;

/// Media type used by every JSON-speaking operation.
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Where a parameter lands in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into a `{wire}` placeholder of the path template.
    Path,
    /// Appended to the query string.
    Query,
    /// Field of the JSON body object.
    Body,
    /// Request header named by the wire name.
    Header,
}

/// Binding of one caller parameter to its wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamBinding {
    /// Caller-facing (camelCase) name.
    pub name: &'static str,
    /// Wire name: snake_case field, placeholder or header name.
    pub wire: &'static str,
    pub location: ParamLocation,
    pub required: bool,
}

impl ParamBinding {
    pub const fn path(name: &'static str, wire: &'static str) -> Self {
        Self {
            name,
            wire,
            location: ParamLocation::Path,
            required: true,
        }
    }

    pub const fn query(name: &'static str, wire: &'static str) -> Self {
        Self {
            name,
            wire,
            location: ParamLocation::Query,
            required: false,
        }
    }

    pub const fn body(name: &'static str, wire: &'static str) -> Self {
        Self {
            name,
            wire,
            location: ParamLocation::Body,
            required: false,
        }
    }

    pub const fn header(name: &'static str, wire: &'static str) -> Self {
        Self {
            name,
            wire,
            location: ParamLocation::Header,
            required: false,
        }
    }

    /// Mark an optional binding as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Name of the reserved parameter carrying caller header overrides.
pub const HEADERS_PARAM: &str = "headers";

/// Immutable description of one API operation.
///
/// Descriptors live in `static` tables and are shared by every in-flight call.
#[derive(Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Operation name as exposed by the API (e.g. `createTopic`).
    pub operation_id: &'static str,
    pub method: HttpMethod,
    /// Path template with `{wire}` placeholders.
    pub path: &'static str,
    pub params: &'static [ParamBinding],
    pub accept: Option<&'static str>,
    pub content_type: Option<&'static str>,
}

impl OperationDescriptor {
    /// Names that must be present on every call.
    pub fn required_params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().filter(|p| p.required).map(|p| p.name)
    }

    /// Every name a caller may supply, including `headers`.
    pub fn accepted_params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params
            .iter()
            .map(|p| p.name)
            .chain(std::iter::once(HEADERS_PARAM))
    }

    pub fn bindings(&self, location: ParamLocation) -> impl Iterator<Item = &ParamBinding> + '_ {
        self.params.iter().filter(move |p| p.location == location)
    }

    pub fn binding(&self, name: &str) -> Option<&ParamBinding> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn has_body(&self) -> bool {
        self.bindings(ParamLocation::Body).next().is_some()
    }
}
