//! # Operation Layer
//!
//! The data-driven core shared by both API surfaces. Every operation is a
//! static [`OperationDescriptor`]; a call runs the same pipeline regardless
//! of which service it belongs to:
//!
//! 1. [`validator`] checks the caller's [`CallParameters`] against the
//!    descriptor's required and accepted names.
//! 2. [`builder`] resolves the path template, query, body and media headers.
//! 3. [`headers`] contributes the diagnostic `User-Agent`.
//! 4. [`dispatcher`] hands the finished [`RequestDescriptor`] to a
//!    [`RequestExecutor`](crate::transport::RequestExecutor) exactly once.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`descriptor`] | Static per-operation metadata |
//! | [`params`] | Caller-supplied parameter map |
//! | [`validator`] | Required / unexpected parameter checks |
//! | [`headers`] | Diagnostic header composition |
//! | [`builder`] | Request descriptor construction |
//! | [`request`] | Request and response value types |
//! | [`dispatcher`] | Validate, build, dispatch |
//!
//! ## Example
//!
//! ```rust
//! use eventstreams_admin::adminrest::operations::GET_TOPIC;
//! use eventstreams_admin::operation::{build_request, CallParameters};
//!
//! # fn main() -> eventstreams_admin::Result<()> {
//! let params = CallParameters::new().with("topicName", "orders");
//! let request = build_request(&GET_TOPIC, &params, "adminrest")?;
//! assert_eq!(request.path, "/admin/topics/orders");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod descriptor;
pub mod dispatcher;
pub mod headers;
pub mod params;
pub mod request;
pub mod validator;

pub use builder::build_request;
pub use descriptor::{HttpMethod, OperationDescriptor, ParamBinding, ParamLocation, APPLICATION_JSON};
pub use dispatcher::Dispatcher;
pub use headers::sdk_headers;
pub use params::{CallParameters, OperationParams};
pub use request::{RequestDescriptor, ResponseEnvelope};
pub use validator::{validate, ValidationOutcome};
