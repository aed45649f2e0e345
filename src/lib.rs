//! # eventstreams-admin
//!
//! Async Rust client for the Event Streams administration APIs: the Admin
//! REST API (topics, quotas, brokers, consumer groups, mirroring) and the
//! Schema Registry API (schemas, versions, compatibility rules).
//!
//! ## Overview
//!
//! Every API operation is a static [`operation::OperationDescriptor`]. A call
//! is validated against the descriptor, resolved into a
//! [`RequestDescriptor`] and handed to a [`transport::RequestExecutor`]
//! exactly once. Invalid calls fail locally and never reach the network.
//!
//! ## Key Features
//!
//! - **Typed clients**: [`AdminrestV1`] and [`SchemaregistryV1`], one async
//!   method per operation
//! - **Untyped access**: `invoke_operation` with [`CallParameters`] for
//!   callers that build parameters dynamically
//! - **Pluggable transport**: the reqwest-backed [`transport::HttpExecutor`]
//!   or any custom [`transport::RequestExecutor`]
//! - **Open enumerations**: documented wire values are enum variants, unknown
//!   ones pass through unchanged
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eventstreams_admin::adminrest::{AdminrestV1, GetTopicParams, TopicDetail};
//! use eventstreams_admin::auth::Authenticator;
//!
//! #[tokio::main]
//! async fn main() -> eventstreams_admin::Result<()> {
//!     let admin = AdminrestV1::builder()
//!         .service_url("https://kafka-admin.example.com")
//!         .authenticator(Authenticator::api_key("my-api-key"))
//!         .build()?;
//!
//!     let response = admin
//!         .get_topic(GetTopicParams {
//!             topic_name: Some("orders".into()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     let topic: TopicDetail = response.json()?;
//!     println!("{:?} has {:?} partitions", topic.name, topic.partitions);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adminrest`] | Admin REST client, operation table and models |
//! | [`schemaregistry`] | Schema Registry client, operation table and models |
//! | [`operation`] | Descriptor-driven validation and request building |
//! | [`transport`] | Executor trait and the HTTP implementation |
//! | [`client`] | Shared client builder |
//! | [`auth`] | Request authentication |

pub mod adminrest;
pub mod auth;
pub mod client;
pub mod operation;
pub mod schemaregistry;
pub mod transport;

mod wire;

pub use adminrest::AdminrestV1;
pub use operation::{CallParameters, RequestDescriptor, ResponseEnvelope};
pub use schemaregistry::SchemaregistryV1;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
