//! Client construction shared by the service clients.
//!
//! Developer-friendly goal: keep the public surface small and predictable.

pub mod builder;

pub use builder::{Service, ServiceBuilder};
