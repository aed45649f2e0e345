//! Integration tests with mock HTTP server

pub mod http_executor;
pub mod mock_server;
