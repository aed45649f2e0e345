//! Shared test executor that records requests instead of sending them.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use eventstreams_admin::transport::RequestExecutor;
use eventstreams_admin::{RequestDescriptor, ResponseEnvelope, Result};
use serde_json::Value;

#[derive(Default)]
pub struct RecordingExecutor {
    requests: Mutex<Vec<RequestDescriptor>>,
    reply: Mutex<Option<Value>>,
}

impl RecordingExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer every request with `body` as the result.
    pub fn replying(body: Value) -> Arc<Self> {
        let executor = Self::default();
        *executor.reply.lock().unwrap() = Some(body);
        Arc::new(executor)
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> RequestDescriptor {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was dispatched")
    }
}

#[async_trait]
impl RequestExecutor for RecordingExecutor {
    async fn execute(&self, request: RequestDescriptor) -> Result<ResponseEnvelope> {
        self.requests.lock().unwrap().push(request);
        let reply = self.reply.lock().unwrap().clone();
        Ok(ResponseEnvelope::new(200, "OK", reply))
    }
}

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
