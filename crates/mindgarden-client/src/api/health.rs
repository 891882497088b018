//! Health API.

use serde_json::Value;

use crate::client::MindgardenClient;
use crate::error::Result;

/// Health API client.
///
/// The health endpoint requires no authentication and its body is treated
/// as opaque.
pub struct HealthApi {
    client: MindgardenClient,
}

impl HealthApi {
    pub(crate) fn new(client: MindgardenClient) -> Self {
        Self { client }
    }

    /// Check server health, returning the raw body.
    pub async fn check(&self) -> Result<Value> {
        self.client.get_raw("/healthz").await
    }

    /// Simple connectivity check - returns true if server is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.check().await.is_ok()
    }
}
