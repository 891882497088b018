//! Metrics API.

use crate::client::MindgardenClient;
use crate::error::Result;
use crate::session::Tier;
use crate::types::{AnalyticsResponse, MetricsSnapshot};

/// Query parameters for windowed analytics.
#[derive(Debug, Default, serde::Serialize)]
pub struct AnalyticsQuery {
    /// Window length in days.
    pub days: u32,
}

/// Metrics API client.
pub struct MetricsApi {
    client: MindgardenClient,
}

impl MetricsApi {
    pub(crate) fn new(client: MindgardenClient) -> Self {
        Self { client }
    }

    /// Fetch windowed analytics.
    ///
    /// Window lengths beyond the free allowance are premium-gated server
    /// side. Caches the tier the server reports, like
    /// [`crate::api::BillingApi::upgrade`].
    pub async fn analytics(&self, days: u32) -> Result<AnalyticsResponse> {
        let response: AnalyticsResponse = self
            .client
            .get_with_query("/metrics/analytics", &AnalyticsQuery { days })
            .await?;

        self.client
            .session()
            .set_tier(Tier::from_wire(&response.subscription_tier));

        Ok(response)
    }

    /// Fetch today's metrics snapshot.
    pub async fn daily(&self) -> Result<MetricsSnapshot> {
        self.client
            .get_with_query("/metrics", &[("format", "json")])
            .await
    }
}
