//! Billing API.

use crate::client::MindgardenClient;
use crate::error::Result;
use crate::session::Tier;
use crate::types::UpgradeResponse;

/// Billing API client.
pub struct BillingApi {
    client: MindgardenClient,
}

impl BillingApi {
    pub(crate) fn new(client: MindgardenClient) -> Self {
        Self { client }
    }

    /// Upgrade the account and cache the tier the server reports.
    ///
    /// Unrecognized tier values normalize to `Free` before being stored.
    pub async fn upgrade(&self) -> Result<Tier> {
        let response: UpgradeResponse = self.client.post_empty("/upgrade").await?;
        let tier = Tier::from_wire(&response.subscription_tier);
        self.client.session().set_tier(tier);
        Ok(tier)
    }
}
