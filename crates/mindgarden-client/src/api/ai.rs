//! AI suggestions API.

use crate::client::MindgardenClient;
use crate::error::Result;
use crate::types::{AiSuggestion, DeepDiveRequest, DeepDiveResponse};

/// AI API client.
pub struct AiApi {
    client: MindgardenClient,
}

impl AiApi {
    pub(crate) fn new(client: MindgardenClient) -> Self {
        Self { client }
    }

    /// Fetch a suggestion based on recent check-ins.
    pub async fn suggestion(&self) -> Result<AiSuggestion> {
        self.client.get("/ai/suggestions").await
    }

    /// Run a deep-dive analysis on a topic.
    ///
    /// Premium-gated server side; a 403 surfaces via
    /// [`crate::Error::is_premium_required`].
    pub async fn deep_dive(&self, topic: impl Into<String>) -> Result<DeepDiveResponse> {
        self.client
            .post(
                "/ai/deep_dive",
                &DeepDiveRequest {
                    topic: topic.into(),
                },
            )
            .await
    }
}
