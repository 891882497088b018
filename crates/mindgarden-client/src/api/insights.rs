//! Insights API.

use serde_json::Value;

use crate::client::MindgardenClient;
use crate::error::Result;
use crate::types::{HabitStreaksPayload, InsightsEnvelope, TodayInsights};

/// Insights API client.
pub struct InsightsApi {
    client: MindgardenClient,
}

impl InsightsApi {
    pub(crate) fn new(client: MindgardenClient) -> Self {
        Self { client }
    }

    /// Fetch today's insights, decoded.
    ///
    /// The streaks payload arrives as a JSON-encoded string nested inside
    /// the envelope. A missing or malformed payload decodes to an empty
    /// list instead of failing the call, and a non-numeric mood average
    /// decodes to `None`.
    pub async fn today(&self) -> Result<TodayInsights> {
        let envelope: InsightsEnvelope = self.client.get("/insights/today").await?;
        Ok(decode_today(envelope))
    }

    /// Fetch today's insights without the secondary decode.
    pub async fn today_raw(&self) -> Result<InsightsEnvelope> {
        self.client.get("/insights/today").await
    }
}

/// Decode the wire envelope into typed insights.
fn decode_today(envelope: InsightsEnvelope) -> TodayInsights {
    let mood_avg_7d = envelope.mood_avg_7d.as_ref().and_then(Value::as_f64);

    let streaks = match envelope.habit_streaks_json.as_deref() {
        Some(raw) if !raw.trim().is_empty() => {
            match serde_json::from_str::<HabitStreaksPayload>(raw) {
                Ok(payload) => payload.habits,
                Err(e) => {
                    tracing::warn!(error = %e, "Dropping malformed habit streaks payload");
                    Vec::new()
                }
            }
        }
        _ => Vec::new(),
    };

    TodayInsights {
        mood_avg_7d,
        streaks,
    }
}
