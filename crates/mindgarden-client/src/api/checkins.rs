//! Check-ins API.

use crate::client::MindgardenClient;
use crate::error::Result;
use crate::types::CheckinRequest;

/// Check-ins API client.
pub struct CheckinsApi {
    client: MindgardenClient,
}

impl CheckinsApi {
    pub(crate) fn new(client: MindgardenClient) -> Self {
        Self { client }
    }

    /// Submit a daily check-in.
    pub async fn submit(&self, request: CheckinRequest) -> Result<()> {
        self.client.post_unit("/checkins", &request).await
    }

    /// Submit a mood-and-note check-in with no habit results.
    pub async fn submit_mood(
        &self,
        date: impl Into<String>,
        mood: i64,
        note: impl Into<String>,
    ) -> Result<()> {
        self.submit(CheckinRequest {
            date: date.into(),
            mood,
            note: Some(note.into()),
            habit_results: Vec::new(),
        })
        .await
    }
}
