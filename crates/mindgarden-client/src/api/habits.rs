//! Habits API.

use crate::client::MindgardenClient;
use crate::error::Result;
use crate::types::{CreateHabitRequest, Habit};

/// Habits API client.
pub struct HabitsApi {
    client: MindgardenClient,
}

impl HabitsApi {
    pub(crate) fn new(client: MindgardenClient) -> Self {
        Self { client }
    }

    /// List active habits.
    pub async fn list(&self) -> Result<Vec<Habit>> {
        self.client.get("/habits").await
    }

    /// Create a habit.
    ///
    /// The response body is unused by the contract; callers re-list to
    /// pick up the new entry.
    pub async fn create(&self, name: impl Into<String>) -> Result<()> {
        self.client
            .post_unit("/habits", &CreateHabitRequest { name: name.into() })
            .await
    }

    /// Delete a habit by ID.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/habits/{}", id)).await
    }
}
