//! Reflections export API.

use crate::client::MindgardenClient;
use crate::error::Result;
use crate::types::ReflectionsExport;

/// Export API client.
pub struct ExportApi {
    client: MindgardenClient,
}

impl ExportApi {
    pub(crate) fn new(client: MindgardenClient) -> Self {
        Self { client }
    }

    /// Export all reflections, oldest first. Premium-gated server side.
    pub async fn reflections(&self) -> Result<ReflectionsExport> {
        self.client.get("/export/reflections").await
    }
}
