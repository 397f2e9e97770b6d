//! Health check operations.

use super::PatientRecordsClient;
use crate::error::Result;

impl PatientRecordsClient {
    /// Liveness probe. Succeeds when the server answers 200.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        self.handle_empty_response(response).await
    }
}
