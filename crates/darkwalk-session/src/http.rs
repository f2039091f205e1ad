//! HTTP progress sink backed by the Darkwalk API.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::warn;

use darkwalk_core::error::DomainError;
use darkwalk_core::progress::{ProgressRecord, ProgressRepository};

/// Posts progress snapshots to a remote Darkwalk API server.
///
/// Saves are lossy by contract: the narrative transition already happened,
/// so a failed delivery is logged and dropped rather than surfaced — the
/// engine must never observe a persistence failure. Reads still report
/// errors, since a caller asking for stored progress can act on them.
#[derive(Debug, Clone)]
pub struct HttpProgressSink {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProgressSink {
    /// Creates a sink targeting `base_url` (e.g. `http://localhost:3000`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn progress_url(&self) -> String {
        format!("{}/api/progress", self.base_url)
    }
}

#[async_trait]
impl ProgressRepository for HttpProgressSink {
    async fn save(&self, record: &ProgressRecord) -> Result<(), DomainError> {
        let result = self
            .client
            .post(self.progress_url())
            .json(record)
            .send()
            .await;
        match result {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => {
                warn!(
                    status = %response.status(),
                    user_id = %record.user_id,
                    "progress snapshot rejected, dropping"
                );
                Ok(())
            }
            Err(err) => {
                warn!(%err, user_id = %record.user_id, "progress snapshot undeliverable, dropping");
                Ok(())
            }
        }
    }

    async fn latest_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<ProgressRecord>, DomainError> {
        let url = format!("{}/{user_id}", self.progress_url());
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| DomainError::Infrastructure(err.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(DomainError::Infrastructure(format!(
                "progress fetch failed with status {}",
                response.status()
            )));
        }
        let record = response
            .json::<ProgressRecord>()
            .await
            .map_err(|err| DomainError::Infrastructure(err.to_string()))?;
        Ok(Some(record))
    }
}
