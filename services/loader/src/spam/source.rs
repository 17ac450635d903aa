use async_trait::async_trait;

use super::client::{SpamClient, SpamClientError};
use super::models::{MetricKind, MetricValue, ResultSet};

/// Read side of the spam API as seen by the loader.
#[async_trait]
pub trait ResultsSource: Send + Sync {
    /// Human-readable origin, used in log fields.
    fn describe(&self, kind: Option<MetricKind>) -> String;

    async fn fetch_results(&self) -> Result<ResultSet, SpamClientError>;

    async fn fetch_metric(&self, kind: MetricKind) -> Result<MetricValue, SpamClientError>;
}

#[async_trait]
impl ResultsSource for SpamClient {
    fn describe(&self, kind: Option<MetricKind>) -> String {
        match kind {
            Some(kind) => self.metric_url(kind),
            None => self.results_url(),
        }
    }

    async fn fetch_results(&self) -> Result<ResultSet, SpamClientError> {
        SpamClient::fetch_results(self).await
    }

    async fn fetch_metric(&self, kind: MetricKind) -> Result<MetricValue, SpamClientError> {
        SpamClient::fetch_metric(self, kind).await
    }
}
