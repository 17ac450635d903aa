use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use spamview_config::AppConfig;

use super::models::{MetricKind, MetricValue, ResultSet};

#[derive(Debug, Clone)]
pub struct SpamClientConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
}

impl From<&AppConfig> for SpamClientConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

#[derive(Clone)]
pub struct SpamClient {
    client: Client,
    config: SpamClientConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum SpamClientError {
    #[error("HTTP {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SpamClient {
    pub fn new(config: SpamClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        // No timeout unless configured; the transport default applies.
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// For testing: create a client pointing at a specific base URL (e.g., wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn results_url(&self) -> String {
        self.config.base_url.clone()
    }

    pub fn metric_url(&self, kind: MetricKind) -> String {
        format!("{}/{}", self.config.base_url, kind.path_segment())
    }

    /// Fetch the classification list.
    pub async fn fetch_results(&self) -> Result<ResultSet, SpamClientError> {
        self.get_json(&self.results_url()).await
    }

    /// Fetch a single metric (`{"val": number}`).
    pub async fn fetch_metric(&self, kind: MetricKind) -> Result<MetricValue, SpamClientError> {
        self.get_json(&self.metric_url(kind)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SpamClientError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpamClientError::HttpError { status, body });
        }

        let body = response.bytes().await?;
        let decoded = serde_json::from_slice(&body)?;
        tracing::debug!(url, bytes = body.len(), "decoded response");
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BASE_PATH: &str = "/spamDetector-1.0/api/spam";

    fn test_config() -> SpamClientConfig {
        SpamClientConfig {
            base_url: "http://localhost".to_string(),
            timeout_secs: Some(5),
        }
    }

    fn client_for(server: &MockServer) -> SpamClient {
        SpamClient::new(test_config())
            .unwrap()
            .with_base_url(&format!("{}{}", server.uri(), BASE_PATH))
    }

    fn make_records(count: usize) -> Vec<serde_json::Value> {
        (0..count)
            .map(|i| {
                serde_json::json!({
                    "file": format!("{:05}.msg", i),
                    "spamProbability": i as f64 / 10.0,
                    "actualClass": if i % 2 == 0 { "Ham" } else { "Spam" }
                })
            })
            .collect()
    }

    #[tokio::test]
    async fn fetch_results_decodes_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(BASE_PATH))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(make_records(3)))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_results().await.unwrap();
        assert_eq!(result.len(), 3);
        let first = result.iter().next().unwrap();
        assert_eq!(first.file, "00000.msg");
    }

    #[tokio::test]
    async fn fetch_metric_hits_metric_path() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{BASE_PATH}/precision")))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "val": 0.81 })))
            .expect(1)
            .mount(&server)
            .await;

        let metric = client_for(&server)
            .fetch_metric(MetricKind::Precision)
            .await
            .unwrap();
        assert_eq!(metric.val, 0.81);
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{BASE_PATH}/accuracy")))
            .respond_with(ResponseTemplate::new(500).set_body_string("training failed"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_metric(MetricKind::Accuracy)
            .await
            .unwrap_err();
        match err {
            SpamClientError::HttpError { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "training failed");
            }
            other => panic!("expected HttpError, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{BASE_PATH}/accuracy")))
            .respond_with(ResponseTemplate::new(200).set_body_string("{val: oops"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_metric(MetricKind::Accuracy)
            .await
            .unwrap_err();
        assert!(matches!(err, SpamClientError::Decode(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn connection_refused_is_request_error() {
        // Bind then release a port so nothing is listening on it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = SpamClient::new(test_config())
            .unwrap()
            .with_base_url(&format!("http://127.0.0.1:{port}{BASE_PATH}"));
        let err = client.fetch_results().await.unwrap_err();
        match err {
            SpamClientError::RequestError(e) => assert!(e.is_connect(), "got: {e:?}"),
            other => panic!("expected RequestError, got: {other:?}"),
        }
    }

    #[test]
    fn urls_are_built_from_base() {
        let client = SpamClient::new(test_config())
            .unwrap()
            .with_base_url("http://localhost:8080/spamDetector-1.0/api/spam/");
        assert_eq!(
            client.results_url(),
            "http://localhost:8080/spamDetector-1.0/api/spam"
        );
        assert_eq!(
            client.metric_url(MetricKind::Accuracy),
            "http://localhost:8080/spamDetector-1.0/api/spam/accuracy"
        );
    }

    #[test]
    fn config_from_app_config_copies_fields() {
        let app = AppConfig {
            base_url: "http://example.test/api/spam".to_string(),
            timeout_secs: None,
            output_format: spamview_config::OutputFormat::Text,
            output_path: None,
            log_level: "info".to_string(),
        };
        let cfg = SpamClientConfig::from(&app);
        assert_eq!(cfg.base_url, "http://example.test/api/spam");
        assert_eq!(cfg.timeout_secs, None);
    }
}
