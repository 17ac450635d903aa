use serde::Deserialize;
use spamview_common::error::{SpamViewError, SpamViewResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/spamDetector-1.0/api/spam";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Text,
}

impl FromStr for OutputFormat {
    type Err = SpamViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            other => Err(SpamViewError::Config(format!(
                "invalid OUTPUT_FORMAT: {other} (expected html or text)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("html"),
            Self::Text => f.write_str("text"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub output_format: OutputFormat,
    pub output_path: Option<PathBuf>,
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present; every variable has a default.
    pub fn from_env() -> SpamViewResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let base_url = get_var_or("SPAM_API_BASE_URL", DEFAULT_BASE_URL)
            .trim()
            .trim_end_matches('/')
            .to_owned();
        if base_url.is_empty() {
            return Err(SpamViewError::Config(
                "SPAM_API_BASE_URL is set but empty".to_owned(),
            ));
        }

        let timeout_secs = match get_opt_var("SPAM_API_TIMEOUT_SECS") {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        Ok(Self {
            base_url,
            timeout_secs,
            output_format: get_var_or("OUTPUT_FORMAT", "html").parse()?,
            output_path: get_opt_var("OUTPUT_PATH").map(PathBuf::from),
            log_level: get_var_or("LOG_LEVEL", "info"),
        })
    }
}

fn parse_timeout(raw: &str) -> SpamViewResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(SpamViewError::Config(
            "invalid SPAM_API_TIMEOUT_SECS: must be positive".to_owned(),
        )),
        Ok(secs) => Ok(secs),
        Err(e) => Err(SpamViewError::Config(format!(
            "invalid SPAM_API_TIMEOUT_SECS: {e}"
        ))),
    }
}

fn get_opt_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
