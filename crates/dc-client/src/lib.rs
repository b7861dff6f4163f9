//! DisposableCheck API client
//!
//! Thin wrapper over the remote validation service. The detection logic,
//! usage statistics, key issuance, and report review all live behind the
//! API; this crate only shapes requests and decodes responses.

pub mod local;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Configuration for the API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the validation API
    pub base_url: String,

    /// User agent string
    pub user_agent: String,

    /// Request timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("DISPOSABLECHECK_API_URL")
                .unwrap_or_else(|_| "https://api.disposablecheck.com".to_string()),
            user_agent: "DisposableCheck/0.1 (+https://disposablecheck.com)".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Result of a single email check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    pub email: String,
    pub domain: String,
    pub is_disposable: bool,
    pub is_valid_format: bool,
    /// Reachability verdict from the upstream MX/SMTP probe, when requested.
    #[serde(default)]
    pub reacher: Option<Value>,
    #[serde(default)]
    pub checked_at: Option<DateTime<Utc>>,
}

/// Aggregate usage statistics shown on the home page.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_emails_checked: u64,
    pub total_disposable_domains: u64,
    pub community_reports: u64,
}

/// Acknowledgement of an API key request; the key itself arrives by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyRequestResponse {
    pub message: String,
}

/// Acknowledgement of a disposable-domain report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Client for the DisposableCheck validation API.
pub struct ApiClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Check one email address, optionally asking for an MX/SMTP probe.
    pub async fn check(&self, email: &str, check_reachable: bool) -> ApiResult<CheckResponse> {
        tracing::debug!("Checking email via API: {}", email);
        let response = self
            .client
            .get(format!("{}/v1/check", self.config.base_url))
            .query(&[
                ("email", email),
                ("check_reachable", if check_reachable { "true" } else { "false" }),
            ])
            .send()
            .await?;

        decode(response).await
    }

    /// Fetch aggregate usage statistics.
    pub async fn stats(&self) -> ApiResult<StatsResponse> {
        let response = self
            .client
            .get(format!("{}/v1/stats", self.config.base_url))
            .send()
            .await?;

        decode(response).await
    }

    /// Request an API key for an email address.
    ///
    /// `bot_token` is the opaque token produced by the bot-verification
    /// widget; it is forwarded untouched.
    pub async fn request_key(&self, email: &str, bot_token: &str) -> ApiResult<KeyRequestResponse> {
        tracing::info!("Requesting API key for {}", email);
        let response = self
            .client
            .post(format!("{}/v1/keys", self.config.base_url))
            .json(&json!({
                "email": email,
                "token": bot_token,
            }))
            .send()
            .await?;

        decode(response).await
    }

    /// Submit a candidate disposable domain for review.
    pub async fn report(&self, domain: &str, reason: Option<&str>) -> ApiResult<ReportResponse> {
        tracing::info!("Reporting domain: {}", domain);
        let mut body = json!({ "domain": domain });
        if let Some(reason) = reason {
            body["reason"] = Value::String(reason.to_string());
        }

        let response = self
            .client
            .post(format!("{}/v1/report", self.config.base_url))
            .json(&body)
            .send()
            .await?;

        decode(response).await
    }
}

/// Decode a successful response, or surface the body's `message`/`error`
/// field for non-success statuses.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<Value>(&body).ok())
        .and_then(|body| {
            body.get("message")
                .or_else(|| body.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| status.to_string());

    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}
