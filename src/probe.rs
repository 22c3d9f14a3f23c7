use crate::error::GaugeError;
use reqwest::header::HeaderMap;
use serde::Serialize;
use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimal chat request, chosen only to be cheap and always accepted.
/// The reply content is never inspected.
#[derive(Debug, Serialize)]
struct ProbeRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Reads the API key from the environment, trimming whitespace.
pub fn api_key_from_env() -> Result<String, GaugeError> {
    let key = env::var("ANTHROPIC_API_KEY")
        .unwrap_or_default()
        .trim()
        .to_string();
    if key.is_empty() {
        return Err(GaugeError::MissingApiKey);
    }
    Ok(key)
}

pub struct ProbeClient {
    client: reqwest::Client,
    url: String,
}

impl ProbeClient {
    pub fn new(timeout_secs: u64) -> Result<Self, GaugeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(GaugeError::Connection)?;
        Ok(Self {
            client,
            url: resolve_api_url(),
        })
    }

    /// Issues one minimal message request to elicit rate-limit headers.
    ///
    /// Only the response headers matter; the body is never read. Statuses
    /// other than 401/403 are not failures here — whatever rate-limit
    /// headers they carry (possibly none) flow on to parsing.
    pub async fn probe(&self, api_key: &str, model: &str) -> Result<HeaderMap, GaugeError> {
        let body = ProbeRequest {
            model,
            max_tokens: 1,
            messages: vec![Message {
                role: "user",
                content: "hi",
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GaugeError::Timeout(e)
                } else {
                    GaugeError::Connection(e)
                }
            })?;

        match response.status() {
            reqwest::StatusCode::UNAUTHORIZED => Err(GaugeError::Unauthorized),
            reqwest::StatusCode::FORBIDDEN => Err(GaugeError::Forbidden),
            _ => Ok(response.headers().clone()),
        }
    }
}

/// FUELGAUGE_API_URL overrides the probe endpoint (used by the
/// integration tests to point at a local mock server).
fn resolve_api_url() -> String {
    env::var("FUELGAUGE_API_URL")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
