use crate::error::GaugeError;
use crate::models::{GaugeMetric, RateLimitSnapshot};
use reqwest::header::HeaderMap;

const TOKENS_LIMIT: &str = "anthropic-ratelimit-tokens-limit";
const TOKENS_REMAINING: &str = "anthropic-ratelimit-tokens-remaining";
const TOKENS_RESET: &str = "anthropic-ratelimit-tokens-reset";
const INPUT_TOKENS_LIMIT: &str = "anthropic-ratelimit-input-tokens-limit";
const INPUT_TOKENS_REMAINING: &str = "anthropic-ratelimit-input-tokens-remaining";
const OUTPUT_TOKENS_LIMIT: &str = "anthropic-ratelimit-output-tokens-limit";
const OUTPUT_TOKENS_REMAINING: &str = "anthropic-ratelimit-output-tokens-remaining";
const REQUESTS_LIMIT: &str = "anthropic-ratelimit-requests-limit";
const REQUESTS_REMAINING: &str = "anthropic-ratelimit-requests-remaining";

/// Builds a snapshot from the probe response headers.
///
/// Absent headers default to zero (numeric) or None (reset timestamp).
/// A header that is present but not a valid non-negative integer is fatal.
pub fn parse_rate_limits(headers: &HeaderMap) -> Result<RateLimitSnapshot, GaugeError> {
    Ok(RateLimitSnapshot {
        tokens: metric(headers, TOKENS_LIMIT, TOKENS_REMAINING)?,
        tokens_reset: text(headers, TOKENS_RESET),
        input_tokens: metric(headers, INPUT_TOKENS_LIMIT, INPUT_TOKENS_REMAINING)?,
        output_tokens: metric(headers, OUTPUT_TOKENS_LIMIT, OUTPUT_TOKENS_REMAINING)?,
        requests: metric(headers, REQUESTS_LIMIT, REQUESTS_REMAINING)?,
    })
}

fn metric(
    headers: &HeaderMap,
    limit_name: &'static str,
    remaining_name: &'static str,
) -> Result<GaugeMetric, GaugeError> {
    Ok(GaugeMetric {
        limit: number(headers, limit_name)?,
        remaining: number(headers, remaining_name)?,
    })
}

fn number(headers: &HeaderMap, name: &'static str) -> Result<u64, GaugeError> {
    match headers.get(name) {
        None => Ok(0),
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .ok_or_else(|| GaugeError::MalformedHeader {
                name,
                value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
            }),
    }
}

fn text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .filter(|s| !s.is_empty())
}
