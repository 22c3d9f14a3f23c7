use thiserror::Error;

/// Every condition that terminates the gauge before a report is printed.
///
/// Each variant is printed once in red and the process exits with status 1.
/// None are retried.
#[derive(Debug, Error)]
pub enum GaugeError {
    #[error("ANTHROPIC_API_KEY environment variable not set.")]
    MissingApiKey,

    #[error("Could not connect to the Anthropic API.")]
    Connection(#[source] reqwest::Error),

    #[error("Request timed out.")]
    Timeout(#[source] reqwest::Error),

    #[error("Invalid API key (401 Unauthorized).")]
    Unauthorized,

    #[error("Access forbidden (403). Check your API key permissions.")]
    Forbidden,

    #[error("Malformed rate-limit header {name}: {value:?}")]
    MalformedHeader { name: &'static str, value: String },
}
