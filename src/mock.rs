use crate::models::{GaugeMetric, RateLimitSnapshot};
use chrono::{Duration, SecondsFormat, Utc};

/// Fabricated snapshot for `--mock`: renders the full report without a
/// network call or an API key. Values cover all three color tiers.
pub fn mock_snapshot() -> RateLimitSnapshot {
    let reset = (Utc::now() + Duration::minutes(23)).to_rfc3339_opts(SecondsFormat::Secs, true);

    RateLimitSnapshot {
        tokens: GaugeMetric {
            limit: 400_000,
            remaining: 287_500,
        },
        tokens_reset: Some(reset),
        input_tokens: GaugeMetric {
            limit: 200_000,
            remaining: 61_000,
        },
        output_tokens: GaugeMetric {
            limit: 80_000,
            remaining: 9_400,
        },
        requests: GaugeMetric {
            limit: 4_000,
            remaining: 3_911,
        },
    }
}
