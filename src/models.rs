/// A single metered resource as reported by the API: how much the current
/// window allows and how much is left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaugeMetric {
    pub limit: u64,
    pub remaining: u64,
}

impl GaugeMetric {
    /// Remaining capacity as a percentage of the limit.
    ///
    /// Zero when the limit is zero. May exceed 100 if the upstream service
    /// reports more remaining than the limit; that is passed through as-is.
    pub fn percent(&self) -> f64 {
        if self.limit == 0 {
            0.0
        } else {
            self.remaining as f64 / self.limit as f64 * 100.0
        }
    }

    /// A zero limit means the API never reported this metric, so its
    /// section is skipped in the report.
    pub fn is_reported(&self) -> bool {
        self.limit != 0
    }
}

/// Rate-limit snapshot assembled from the headers of one probe response.
/// Created once per run and discarded at exit.
#[derive(Debug, Clone, Default)]
pub struct RateLimitSnapshot {
    /// Combined token quota across input and output.
    pub tokens: GaugeMetric,
    /// ISO-8601 instant at which the combined token window refills,
    /// verbatim as the API sent it.
    pub tokens_reset: Option<String>,
    pub input_tokens: GaugeMetric,
    pub output_tokens: GaugeMetric,
    pub requests: GaugeMetric,
}
