//! Tracing setup plus the metric-style lines emitted around SNCF calls.

pub fn init() {
    // RUST_LOG wins when set; the adapter defaults to info. Repeat calls
    // are no-ops so tests can initialize freely.
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// One structured line per upstream observation. `op` names the SNCF call
/// site (`places.resolve`, `journeys.search`, `vehicle_journey.get`),
/// `metric` the series (`remote_latency_ms`, `remote_error_total`).
pub fn log_metric(op: &str, metric: &str, value: f64) {
    tracing::info!(op = op, metric = metric, value = value, "metric");
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tolerates_repeat_calls() {
        super::init();
        super::init();
    }

    #[test]
    fn accepts_the_series_emitted_by_the_sncf_client() {
        super::init();
        super::log_metric("places.resolve", "remote_latency_ms", 12.0);
        super::log_metric("journeys.search", "remote_error_total", 1.0);
        super::log_metric("vehicle_journey.get", "remote_latency_ms", 8.0);
    }
}
