//! Dashboard metrics.
//!
//! Recorded through the global `metrics` registry. Nothing is exported
//! unless the binary installs an exporter.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use std::time::Duration;

/// Register metric descriptions with the global registry.
pub fn register_descriptions() {
    describe_counter!(
        "cet_dashboard_hydrations_total",
        "Total number of state hydrations by outcome"
    );
    describe_histogram!(
        "cet_dashboard_hydration_duration_seconds",
        "Duration of each state hydration in seconds"
    );
    describe_counter!(
        "cet_dashboard_history_failures_total",
        "Total number of history fetches that fell back to empty lists"
    );
    describe_counter!(
        "cet_dashboard_submissions_total",
        "Total transaction submissions by kind and outcome"
    );
    describe_gauge!(
        "cet_dashboard_total_supply_tokens",
        "Total CET supply at the last hydration, in whole tokens"
    );
}

/// Record a completed hydration.
pub fn record_hydration(success: bool, duration: Duration) {
    let outcome = if success { "success" } else { "failure" };
    counter!("cet_dashboard_hydrations_total", "outcome" => outcome).increment(1);
    histogram!("cet_dashboard_hydration_duration_seconds").record(duration.as_secs_f64());
}

pub fn record_history_failure() {
    counter!("cet_dashboard_history_failures_total").increment(1);
}

/// Record a burn or cashback submission.
pub fn record_submission(kind: &str, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!(
        "cet_dashboard_submissions_total",
        "kind" => kind.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Set the supply gauge from a formatted decimal amount.
pub fn set_total_supply(formatted: &str) {
    if let Ok(value) = formatted.parse::<f64>() {
        gauge!("cet_dashboard_total_supply_tokens").set(value);
    }
}
