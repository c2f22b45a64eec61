//! Metrics setup and update for the query engine.

use prometheus::core::{AtomicU64, GenericCounter};

#[derive(Debug, Clone)]
pub struct Metrics {
    pub query_total: GenericCounter<AtomicU64>,
    pub lookup_total: GenericCounter<AtomicU64>,
    pub lookup_error_total: GenericCounter<AtomicU64>,
    pub schema_error_total: GenericCounter<AtomicU64>,
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericCounter<AtomicU64>, prometheus::Error> {
    let int_counter =
        prometheus::IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}

/// Setup counters used to produce Prometheus metrics
pub fn initialise_metrics(
    metrics_registry: &mut prometheus::Registry,
) -> Result<Metrics, prometheus::Error> {
    let query_total = add_int_counter_metric(
        metrics_registry,
        "databot_query_total",
        "Total natural-language queries answered.",
    )?;

    let lookup_total = add_int_counter_metric(
        metrics_registry,
        "databot_lookup_total",
        "Total successful database lookups.",
    )?;

    let lookup_error_total = add_int_counter_metric(
        metrics_registry,
        "databot_lookup_error_total",
        "Total database lookups that failed.",
    )?;

    let schema_error_total = add_int_counter_metric(
        metrics_registry,
        "databot_schema_error_total",
        "Total schema introspections that degraded to an error note.",
    )?;

    Ok(Metrics {
        query_total,
        lookup_total,
        lookup_error_total,
        schema_error_total,
    })
}
