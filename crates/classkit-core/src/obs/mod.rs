//! Observability: runtime counters and the sink abstraction.
//!
//! There is no log facade; construction, cache and write paths emit
//! `MetricsEvent`s and callers read them back as a report or capture them
//! with a scoped sink.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EntityCounters, EntitySummary, EventOps, EventReport, EventState};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
