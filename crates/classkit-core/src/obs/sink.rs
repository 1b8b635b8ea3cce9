//! Metrics sink boundary.
//!
//! Construction and write paths MUST NOT touch obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
//!
//! This module is the only allowed bridge between runtime logic and the
//! global metrics state.
use crate::{entity::WriteOutcome, obs::metrics};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    Construct {
        entity_path: &'static str,
    },
    ConfigRejected {
        entity_path: &'static str,
    },
    CacheHit {
        entity_path: &'static str,
    },
    CacheMiss {
        entity_path: &'static str,
    },
    TypeViolation {
        entity_path: &'static str,
    },
    Write {
        entity_path: &'static str,
        outcome: WriteOutcome,
    },
    ImmutableViolation {
        entity_path: &'static str,
    },
}

impl MetricsEvent {
    #[must_use]
    pub const fn entity_path(&self) -> &'static str {
        match self {
            Self::Construct { entity_path }
            | Self::ConfigRejected { entity_path }
            | Self::CacheHit { entity_path }
            | Self::CacheMiss { entity_path }
            | Self::TypeViolation { entity_path }
            | Self::Write { entity_path, .. }
            | Self::ImmutableViolation { entity_path } => entity_path,
        }
    }
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default process-local sink that writes into global metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        let entity_path = event.entity_path();

        metrics::with_state_mut(|m| {
            let ops = &mut m.ops;
            let entry = m.entities.entry(entity_path.to_string()).or_default();

            match event {
                MetricsEvent::Construct { .. } => {
                    ops.construct_calls = ops.construct_calls.saturating_add(1);
                    entry.construct_calls = entry.construct_calls.saturating_add(1);
                }
                MetricsEvent::ConfigRejected { .. } => {
                    ops.config_rejections = ops.config_rejections.saturating_add(1);
                    entry.config_rejections = entry.config_rejections.saturating_add(1);
                }
                MetricsEvent::CacheHit { .. } => {
                    ops.cache_hits = ops.cache_hits.saturating_add(1);
                    entry.cache_hits = entry.cache_hits.saturating_add(1);
                }
                MetricsEvent::CacheMiss { .. } => {
                    ops.cache_misses = ops.cache_misses.saturating_add(1);
                    entry.cache_misses = entry.cache_misses.saturating_add(1);
                }
                MetricsEvent::TypeViolation { .. } => {
                    ops.type_violations = ops.type_violations.saturating_add(1);
                    entry.type_violations = entry.type_violations.saturating_add(1);
                }
                MetricsEvent::Write { outcome, .. } => {
                    ops.writes = ops.writes.saturating_add(1);
                    entry.writes = entry.writes.saturating_add(1);
                    if outcome == WriteOutcome::Unchanged {
                        ops.unchanged_writes = ops.unchanged_writes.saturating_add(1);
                        entry.unchanged_writes = entry.unchanged_writes.saturating_add(1);
                    }
                }
                MetricsEvent::ImmutableViolation { .. } => {
                    ops.immutable_violations = ops.immutable_violations.saturating_add(1);
                    entry.immutable_violations = entry.immutable_violations.saturating_add(1);
                }
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match override_sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current metrics state.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
///
/// The previous sink is restored on every exit, including unwinding.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
