use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for construction and write operations.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    pub entities: BTreeMap<String, EntityCounters>,
    pub since_ms: i64,
}

impl Default for EventState {
    fn default() -> Self {
        Self {
            ops: EventOps::default(),
            entities: BTreeMap::new(),
            since_ms: Utc::now().timestamp_millis(),
        }
    }
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Construction
    pub construct_calls: u64,
    pub config_rejections: u64,
    pub type_violations: u64,

    // Cache
    pub cache_hits: u64,
    pub cache_misses: u64,

    // Writes
    pub writes: u64,
    pub unchanged_writes: u64,
    pub immutable_violations: u64,
}

///
/// EntityCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EntityCounters {
    pub construct_calls: u64,
    pub config_rejections: u64,
    pub type_violations: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub writes: u64,
    pub unchanged_writes: u64,
    pub immutable_violations: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset() {
    with_state_mut(|m| *m = EventState::default());
}

/// Reset all event state.
pub(crate) fn reset_all() {
    reset();
}

///
/// EventReport
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventReport {
    /// Ephemeral runtime counters since `since_ms`.
    pub counters: Option<EventState>,
    /// Per-entity counters and ratios.
    pub entity_counters: Vec<EntitySummary>,
}

///
/// EntitySummary
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EntitySummary {
    pub path: String,
    pub construct_calls: u64,
    pub config_rejections: u64,
    pub type_violations: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Share of cached constructions served from the cache.
    pub cache_hit_ratio: f64,
    pub writes: u64,
    pub unchanged_writes: u64,
    pub immutable_violations: u64,
}

/// Build a metrics report from in-memory counters.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn report() -> EventReport {
    let snap = with_state(Clone::clone);

    let entity_counters = snap
        .entities
        .iter()
        .map(|(path, ops)| {
            let lookups = ops.cache_hits.saturating_add(ops.cache_misses);
            let cache_hit_ratio = if lookups > 0 {
                ops.cache_hits as f64 / lookups as f64
            } else {
                0.0
            };

            EntitySummary {
                path: path.clone(),
                construct_calls: ops.construct_calls,
                config_rejections: ops.config_rejections,
                type_violations: ops.type_violations,
                cache_hits: ops.cache_hits,
                cache_misses: ops.cache_misses,
                cache_hit_ratio,
                writes: ops.writes,
                unchanged_writes: ops.unchanged_writes,
                immutable_violations: ops.immutable_violations,
            }
        })
        .collect();

    EventReport {
        counters: Some(snap),
        entity_counters,
    }
}

///
/// TESTS
///
