//! Constructed entity instances.
//!
//! An `Entity` is a cheap-clone handle; clones share one instance, and
//! `same_instance` is the identity check the Cached capability is about.
//! Every field write, including those made during construction, passes
//! through the entity's `WriteGuard`.

mod guard;


use crate::{
    error::EntityError,
    model::entity::EntityModel,
    obs::sink::{self, MetricsEvent},
    record::Record,
    value::Value,
};
use std::{cell::RefCell, fmt, rc::Rc};

// re-exports
pub use guard::{WriteGuard, WriteOutcome};

/// Rendering used for a declared slot that has never been written.
pub const UNSET_LABEL: &str = "<unset>";

///
/// Fields
///
/// Slotted entities hold exactly one position per declared slot; the rest
/// hold free-form named fields in a `Record`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
enum Fields {
    Slots(Vec<Option<Value>>),
    Record(Record),
}

struct EntityInner {
    model: &'static EntityModel,
    guard: WriteGuard,
    fields: RefCell<Fields>,
}

///
/// Entity
///

#[derive(Clone)]
pub struct Entity {
    inner: Rc<EntityInner>,
}

impl Entity {
    /// Allocate an instance with every field unset.
    pub(crate) fn allocate(model: &'static EntityModel) -> Self {
        let fields = if model.capabilities.slotted {
            Fields::Slots(vec![None; model.slot_names().len()])
        } else {
            Fields::Record(Record::new())
        };

        Self {
            inner: Rc::new(EntityInner {
                model,
                guard: WriteGuard::for_capabilities(model.capabilities),
                fields: RefCell::new(fields),
            }),
        }
    }

    #[must_use]
    pub fn model(&self) -> &'static EntityModel {
        self.inner.model
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.inner.model.name
    }

    #[must_use]
    pub fn path(&self) -> &'static str {
        self.inner.model.path
    }

    #[must_use]
    pub fn guard(&self) -> WriteGuard {
        self.inner.guard
    }

    /// Reference equality: both handles point at the same instance.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Current value of a field; `None` when unset or not a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match &*self.inner.fields.borrow() {
            Fields::Slots(slots) => {
                let index = self.inner.model.slot_index(name)?;
                slots.get(index).cloned().flatten()
            }
            Fields::Record(record) => record.attr(name).cloned(),
        }
    }

    /// Write a field through the entity's write guard.
    ///
    /// Slotted entities reject names they do not declare. Under Immutable a
    /// rejected write leaves the held value in place.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<WriteOutcome, EntityError> {
        let entity_path = self.path();
        let result = self.write_field(name, value.into());

        // the field borrow is released before any sink runs
        match &result {
            Ok(outcome) => sink::record(MetricsEvent::Write {
                entity_path,
                outcome: *outcome,
            }),
            Err(EntityError::Immutable(_)) => {
                sink::record(MetricsEvent::ImmutableViolation { entity_path });
            }
            Err(_) => {}
        }

        result
    }

    /// Values of the declared slots in order; empty for non-slotted entities.
    #[must_use]
    pub fn slot_values(&self) -> Vec<Option<Value>> {
        match &*self.inner.fields.borrow() {
            Fields::Slots(slots) => slots.clone(),
            Fields::Record(_) => Vec::new(),
        }
    }

    /// Copy every set field into a `Record`.
    #[must_use]
    pub fn to_record(&self) -> Record {
        match &*self.inner.fields.borrow() {
            Fields::Slots(slots) => self
                .inner
                .model
                .slot_names()
                .iter()
                .zip(slots)
                .filter_map(|(name, value)| value.clone().map(|v| (*name, v)))
                .collect(),
            Fields::Record(record) => record.clone(),
        }
    }

    fn write_field(&self, name: &str, value: Value) -> Result<WriteOutcome, EntityError> {
        let model = self.inner.model;
        let guard = self.inner.guard;
        let mut fields = self.inner.fields.borrow_mut();

        match &mut *fields {
            Fields::Slots(slots) => {
                let slot = model
                    .slot_index(name)
                    .and_then(|index| slots.get_mut(index))
                    .ok_or_else(|| EntityError::unknown_field(model.name, name))?;

                let outcome = guard.admit(model.name, name, slot.as_ref(), &value)?;
                if outcome != WriteOutcome::Unchanged {
                    *slot = Some(value);
                }

                Ok(outcome)
            }
            Fields::Record(record) => {
                let outcome = guard.admit(model.name, name, record.attr(name), &value)?;
                if outcome != WriteOutcome::Unchanged {
                    record.set_attr(name, value);
                }

                Ok(outcome)
            }
        }
    }
}

// Structural equality: same concrete type and equal fields in declared order.
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        if self.same_instance(other) {
            return true;
        }
        if self.path() != other.path() {
            return false;
        }

        *self.inner.fields.borrow() == *other.inner.fields.borrow()
    }
}

impl Eq for Entity {}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;

        match &*self.inner.fields.borrow() {
            Fields::Slots(slots) => {
                for (i, (name, value)) in self.model().slot_names().iter().zip(slots).enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match value {
                        Some(value) => write!(f, "{name}={value}")?,
                        None => write!(f, "{name}={UNSET_LABEL}")?,
                    }
                }
            }
            Fields::Record(record) => {
                for (i, (name, value)) in record.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}={value}")?;
                }
            }
        }

        f.write_str(")")
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
