use crate::{error::ImmutableViolation, model::entity::Capabilities, value::Value};

///
/// WriteOutcome
/// What a successful field write did.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WriteOutcome {
    /// The field had no value before.
    Assigned,
    /// The field already held an equal value; nothing changed.
    Unchanged,
    /// The field held a different value and was overwritten.
    Replaced,
}

///
/// WriteGuard
///
/// Per-entity write policy. `SingleAssignment` is the Immutable capability:
/// a field may be set once, later writes must carry an equal value.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WriteGuard {
    Open,
    SingleAssignment,
}

impl WriteGuard {
    #[must_use]
    pub const fn for_capabilities(capabilities: Capabilities) -> Self {
        if capabilities.immutable {
            Self::SingleAssignment
        } else {
            Self::Open
        }
    }

    /// Decide whether `attempted` may replace `current` in `field`.
    pub fn admit(
        self,
        entity: &'static str,
        field: &str,
        current: Option<&Value>,
        attempted: &Value,
    ) -> Result<WriteOutcome, ImmutableViolation> {
        let Some(current) = current else {
            return Ok(WriteOutcome::Assigned);
        };

        if current == attempted {
            return Ok(WriteOutcome::Unchanged);
        }

        match self {
            Self::Open => Ok(WriteOutcome::Replaced),
            Self::SingleAssignment => Err(ImmutableViolation {
                entity,
                field: field.to_string(),
                current: current.clone(),
                attempted: attempted.clone(),
            }),
        }
    }
}

///
/// TESTS
///
