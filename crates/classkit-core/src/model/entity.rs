use crate::{compose::InitHook, error::ConfigError, model::field::FieldKind};
use std::fmt;

///
/// Capabilities
///
/// Independently-toggleable concerns an entity type opts into.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Capabilities {
    pub slotted: bool,
    pub typed: bool,
    pub immutable: bool,
    pub cached: bool,
}

impl Capabilities {
    pub const NONE: Self = Self {
        slotted: false,
        typed: false,
        immutable: false,
        cached: false,
    };
    pub const SLOTTED: Self = Self {
        slotted: true,
        ..Self::NONE
    };
    pub const TYPED: Self = Self {
        typed: true,
        ..Self::NONE
    };
    pub const IMMUTABLE: Self = Self {
        immutable: true,
        ..Self::NONE
    };
    pub const CACHED: Self = Self {
        cached: true,
        ..Self::NONE
    };
    pub const ALL: Self = Self {
        slotted: true,
        typed: true,
        immutable: true,
        cached: true,
    };

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            slotted: self.slotted || other.slotted,
            typed: self.typed || other.typed,
            immutable: self.immutable || other.immutable,
            cached: self.cached || other.cached,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.slotted || self.typed || self.immutable || self.cached)
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = [
            (self.slotted, "Slotted"),
            (self.typed, "Typed"),
            (self.immutable, "Immutable"),
            (self.cached, "Cached"),
        ];

        let mut first = true;
        for (_, label) in labels.iter().filter(|(on, _)| *on) {
            if !first {
                f.write_str("+")?;
            }
            f.write_str(label)?;
            first = false;
        }
        if first {
            f.write_str("None")?;
        }

        Ok(())
    }
}

///
/// EntityModel
///
/// Static declaration of one entity type: its identity, its ordered slots
/// and type constraints, the capabilities it opts into and an optional init
/// hook that runs after the capability layers.
///
/// `None` means "not declared", which is different from an empty list.
///

#[derive(Clone, Copy, Debug)]
pub struct EntityModel {
    /// Fully-qualified path; identifies the concrete type (cache keys, registry).
    pub path: &'static str,
    /// Short type name used in rendering and diagnostics.
    pub name: &'static str,
    pub slots: Option<&'static [&'static str]>,
    pub types: Option<&'static [FieldKind]>,
    pub capabilities: Capabilities,
    pub init: Option<InitHook>,
}

impl EntityModel {
    #[must_use]
    pub const fn new(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            slots: None,
            types: None,
            capabilities: Capabilities::NONE,
            init: None,
        }
    }

    /// Declare slots and opt into Slotted.
    #[must_use]
    pub const fn slotted(self, slots: &'static [&'static str]) -> Self {
        Self {
            slots: Some(slots),
            capabilities: self.capabilities.union(Capabilities::SLOTTED),
            ..self
        }
    }

    /// Declare type constraints and opt into Typed.
    #[must_use]
    pub const fn typed(self, types: &'static [FieldKind]) -> Self {
        Self {
            types: Some(types),
            capabilities: self.capabilities.union(Capabilities::TYPED),
            ..self
        }
    }

    #[must_use]
    pub const fn immutable(self) -> Self {
        Self {
            capabilities: self.capabilities.union(Capabilities::IMMUTABLE),
            ..self
        }
    }

    #[must_use]
    pub const fn cached(self) -> Self {
        Self {
            capabilities: self.capabilities.union(Capabilities::CACHED),
            ..self
        }
    }

    /// Opt into capabilities without supplying their declarations.
    #[must_use]
    pub const fn with_capabilities(self, capabilities: Capabilities) -> Self {
        Self {
            capabilities: self.capabilities.union(capabilities),
            ..self
        }
    }

    #[must_use]
    pub const fn init(self, hook: InitHook) -> Self {
        Self {
            init: Some(hook),
            ..self
        }
    }

    /// Check that every opted-in capability has what it needs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capabilities.slotted {
            let slots = self
                .slots
                .ok_or(ConfigError::MissingSlots { entity: self.name })?;

            for (i, slot) in slots.iter().enumerate() {
                if slots[..i].contains(slot) {
                    return Err(ConfigError::DuplicateSlot {
                        entity: self.name,
                        slot: *slot,
                    });
                }
            }
        }

        if self.capabilities.typed && self.types.is_none() {
            return Err(ConfigError::MissingTypes { entity: self.name });
        }

        Ok(())
    }

    /// Position of a declared slot.
    #[must_use]
    pub fn slot_index(&self, name: &str) -> Option<usize> {
        self.slots?.iter().position(|slot| *slot == name)
    }

    /// Declared slots, empty when none are declared.
    #[must_use]
    pub fn slot_names(&self) -> &'static [&'static str] {
        self.slots.unwrap_or(&[])
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const PERSON: EntityModel = EntityModel::new("tests::Person", "Person")
        .slotted(&["name", "age"])
        .typed(&[FieldKind::Text, FieldKind::Int])
        .immutable()
        .cached();

    #[test]
    fn builder_accumulates_capabilities() {
        assert_eq!(PERSON.capabilities, Capabilities::ALL);
        assert_eq!(PERSON.capabilities.to_string(), "Slotted+Typed+Immutable+Cached");
        assert_eq!(Capabilities::NONE.to_string(), "None");
        assert!(PERSON.validate().is_ok());
    }

    #[test]
    fn slotted_without_slots_is_a_config_error() {
        let model = EntityModel::new("tests::Account", "Account")
            .with_capabilities(Capabilities::SLOTTED);

        assert_eq!(
            model.validate(),
            Err(ConfigError::MissingSlots { entity: "Account" })
        );
    }

    #[test]
    fn typed_without_types_is_a_config_error() {
        let model = EntityModel::new("tests::Account", "Account")
            .slotted(&["id"])
            .with_capabilities(Capabilities::TYPED);

        assert_eq!(
            model.validate(),
            Err(ConfigError::MissingTypes { entity: "Account" })
        );
    }

    #[test]
    fn duplicate_slots_are_rejected() {
        let model = EntityModel::new("tests::Pair", "Pair").slotted(&["a", "b", "a"]);

        assert_eq!(
            model.validate(),
            Err(ConfigError::DuplicateSlot {
                entity: "Pair",
                slot: "a"
            })
        );
    }

    #[test]
    fn empty_slot_list_is_a_valid_declaration() {
        let model = EntityModel::new("tests::Unit", "Unit").slotted(&[]);

        assert!(model.validate().is_ok());
        assert!(model.slot_names().is_empty());
    }

    #[test]
    fn slot_index_follows_declared_order() {
        assert_eq!(PERSON.slot_index("name"), Some(0));
        assert_eq!(PERSON.slot_index("age"), Some(1));
        assert_eq!(PERSON.slot_index("email"), None);
    }
}
