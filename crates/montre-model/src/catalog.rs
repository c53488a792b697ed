use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::part::PartOption;
use crate::slot::Slot;

/// A geographic eligibility partition. The engine treats codes opaquely;
/// the application defines the closed set (e.g. the French regions).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(pub String);

impl Region {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Region {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

/// Immutable per-slot option lists. Option order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub slots: BTreeMap<Slot, Vec<PartOption>>,
}

impl Catalog {
    pub fn new(slots: BTreeMap<Slot, Vec<PartOption>>) -> Self {
        Self { slots }
    }

    /// Options for a slot, or `None` when the slot is absent from the
    /// catalog (a schema mismatch callers must surface, not skip).
    pub fn options(&self, slot: Slot) -> Option<&[PartOption]> {
        self.slots.get(&slot).map(Vec::as_slice)
    }

    /// Look up one option by id within a slot.
    pub fn option(&self, slot: Slot, id: &str) -> Option<&PartOption> {
        self.slots
            .get(&slot)?
            .iter()
            .find(|option| option.id == id)
    }

    /// Ensure every canonical slot is present, inserting empty lists for
    /// slots the bundle did not declare.
    pub fn normalize(mut self) -> Self {
        for slot in Slot::ALL {
            self.slots.entry(slot).or_default();
        }
        self
    }
}
