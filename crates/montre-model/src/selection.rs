use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::slot::Slot;

/// The shopper's current slot -> option-id mapping. A missing entry means
/// the slot is unset, which is only valid while its filtered option list is
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    entries: BTreeMap<Slot, String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected option id for a slot, if any.
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.entries.get(&slot).map(String::as_str)
    }

    /// Set or clear one slot. Validation against the filtered catalog is
    /// the engine's job, not the container's.
    pub fn set(&mut self, slot: Slot, id: Option<String>) {
        match id {
            Some(id) if !id.is_empty() => {
                self.entries.insert(slot, id);
            }
            _ => {
                self.entries.remove(&slot);
            }
        }
    }

    /// Non-empty entries in canonical slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|id| (slot, id)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(Slot, String)> for Selection {
    fn from_iter<I: IntoIterator<Item = (Slot, String)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (slot, id) in iter {
            selection.set(slot, Some(id));
        }
        selection
    }
}
