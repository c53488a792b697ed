use std::collections::BTreeMap;

use montre_model::{Catalog, EngineError, PartOption, Region, Result, Slot};
use tracing::debug;

/// Projection of a catalog down to the options eligible for one region.
/// With no region, every option is kept. Catalog order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredCatalog {
    slots: BTreeMap<Slot, Vec<PartOption>>,
    region: Option<Region>,
}

impl FilteredCatalog {
    pub fn new(catalog: &Catalog, region: Option<&Region>) -> Self {
        let slots: BTreeMap<Slot, Vec<PartOption>> = catalog
            .slots
            .iter()
            .map(|(slot, options)| {
                let kept: Vec<PartOption> = options
                    .iter()
                    .filter(|option| match region {
                        Some(region) => option.eligible_in(region.as_str()),
                        None => true,
                    })
                    .cloned()
                    .collect();
                (*slot, kept)
            })
            .collect();
        if let Some(region) = region {
            debug!(
                region = %region,
                options = slots.values().map(Vec::len).sum::<usize>(),
                "filtered catalog for region"
            );
        }
        Self {
            slots,
            region: region.cloned(),
        }
    }

    /// The region this projection was filtered for, if any.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Eligible options for a slot. A slot absent from the underlying
    /// catalog is a schema mismatch, not an empty list.
    pub fn options(&self, slot: Slot) -> Result<&[PartOption]> {
        self.slots
            .get(&slot)
            .map(Vec::as_slice)
            .ok_or(EngineError::InvalidSlot { slot })
    }

    /// Look up one eligible option by id.
    pub fn option(&self, slot: Slot, id: &str) -> Option<&PartOption> {
        self.slots
            .get(&slot)?
            .iter()
            .find(|option| option.id == id)
    }

    /// True if `id` is eligible for `slot` under the current region.
    pub fn contains(&self, slot: Slot, id: &str) -> bool {
        self.option(slot, id).is_some()
    }

    /// First eligible option for a slot, the default when nothing else is
    /// preferred.
    pub fn first(&self, slot: Slot) -> Option<&PartOption> {
        self.slots.get(&slot).and_then(|options| options.first())
    }

    /// Slots carried by the projection, in canonical order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.slots.keys().copied()
    }
}
