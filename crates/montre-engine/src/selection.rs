//! Selection initialization and mutation. Both operations are pure: they
//! return a new `Selection` and leave the caller's value untouched, so a
//! rejected mutation cannot corrupt state.

use tracing::debug;

use montre_catalog::FilteredCatalog;
use montre_model::{EngineError, Result, Selection, Slot};

/// Resolve an initial selection against a filtered catalog. Per slot the
/// priority is: preferred id if still eligible, else the first eligible
/// option, else unset (only when the slot filtered to empty).
pub fn init(filtered: &FilteredCatalog, preferred: &Selection) -> Result<Selection> {
    let mut selection = Selection::new();
    for slot in Slot::ALL {
        let options = filtered.options(slot)?;
        let id = preferred
            .get(slot)
            .filter(|id| filtered.contains(slot, id))
            .map(str::to_string)
            .or_else(|| options.first().map(|option| option.id.clone()));
        selection.set(slot, id);
    }
    debug!(slots = selection.len(), "initialized selection");
    Ok(selection)
}

/// Apply one choice. Fails with `InvalidOption` when the id is not in the
/// filtered list for the slot; the returned error carries enough context
/// for the caller to surface it.
pub fn select(
    current: &Selection,
    filtered: &FilteredCatalog,
    slot: Slot,
    id: &str,
) -> Result<Selection> {
    // Distinguish a missing slot (schema mismatch) from an ineligible id.
    let _ = filtered.options(slot)?;
    if !filtered.contains(slot, id) {
        return Err(EngineError::InvalidOption {
            slot,
            id: id.to_string(),
        });
    }
    let mut next = current.clone();
    next.set(slot, Some(id.to_string()));
    debug!(%slot, id, "applied selection");
    Ok(next)
}
