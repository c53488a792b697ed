#![deny(unsafe_code)]

//! Canonical serialization of a selection: the shareable query string and
//! the SKU. Both are deterministic functions of the selection alone, so two
//! identical selections serialize identically no matter how they were
//! reached.

use std::str::FromStr;

use tracing::warn;
use url::form_urlencoded;

use montre_catalog::FilteredCatalog;
use montre_model::{Selection, Slot};

/// Separator between option ids in a SKU.
const SKU_SEPARATOR: &str = "-";

/// Encode a selection as a canonical query string: one `slot=id` pair per
/// non-empty slot, in canonical slot order, form-urlencoded.
pub fn encode(selection: &Selection) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (slot, id) in selection.iter() {
        serializer.append_pair(slot.as_str(), id);
    }
    serializer.finish()
}

/// Decode an arbitrary query string into the partial selection it still
/// legitimately describes. Unknown keys are ignored; values that are not
/// eligible ids under the current filtered catalog are dropped with a
/// warning so stale permalinks degrade to defaults instead of failing.
pub fn decode(raw: &str, filtered: &FilteredCatalog) -> Selection {
    let trimmed = raw.trim_start_matches('?');
    let mut selection = Selection::new();
    for (key, value) in form_urlencoded::parse(trimmed.as_bytes()) {
        let Ok(slot) = Slot::from_str(&key) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        if filtered.contains(slot, &value) {
            selection.set(slot, Some(value.into_owned()));
        } else {
            warn!(%slot, id = %value, "dropping stale option reference from query");
        }
    }
    selection
}

/// Derive the SKU: non-empty option ids joined with `-` in canonical slot
/// order. Used as cart line item key and exported-image filename.
pub fn sku(selection: &Selection) -> String {
    selection
        .iter()
        .map(|(_, id)| id)
        .collect::<Vec<_>>()
        .join(SKU_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use montre_model::{Catalog, PartOption};
    use std::collections::BTreeMap;

    fn filtered() -> FilteredCatalog {
        let mut slots = BTreeMap::new();
        slots.insert(
            Slot::Case,
            vec![PartOption::new("c1", "Steel"), PartOption::new("c2", "Gold")],
        );
        slots.insert(Slot::Strap, vec![PartOption::new("s1", "Leather")]);
        FilteredCatalog::new(&Catalog::new(slots).normalize(), None)
    }

    #[test]
    fn encode_orders_slots_canonically() {
        let selection = Selection::from_iter([
            (Slot::Strap, "s1".to_string()),
            (Slot::Case, "c2".to_string()),
        ]);
        assert_eq!(encode(&selection), "case=c2&strap=s1");
    }

    #[test]
    fn decode_ignores_unknown_keys() {
        let selection = decode("case=c2&utm_source=mail", &filtered());
        assert_eq!(selection.get(Slot::Case), Some("c2"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn decode_drops_stale_ids() {
        let selection = decode("case=retired-case&strap=s1", &filtered());
        assert_eq!(selection.get(Slot::Case), None);
        assert_eq!(selection.get(Slot::Strap), Some("s1"));
    }

    #[test]
    fn decode_tolerates_leading_question_mark() {
        let selection = decode("?case=c1", &filtered());
        assert_eq!(selection.get(Slot::Case), Some("c1"));
    }

    #[test]
    fn sku_is_order_independent() {
        let clicked = Selection::from_iter([
            (Slot::Strap, "s1".to_string()),
            (Slot::Case, "c2".to_string()),
        ]);
        let decoded = decode("case=c2&strap=s1", &filtered());
        assert_eq!(sku(&clicked), "c2-s1");
        assert_eq!(sku(&clicked), sku(&decoded));
    }

    #[test]
    fn escaped_ids_round_trip() {
        let mut slots = BTreeMap::new();
        slots.insert(Slot::Case, vec![PartOption::new("c 1/é", "Odd id")]);
        let filtered = FilteredCatalog::new(&Catalog::new(slots).normalize(), None);
        let selection = Selection::from_iter([(Slot::Case, "c 1/é".to_string())]);
        assert_eq!(decode(&encode(&selection), &filtered), selection);
    }
}
