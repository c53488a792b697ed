//! Price computation in integer minor units. No floating point anywhere,
//! so repeated re-pricing of the same selection can never drift.

use montre_catalog::FilteredCatalog;
use montre_model::{Pricing, Selection};

/// Total price: base plus the delta of the selected option per slot. Unset
/// slots, and ids that fell out of the filtered catalog, contribute zero.
pub fn price(pricing: &Pricing, filtered: &FilteredCatalog, selection: &Selection) -> i64 {
    let deltas: i64 = selection
        .iter()
        .filter_map(|(slot, id)| filtered.option(slot, id))
        .map(|option| option.price_delta)
        .sum();
    pricing.base + deltas
}

/// Render minor units as a 2-decimal major amount with the currency code,
/// e.g. `530.00 EUR`.
pub fn format_price(minor: i64, currency: &str) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let magnitude = minor.unsigned_abs();
    format!(
        "{sign}{}.{:02} {currency}",
        magnitude / 100,
        magnitude % 100
    )
}
