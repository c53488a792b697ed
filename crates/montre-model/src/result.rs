use serde::{Deserialize, Serialize};

use crate::selection::Selection;

/// Externally visible snapshot of one configuration. Recomputed wholesale
/// on every mutation; never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationResult {
    pub selection: Selection,
    /// Total price in currency minor units.
    pub price: i64,
    pub currency: String,
    /// Broken-rule messages in rule declaration order. Advisory: the
    /// selection remains priced and shareable while in violation.
    pub violations: Vec<String>,
    /// Canonical identifier derived from the selection, used as cart line
    /// key and export filename.
    pub sku: String,
    /// Canonical shareable query string for the current selection. Callers
    /// sync the browser location (or equivalent) from this after each
    /// change.
    pub query: String,
}

impl ConfigurationResult {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Outbound handoff to the checkout collaborator. The engine never calls
/// any network API itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutPayload {
    pub sku: String,
    pub price: i64,
    pub currency: String,
    pub selection: Selection,
}
