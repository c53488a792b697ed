use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Stock level of a part option. Informational only: an out-of-stock option
/// stays selectable and callers decide how to badge it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stock {
    #[default]
    In,
    Low,
    Out,
}

/// One purchasable variant of a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartOption {
    /// Unique within its slot.
    pub id: String,
    pub name: String,
    /// Price delta in currency minor units, added to the base price when
    /// selected. Signed so discounted variants are expressible.
    #[serde(default)]
    pub price_delta: i64,
    /// Region codes where this option is offered. Absent or empty means
    /// eligible everywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<BTreeSet<String>>,
    #[serde(default)]
    pub stock: Stock,
    /// Opaque display attributes (`material`, `finish`, ...). Never
    /// inspected by the engine.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl PartOption {
    /// Create an option with a zero price delta and no region restriction.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_delta: 0,
            regions: None,
            stock: Stock::default(),
            metadata: BTreeMap::new(),
        }
    }

    /// True if this option may be offered in the given region. No region
    /// restriction means eligible everywhere.
    pub fn eligible_in(&self, region: &str) -> bool {
        match &self.regions {
            Some(regions) if !regions.is_empty() => regions.contains(region),
            _ => true,
        }
    }
}
