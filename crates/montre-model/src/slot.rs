use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Watch component category. The four slots form the complete canonical set;
/// their declaration order is the fixed order used by the codec and the SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Case,
    Dial,
    Hands,
    Strap,
}

impl Slot {
    /// All slots in canonical order (`case`, `dial`, `hands`, `strap`).
    pub const ALL: [Slot; 4] = [Slot::Case, Slot::Dial, Slot::Hands, Slot::Strap];

    /// Returns the lowercase slot name as it appears in bundle files,
    /// query strings and SKUs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Case => "case",
            Slot::Dial => "dial",
            Slot::Hands => "hands",
            Slot::Strap => "strap",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Slot {
    type Err = String;

    /// Parse a slot name. Case-insensitive to tolerate hand-edited bundles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "case" => Ok(Slot::Case),
            "dial" => Ok(Slot::Dial),
            "hands" => Ok(Slot::Hands),
            "strap" => Ok(Slot::Strap),
            _ => Err(format!("Unknown slot: {}", s)),
        }
    }
}
