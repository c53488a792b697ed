use serde::{Deserialize, Serialize};

/// Static pricing input: base price plus a currency code. All amounts are
/// integer minor units (cents for EUR) so repeated additions stay exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    pub base: i64,
    pub currency: String,
}

impl Pricing {
    pub fn new(base: i64, currency: impl Into<String>) -> Self {
        Self {
            base,
            currency: currency.into(),
        }
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            base: 0,
            currency: "EUR".to_string(),
        }
    }
}
