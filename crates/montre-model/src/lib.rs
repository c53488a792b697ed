pub mod catalog;
pub mod error;
pub mod part;
pub mod pricing;
pub mod result;
pub mod rule;
pub mod selection;
pub mod slot;

pub use catalog::{Catalog, Region};
pub use error::{EngineError, Result};
pub use part::{PartOption, Stock};
pub use pricing::Pricing;
pub use result::{CheckoutPayload, ConfigurationResult};
pub use rule::{Rule, SlotPredicate};
pub use selection::Selection;
pub use slot::Slot;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_round_trips_through_str() {
        for slot in Slot::ALL {
            assert_eq!(slot.as_str().parse::<Slot>(), Ok(slot));
        }
        assert!("bezel".parse::<Slot>().is_err());
    }

    #[test]
    fn option_eligibility_defaults_to_everywhere() {
        let option = PartOption::new("c1", "Steel case");
        assert!(option.eligible_in("FR-A"));
        assert!(option.eligible_in("FR-E"));
    }

    #[test]
    fn selection_iterates_in_canonical_order() {
        let mut selection = Selection::new();
        selection.set(Slot::Strap, Some("s1".to_string()));
        selection.set(Slot::Case, Some("c2".to_string()));
        let pairs: Vec<(Slot, &str)> = selection.iter().collect();
        assert_eq!(pairs, vec![(Slot::Case, "c2"), (Slot::Strap, "s1")]);
    }

    #[test]
    fn require_without_note_generates_message() {
        let rule = Rule::Require {
            when: [(Slot::Dial, "d3".to_string())].into(),
            then: [(Slot::Hands, "h2".to_string())].into(),
            note: None,
        };
        assert_eq!(rule.message(), "dial=d3 requires hands=h2");
    }

    #[test]
    fn rule_deserializes_from_tagged_json() {
        let json = r#"{"type":"ban","when":{"dial":"d3"},"because":"d3 requires gold hands"}"#;
        let rule: Rule = serde_json::from_str(json).expect("deserialize rule");
        assert_eq!(rule.message(), "d3 requires gold hands");
    }

    #[test]
    fn checkout_payload_serializes() {
        let payload = CheckoutPayload {
            sku: "c2-s1".to_string(),
            price: 530_00,
            currency: "EUR".to_string(),
            selection: Selection::from_iter([
                (Slot::Case, "c2".to_string()),
                (Slot::Strap, "s1".to_string()),
            ]),
        };
        let json = serde_json::to_string(&payload).expect("serialize payload");
        let round: CheckoutPayload = serde_json::from_str(&json).expect("deserialize payload");
        assert_eq!(round, payload);
    }
}
