//! Compatibility-rule evaluation. Advisory only: violations are returned
//! as data and never block or mutate the selection, so a shopper keeps
//! price and preview feedback while correcting an incompatible combination.

use montre_model::{Rule, Selection, SlotPredicate};

/// Evaluate every rule against a selection. Bans are reported before
/// requires, each group in declaration order; the output is stable and
/// idempotent for a given input.
pub fn validate(rules: &[Rule], selection: &Selection) -> Vec<String> {
    let mut violations = Vec::new();
    for rule in rules {
        if let Rule::Ban { when, .. } = rule {
            if matches(when, selection) {
                violations.push(rule.message());
            }
        }
    }
    for rule in rules {
        if let Rule::Require { when, then, .. } = rule {
            if matches(when, selection) && !matches(then, selection) {
                violations.push(rule.message());
            }
        }
    }
    violations
}

/// A predicate matches when every listed slot currently carries the listed
/// id. An unset slot never matches, so partially built selections are not
/// flagged prematurely.
fn matches(predicate: &SlotPredicate, selection: &Selection) -> bool {
    predicate
        .iter()
        .all(|(slot, id)| selection.get(*slot) == Some(id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use montre_model::Slot;

    fn ban(slot: Slot, id: &str, because: &str) -> Rule {
        Rule::Ban {
            when: [(slot, id.to_string())].into(),
            because: because.to_string(),
        }
    }

    #[test]
    fn ban_fires_on_full_predicate_match() {
        let rules = vec![ban(Slot::Dial, "d3", "d3 requires gold hands")];
        let selection = Selection::from_iter([
            (Slot::Dial, "d3".to_string()),
            (Slot::Hands, "h1".to_string()),
        ]);
        assert_eq!(validate(&rules, &selection), vec!["d3 requires gold hands"]);
    }

    #[test]
    fn unset_slot_never_matches() {
        let rules = vec![ban(Slot::Dial, "d3", "no")];
        assert!(validate(&rules, &Selection::new()).is_empty());
    }

    #[test]
    fn require_fires_only_when_consequence_broken() {
        let rule = Rule::Require {
            when: [(Slot::Case, "c2".to_string())].into(),
            then: [(Slot::Strap, "s2".to_string())].into(),
            note: Some("gold case needs the leather strap".to_string()),
        };
        let broken = Selection::from_iter([
            (Slot::Case, "c2".to_string()),
            (Slot::Strap, "s1".to_string()),
        ]);
        let satisfied = Selection::from_iter([
            (Slot::Case, "c2".to_string()),
            (Slot::Strap, "s2".to_string()),
        ]);
        assert_eq!(
            validate(&[rule.clone()], &broken),
            vec!["gold case needs the leather strap"]
        );
        assert!(validate(&[rule], &satisfied).is_empty());
    }

    #[test]
    fn bans_report_before_requires_and_stably() {
        let rules = vec![
            Rule::Require {
                when: [(Slot::Case, "c1".to_string())].into(),
                then: [(Slot::Dial, "d9".to_string())].into(),
                note: None,
            },
            ban(Slot::Case, "c1", "first ban"),
            ban(Slot::Case, "c1", "second ban"),
        ];
        let selection = Selection::from_iter([(Slot::Case, "c1".to_string())]);
        let first = validate(&rules, &selection);
        assert_eq!(first, vec!["first ban", "second ban", "case=c1 requires dial=d9"]);
        assert_eq!(validate(&rules, &selection), first);
    }
}
