use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::slot::Slot;

/// Partial slot -> option-id predicate. Matches when every listed slot is
/// currently selected with the listed id; an unset slot never matches.
pub type SlotPredicate = BTreeMap<Slot, String>;

/// A compatibility constraint over a selection. Rules are static
/// configuration, evaluated in declaration order, and advisory: a violated
/// selection stays fully formed and priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Rule {
    /// The combination described by `when` is not sold.
    Ban {
        when: SlotPredicate,
        because: String,
    },
    /// Whenever `when` holds, every entry of `then` must hold too.
    Require {
        when: SlotPredicate,
        then: SlotPredicate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl Rule {
    /// The message reported when this rule is violated. Requires without an
    /// explicit note get a generated one.
    pub fn message(&self) -> String {
        match self {
            Rule::Ban { because, .. } => because.clone(),
            Rule::Require {
                note: Some(note), ..
            } => note.clone(),
            Rule::Require { when, then, .. } => {
                let condition = format_predicate(when);
                let consequence = format_predicate(then);
                format!("{condition} requires {consequence}")
            }
        }
    }
}

fn format_predicate(predicate: &SlotPredicate) -> String {
    predicate
        .iter()
        .map(|(slot, id)| format!("{slot}={id}"))
        .collect::<Vec<_>>()
        .join(", ")
}
