use thiserror::Error;

use crate::slot::Slot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// An operation referenced a slot the catalog does not carry. This is a
    /// catalog/selection schema mismatch and fatal to the call.
    #[error("slot {slot} is not present in the catalog")]
    InvalidSlot { slot: Slot },

    /// `select` was given an id that is not in the filtered list for the
    /// slot. The mutation is rejected and the prior selection stands.
    #[error("option {id:?} is not available for slot {slot}")]
    InvalidOption { slot: Slot, id: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
