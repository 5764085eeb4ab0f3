//! Caller contract violations reported by the todo reducer.

use crate::types::TodoId;
use thiserror::Error;

/// An action the reducer refuses because the caller broke its contract
///
/// These indicate a bug in the presentation layer, not bad user input.
/// State is never modified when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    /// `EditItemChange` arrived while no item was selected
    #[error("no current edit item")]
    NoCurrentEditItem,

    /// `EditItemChange` carried a different id than the item under edit
    #[error("id mismatch: only the item under edit ({expected}) can be changed, got {actual}")]
    IdMismatch {
        /// Id of the item under edit
        expected: TodoId,
        /// Id carried by the rejected change
        actual: TodoId,
    },

    /// `AddItem` carried an id that is already in the list
    #[error("an item with id {0} is already in the list")]
    DuplicateId(TodoId),

    /// A restored state named an item under edit that is not in its list
    #[error("edit cursor names {0}, which is not in the list")]
    DanglingEditCursor(TodoId),
}
