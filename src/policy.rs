//! Per-operation write policies.
//!
//! Each mutation either renders as soon as the user acts or only once
//! the server has confirmed it. The choice is fixed here per operation
//! rather than left implicit in the views.

/// When a mutation becomes visible in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Render the new value immediately; revert if the request fails.
    Optimistic,
    /// Keep the old rendering until the server confirms.
    AfterConfirm,
}

/// Checkbox toggles flip on click.
pub const CHECKBOX_TOGGLE: WritePolicy = WritePolicy::Optimistic;

/// Description edits keep the old text until the server answers.
pub const DESCRIPTION_EDIT: WritePolicy = WritePolicy::AfterConfirm;

/// Deleted rows stay visible until the server confirms.
pub const ITEM_DELETE: WritePolicy = WritePolicy::AfterConfirm;
