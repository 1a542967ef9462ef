// SPDX-License-Identifier: MPL-2.0

//! Messages emitted by the multi-select widget.

use super::option::OptionValue;

/// Messages emitted by the multi-select widget.
///
/// These messages should be wrapped by the parent's message type and passed
/// to [`MultiSelectState::update`](super::MultiSelectState::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiSelectMessage {
    /// The trigger was pressed; flips the popover.
    ToggleOpen,

    /// The popover was dismissed (outside click or Escape).
    Close,

    /// The search text changed.
    SearchChanged(String),

    /// Enter was pressed in the search input.
    ///
    /// Toggles the first option matching the current search.
    SubmitSearch,

    /// An option in the list was picked.
    Toggle(OptionValue),

    /// The remove affordance of a badge was pressed.
    Remove(OptionValue),

    /// The clear button was pressed.
    Clear,

    /// A deferred scroll of the label strip became due.
    ///
    /// Carries the generation it was scheduled for; older generations are
    /// ignored.
    ScrollStrip(u64),
}
