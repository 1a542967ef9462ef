// SPDX-License-Identifier: MPL-2.0

//! Pure selection logic for the multi-select widget.
//!
//! Every function here borrows the caller's selection and returns a new
//! proposed sequence. The caller decides whether to apply it.

use super::option::{OptionValue, SelectOption};

/// Number of labels shown as individual removable badges by default.
pub const DEFAULT_DISPLAY_LIMIT: usize = 1;

/// Returns true if `value` is part of the selection.
pub fn is_selected(selected: &[OptionValue], value: &str) -> bool {
    selected.iter().any(|item| item == value)
}

/// Proposes the selection after toggling `value`.
///
/// A present value is filtered out, an absent value is appended.
pub fn toggle(selected: &[OptionValue], value: &str) -> Vec<OptionValue> {
    if is_selected(selected, value) {
        remove(selected, value)
    } else {
        let mut next = Vec::with_capacity(selected.len() + 1);
        next.extend_from_slice(selected);
        next.push(value.to_owned());
        next
    }
}

/// Proposes the selection without `value`, keeping the order of the rest.
pub fn remove(selected: &[OptionValue], value: &str) -> Vec<OptionValue> {
    selected
        .iter()
        .filter(|item| item.as_str() != value)
        .cloned()
        .collect()
}

/// Proposes an empty selection.
pub fn clear() -> Vec<OptionValue> {
    Vec::new()
}

/// Returns the options that are part of the selection, in option order.
///
/// Selected values without a matching option are ignored.
pub fn selected_options<'a>(
    options: &'a [SelectOption],
    selected: &[OptionValue],
) -> Vec<&'a SelectOption> {
    options
        .iter()
        .filter(|option| is_selected(selected, &option.value))
        .collect()
}

/// Returns the options matching the search query, in option order.
pub fn filter_options<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    options.iter().filter(|option| option.matches(query)).collect()
}

/// How the trigger renders the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Nothing to show; the placeholder text is displayed.
    Placeholder,
    /// Every label is shown as a removable badge.
    Badges,
    /// A single "N selected" badge followed by a scrollable label strip.
    Summary {
        /// Number of displayed labels.
        count: usize,
    },
}

impl DisplayMode {
    /// Picks the display mode for `label_count` labels.
    ///
    /// Labels are shown as badges while their number does not exceed
    /// `display_limit`.
    pub fn of(label_count: usize, display_limit: usize) -> Self {
        match label_count {
            0 => DisplayMode::Placeholder,
            n if n <= display_limit => DisplayMode::Badges,
            count => DisplayMode::Summary { count },
        }
    }

    /// Returns true if the label strip is visible in this mode.
    pub fn has_strip(&self) -> bool {
        matches!(self, DisplayMode::Summary { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "Apple"),
            SelectOption::new("b", "Banana"),
            SelectOption::new("c", "Cherry"),
        ]
    }

    fn values(items: &[&str]) -> Vec<OptionValue> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_absent_appends() {
        let selected = values(&["c", "a"]);
        assert_eq!(toggle(&selected, "b"), values(&["c", "a", "b"]));
        // The input is left untouched.
        assert_eq!(selected, values(&["c", "a"]));
    }

    #[test]
    fn test_toggle_present_removes_and_keeps_order() {
        let selected = values(&["c", "a", "b"]);
        assert_eq!(toggle(&selected, "a"), values(&["c", "b"]));
    }

    #[test]
    fn test_toggle_twice_is_identity_for_absent_value() {
        let selected = values(&["a"]);
        let once = toggle(&selected, "b");
        assert_eq!(toggle(&once, "b"), selected);
    }

    #[test]
    fn test_remove_only_removes_target() {
        let selected = values(&["a", "b", "c"]);
        assert_eq!(remove(&selected, "b"), values(&["a", "c"]));
        assert_eq!(remove(&selected, "z"), selected);
    }

    #[test]
    fn test_clear_is_always_empty() {
        assert!(clear().is_empty());
    }

    fn labels<'a>(options: &'a [SelectOption], selected: &[OptionValue]) -> Vec<&'a str> {
        selected_options(options, selected)
            .into_iter()
            .map(|option| option.label.as_str())
            .collect()
    }

    #[test]
    fn test_walkthrough() {
        let selected = values(&["a"]);
        let selected = toggle(&selected, "b");
        assert_eq!(selected, values(&["a", "b"]));
        let selected = remove(&selected, "a");
        assert_eq!(selected, values(&["b"]));
        assert_eq!(clear(), Vec::<OptionValue>::new());
    }

    #[test]
    fn test_labels_follow_option_order_and_skip_unknown() {
        let options = fruits();
        let selected = values(&["c", "ghost", "a"]);
        assert_eq!(labels(&options, &selected), vec!["Apple", "Cherry"]);
    }

    #[test]
    fn test_labels_for_duplicate_values() {
        let mut options = fruits();
        options.push(SelectOption::new("a", "Apricot"));
        let selected = values(&["a"]);
        assert_eq!(labels(&options, &selected), vec!["Apple", "Apricot"]);
    }

    #[test]
    fn test_filter_options() {
        let options = fruits();
        let found: Vec<_> = filter_options(&options, "an")
            .into_iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(found, vec!["b"]);
        assert_eq!(filter_options(&options, "").len(), 3);
        assert!(filter_options(&options, "kiwi").is_empty());
    }

    #[test]
    fn test_display_mode_default_limit() {
        assert_eq!(
            DisplayMode::of(0, DEFAULT_DISPLAY_LIMIT),
            DisplayMode::Placeholder
        );
        assert_eq!(DisplayMode::of(1, DEFAULT_DISPLAY_LIMIT), DisplayMode::Badges);
        assert_eq!(
            DisplayMode::of(2, DEFAULT_DISPLAY_LIMIT),
            DisplayMode::Summary { count: 2 }
        );
    }

    #[test]
    fn test_display_mode_custom_limit() {
        assert_eq!(DisplayMode::of(3, 3), DisplayMode::Badges);
        assert_eq!(DisplayMode::of(4, 3), DisplayMode::Summary { count: 4 });
        assert!(DisplayMode::of(4, 3).has_strip());
        assert!(!DisplayMode::of(3, 3).has_strip());
    }

    #[test]
    fn test_display_mode_zero_limit_always_summarizes() {
        assert_eq!(DisplayMode::of(0, 0), DisplayMode::Placeholder);
        assert_eq!(DisplayMode::of(1, 0), DisplayMode::Summary { count: 1 });
    }
}
