// SPDX-License-Identifier: MPL-2.0

//! Option types for the multi-select widget.

use serde::{Deserialize, Serialize};

/// Identifier of a selectable option.
pub type OptionValue = String;

/// A single selectable entry.
///
/// Options are supplied by the parent and never modified by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Identifier reported in selections. Expected to be unique within a list.
    pub value: OptionValue,
    /// Human readable text shown in badges and the option list.
    pub label: String,
}

impl SelectOption {
    /// Creates a new option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Returns true if the option matches a search query.
    ///
    /// Matching is a case-insensitive substring test against both the label
    /// and the value. Blank queries match everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }

        let query = query.to_lowercase();
        self.label.to_lowercase().contains(&query) || self.value.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_label_and_value() {
        let option = SelectOption::new("rb", "Raspberry");

        assert!(option.matches(""));
        assert!(option.matches("   "));
        assert!(option.matches("berry"));
        assert!(option.matches("RASP"));
        assert!(option.matches("rb"));
        assert!(!option.matches("cherry"));
    }

    #[test]
    fn test_serde_shape() {
        let option: SelectOption =
            serde_json::from_str(r#"{"value":"a","label":"Apple"}"#).unwrap();
        assert_eq!(option, SelectOption::new("a", "Apple"));
    }
}
