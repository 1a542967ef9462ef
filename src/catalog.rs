// SPDX-License-Identifier: MPL-2.0

//! Built-in option lists shown on the picker page.

use crate::widgets::SelectOption;

const FRUITS: &[(&str, &str)] = &[
    ("apple", "Apple"),
    ("apricot", "Apricot"),
    ("banana", "Banana"),
    ("blueberry", "Blueberry"),
    ("cherry", "Cherry"),
    ("fig", "Fig"),
    ("grape", "Grape"),
    ("kiwi", "Kiwi"),
    ("lemon", "Lemon"),
    ("mango", "Mango"),
    ("orange", "Orange"),
    ("peach", "Peach"),
    ("pear", "Pear"),
    ("plum", "Plum"),
    ("raspberry", "Raspberry"),
    ("strawberry", "Strawberry"),
];

const TAGS: &[(&str, &str)] = &[
    ("bug", "Bug"),
    ("feature", "Feature"),
    ("docs", "Documentation"),
    ("perf", "Performance"),
    ("a11y", "Accessibility"),
    ("i18n", "Localization"),
    ("ui", "User interface"),
    ("good-first-issue", "Good first issue"),
];

fn build(entries: &[(&str, &str)]) -> Vec<SelectOption> {
    entries
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect()
}

pub fn fruits() -> Vec<SelectOption> {
    build(FRUITS)
}

pub fn tags() -> Vec<SelectOption> {
    build(TAGS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_values_are_unique() {
        for options in [fruits(), tags()] {
            let values: HashSet<_> = options.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(values.len(), options.len());
        }
    }
}
