// SPDX-License-Identifier: MPL-2.0

use crate::error::Result;
use crate::widgets::OptionValue;
use crate::widgets::multi_select::DEFAULT_SCROLL_DELAY;
use crate::widgets::multi_select::selection::DEFAULT_DISPLAY_LIMIT;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use std::time::Duration;

/// Largest display limit offered in the settings page.
pub const MAX_DISPLAY_LIMIT: usize = 4;

/// Scroll delays offered in the settings page, in milliseconds.
pub const SCROLL_DELAYS_MS: [u64; 4] = [0, 10, 100, 250];

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Text shown by the pickers while nothing is selected. Empty uses the localized default.
    pub placeholder: String,
    /// Number of labels shown as removable badges before switching to the summary.
    pub display_limit: usize,
    /// Delay before the label strip scrolls after a toggle, in milliseconds.
    pub scroll_delay_ms: u64,
    /// Selected fruit values.
    pub fruits: Vec<OptionValue>,
    /// Selected tag values.
    pub tags: Vec<OptionValue>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY.as_millis() as u64,
            fruits: Vec::new(),
            tags: Vec::new(),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults for broken entries.
    pub fn load(context: &cosmic_config::Config) -> Self {
        match Self::get_entry(context) {
            Ok(config) => config,
            Err((errors, config)) => {
                for error in errors {
                    tracing::warn!(%error, "failed to read config entry");
                }
                config
            }
        }
    }

    /// Writes the configuration to the config store.
    pub fn save(&self, context: &cosmic_config::Config) -> Result<()> {
        self.write_entry(context)?;
        Ok(())
    }

    /// Delay before the label strip scrolls after a toggle.
    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }

    /// Display limit clamped to the range offered in the settings page.
    pub fn display_limit(&self) -> usize {
        self.display_limit.clamp(1, MAX_DISPLAY_LIMIT)
    }

    /// Clears both persisted selections.
    pub fn reset_selections(&mut self) {
        self.fruits.clear();
        self.tags.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget() {
        let config = Config::default();
        assert_eq!(config.display_limit(), 1);
        assert_eq!(config.scroll_delay(), Duration::from_millis(10));
        assert!(config.placeholder.is_empty());
        assert!(config.fruits.is_empty());
        assert!(config.tags.is_empty());
    }

    #[test]
    fn test_display_limit_is_clamped() {
        let mut config = Config::default();
        config.display_limit = 0;
        assert_eq!(config.display_limit(), 1);
        config.display_limit = 99;
        assert_eq!(config.display_limit(), MAX_DISPLAY_LIMIT);
    }

    #[test]
    fn test_reset_selections() {
        let mut config = Config {
            fruits: vec!["apple".into()],
            tags: vec!["rust".into(), "gui".into()],
            ..Config::default()
        };
        config.reset_selections();
        assert!(config.fruits.is_empty());
        assert!(config.tags.is_empty());
        assert_eq!(config.display_limit, DEFAULT_DISPLAY_LIMIT);
    }
}
