// SPDX-License-Identifier: MPL-2.0

//! Error types for the Multiselect application.

use cosmic::cosmic_config;
use thiserror::Error;

/// Main error type for application operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("config store error: {0}")]
    Config(#[from] cosmic_config::Error),

    #[error("config store is unavailable")]
    NoConfigStore,

    #[error("failed to load localizations: {0}")]
    Localization(#[from] i18n_embed::I18nEmbedError),

    #[error("failed to open {url:?}: {source}")]
    Launch {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, Error>;
