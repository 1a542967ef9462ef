// SPDX-License-Identifier: MPL-2.0

//! Provides localization support for this crate.

use crate::error::Result;
use i18n_embed::{
    DefaultLocalizer, LanguageLoader, Localizer,
    fluent::{FluentLanguageLoader, fluent_language_loader},
    unic_langid::LanguageIdentifier,
};
use rust_embed::RustEmbed;
use std::sync::LazyLock;

/// Applies the requested language(s) to requested translations from the `fl!()` macro.
pub fn init(requested_languages: &[LanguageIdentifier]) -> Result<()> {
    let selected = localizer().select(requested_languages)?;
    tracing::debug!(?selected, "localizations loaded");
    Ok(())
}

/// Get the `Localizer` to be used for localizing this library.
#[must_use]
pub fn localizer() -> Box<dyn Localizer> {
    Box::new(DefaultLocalizer::new(&*LANGUAGE_LOADER, &Localizations))
}

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();

    // Arguments are interpolated as-is, without bidi isolation marks.
    loader.set_use_isolating(false);

    // The fallback language is embedded at compile time.
    if let Err(error) = loader.load_fallback_language(&Localizations) {
        tracing::error!(%error, "failed to load fallback language");
    }

    loader
});

/// Request a localized string by ID from the i18n/ directory.
#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id)
    }};

    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id, $($args), *)
    }};
}

#[cfg(test)]
mod tests {
    use crate::fl;

    #[test]
    fn test_count_is_interpolated_plainly() {
        assert_eq!(fl!("multiselect-selected-count", count = 2usize), "2 selected");
        assert_eq!(fl!("scroll-delay-ms", ms = 10u64), "10 ms");
    }
}
