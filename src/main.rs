// SPDX-License-Identifier: MPL-2.0

mod app;
mod catalog;
mod config;
mod error;
mod i18n;
mod pages;
mod widgets;

use tracing_subscriber::EnvFilter;

fn main() -> cosmic::iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    if let Err(error) = i18n::init(&requested_languages) {
        tracing::warn!(%error, "falling back to built-in strings");
    }

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(180.0),
    );

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<app::AppModel>(settings, ())
}
