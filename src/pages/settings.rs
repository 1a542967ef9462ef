// SPDX-License-Identifier: MPL-2.0

//! Settings page view for the Multiselect application.

use crate::app::{AppModel, Message, SettingsStatus};
use crate::config::{MAX_DISPLAY_LIMIT, SCROLL_DELAYS_MS};
use crate::fl;
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};

/// View for the Settings page
pub fn view(app: &AppModel, space_s: u16, _space_m: u16) -> Element<'_, Message> {
    let header = widget::text::title1(fl!("settings"));

    // Badge limit - one button per allowed value, the active one highlighted
    let current_limit = app.config.display_limit();
    let mut limit_selector = widget::row::with_capacity(MAX_DISPLAY_LIMIT).spacing(space_s);
    for limit in 1..=MAX_DISPLAY_LIMIT {
        limit_selector = limit_selector.push(
            widget::button::text(limit.to_string())
                .class(if limit == current_limit {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Standard
                })
                .on_press(Message::SetDisplayLimit(limit)),
        );
    }

    let mut delay_selector = widget::row::with_capacity(SCROLL_DELAYS_MS.len()).spacing(space_s);
    for delay_ms in SCROLL_DELAYS_MS {
        delay_selector = delay_selector.push(
            widget::button::text(fl!("scroll-delay-ms", ms = delay_ms))
                .class(if delay_ms == app.config.scroll_delay_ms {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Standard
                })
                .on_press(Message::SetScrollDelay(delay_ms)),
        );
    }

    let appearance_section = cosmic::widget::settings::section()
        .title(fl!("appearance"))
        .add(
            cosmic::widget::settings::item::builder(fl!("placeholder"))
                .description(fl!("placeholder-description"))
                .control(
                    widget::text_input(fl!("multiselect-placeholder"), &app.placeholder_input)
                        .on_input(Message::PlaceholderChanged)
                        .on_submit(|_| Message::SavePlaceholder)
                        .width(Length::Fixed(300.0)),
                ),
        )
        .add(
            cosmic::widget::settings::item::builder(fl!("display-limit"))
                .description(fl!("display-limit-description"))
                .control(limit_selector),
        )
        .add(
            cosmic::widget::settings::item::builder(fl!("scroll-delay"))
                .description(fl!("scroll-delay-description"))
                .control(delay_selector),
        );

    let selections_section = cosmic::widget::settings::section()
        .title(fl!("selections"))
        .add(
            cosmic::widget::settings::item::builder(fl!("reset-selections"))
                .description(fl!("reset-selections-description"))
                .control(
                    widget::button::destructive(fl!("reset")).on_press(Message::ResetSelections),
                ),
        );

    widget::column::with_capacity(4)
        .push(header)
        .push(appearance_section)
        .push(selections_section)
        .push_maybe(status_line(&app.settings_status))
        .spacing(space_s)
        .into()
}

/// Shows the outcome of the last settings change, if any.
fn status_line(status: &SettingsStatus) -> Option<Element<'static, Message>> {
    let (icon_name, text) = match status {
        SettingsStatus::Idle => return None,
        SettingsStatus::Saved => ("object-select-symbolic", fl!("settings-saved")),
        SettingsStatus::Error(error) => {
            ("dialog-error-symbolic", format!("{}: {}", fl!("error"), error))
        }
    };

    Some(
        widget::row::with_capacity(2)
            .push(icon::from_name(icon_name).size(16))
            .push(widget::text::caption(text))
            .spacing(8)
            .align_y(Alignment::Center)
            .into(),
    )
}
