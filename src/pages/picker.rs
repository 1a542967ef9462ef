// SPDX-License-Identifier: MPL-2.0

//! Picker page view: two independent multi-selects and their applied selections.

use crate::app::{AppModel, Message, Picker};
use crate::fl;
use crate::widgets::{MultiSelect, OptionValue, SelectOption};
use crate::widgets::multi_select::selection;
use cosmic::iced::Length;
use cosmic::prelude::*;
use cosmic::widget;

/// View for the Picker page
pub fn view(app: &AppModel, space_s: u16, _space_m: u16) -> Element<'_, Message> {
    let header = widget::text::title1(fl!("picker"));

    let section = cosmic::widget::settings::section()
        .add(picker_item(
            app,
            Picker::Fruits,
            fl!("fruits"),
            fl!("fruits-description"),
            fl!("fruits-placeholder"),
            space_s,
        ))
        .add(picker_item(
            app,
            Picker::Tags,
            fl!("tags"),
            fl!("tags-description"),
            fl!("tags-placeholder"),
            space_s,
        ));

    widget::column::with_capacity(2)
        .push(header)
        .push(section)
        .spacing(space_s)
        .into()
}

/// A settings item holding one picker and the selection it has applied.
fn picker_item(
    app: &AppModel,
    picker: Picker,
    title: String,
    description: String,
    default_placeholder: String,
    space_s: u16,
) -> Element<'_, Message> {
    let (state, options, selected) = app.picker_data(picker);

    let placeholder = if app.config.placeholder.is_empty() {
        default_placeholder
    } else {
        app.config.placeholder.clone()
    };

    let control = MultiSelect::new(state, options, selected, move |msg| {
        Message::Picker(picker, msg)
    })
    .placeholder(placeholder)
    .search_placeholder(fl!("multiselect-search-placeholder"))
    .width(Length::Fixed(320.0))
    .popup_width(Length::Fixed(320.0))
    .list_height(240.0);

    let control = widget::column::with_capacity(2)
        .push(control)
        .push(widget::text::caption(applied_summary(options, selected)))
        .spacing(space_s)
        .width(Length::Fixed(320.0));

    cosmic::widget::settings::item::builder(title)
        .description(description)
        .control(control)
        .into()
}

/// Describes the applied selection, in selection order.
fn applied_summary(options: &[SelectOption], selected: &[OptionValue]) -> String {
    if selection::selected_options(options, selected).is_empty() {
        return fl!("nothing-selected");
    }

    let labels: Vec<&str> = selected
        .iter()
        .filter_map(|value| {
            options
                .iter()
                .find(|option| &option.value == value)
                .map(|option| option.label.as_str())
        })
        .collect();

    format!("{}: {}", fl!("applied-selection"), labels.join(", "))
}
