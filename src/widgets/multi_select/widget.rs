// SPDX-License-Identifier: MPL-2.0

//! Multi-select widget builder and rendering.

use super::message::MultiSelectMessage;
use super::option::{OptionValue, SelectOption};
use super::selection::{self, DisplayMode};
use super::state::MultiSelectState;
use crate::fl;
use cosmic::iced::widget::scrollable::{Direction, Scrollbar};
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};

/// A selected label as shown on the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Badge<'a> {
    value: &'a str,
    label: &'a str,
    /// Whether the badge carries a remove button.
    removable: bool,
}

impl<'a> Badge<'a> {
    fn new(option: &'a SelectOption, removable: bool) -> Self {
        Self {
            value: &option.value,
            label: &option.label,
            removable,
        }
    }
}

/// What the trigger button shows for a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TriggerContent<'a> {
    /// Nothing selected; the placeholder text.
    Placeholder(String),
    /// Removable badges, one per label.
    Badges(Vec<Badge<'a>>),
    /// An "N selected" badge followed by a strip of plain badges.
    Summary { text: String, strip: Vec<Badge<'a>> },
}

/// Builder for the multi-select widget.
///
/// The widget is fully controlled: `selected` is borrowed from the parent and
/// never modified. User actions come back through `on_message` and are turned
/// into proposals by [`MultiSelectState::update`].
///
/// # Example
///
/// ```ignore
/// MultiSelect::new(&self.tags_state, &self.tags, &self.config.tags, Message::Tags)
///     .placeholder(fl!("tags-placeholder"))
///     .width(Length::Fixed(320.0))
///     .into()
/// ```
pub struct MultiSelect<'a, Message>
where
    Message: Clone + 'static,
{
    state: &'a MultiSelectState,
    options: &'a [SelectOption],
    selected: &'a [OptionValue],
    on_message: Box<dyn Fn(MultiSelectMessage) -> Message + 'a>,
    placeholder: String,
    search_placeholder: String,
    width: Length,
    popup_width: Length,
    list_height: f32,
    spacing: u16,
}

impl<'a, Message> MultiSelect<'a, Message>
where
    Message: Clone + 'static,
{
    /// Creates a new multi-select widget.
    ///
    /// # Arguments
    ///
    /// - `state`: UI state of this widget (owned by parent)
    /// - `options`: the selectable options
    /// - `selected`: the current selection (owned by parent)
    /// - `on_message`: Function to wrap `MultiSelectMessage` into the parent's `Message` type
    pub fn new(
        state: &'a MultiSelectState,
        options: &'a [SelectOption],
        selected: &'a [OptionValue],
        on_message: impl Fn(MultiSelectMessage) -> Message + 'a,
    ) -> Self {
        Self {
            state,
            options,
            selected,
            on_message: Box::new(on_message),
            placeholder: fl!("multiselect-placeholder"),
            search_placeholder: fl!("multiselect-search-placeholder"),
            width: Length::Fill,
            popup_width: Length::Fixed(300.0),
            list_height: 210.0,
            spacing: 4,
        }
    }

    /// Sets the text shown when nothing is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the placeholder of the search input.
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Sets the width of the trigger button.
    ///
    /// Default is `Length::Fill`.
    pub fn width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    /// Sets the width of the popover.
    ///
    /// Default is `Length::Fixed(300.0)`.
    pub fn popup_width(mut self, width: Length) -> Self {
        self.popup_width = width;
        self
    }

    /// Sets the maximum height of the option list in pixels.
    ///
    /// Default is 210.
    pub fn list_height(mut self, height: f32) -> Self {
        self.list_height = height;
        self
    }

    /// Describes what the trigger shows for the current selection.
    fn trigger_content(&self) -> TriggerContent<'a> {
        let chosen = selection::selected_options(self.options, self.selected);

        match DisplayMode::of(chosen.len(), self.state.display_limit()) {
            DisplayMode::Placeholder => TriggerContent::Placeholder(self.placeholder.clone()),

            DisplayMode::Badges => TriggerContent::Badges(
                chosen
                    .into_iter()
                    .map(|option| Badge::new(option, true))
                    .collect(),
            ),

            DisplayMode::Summary { count } => TriggerContent::Summary {
                text: fl!("multiselect-selected-count", count = count),
                strip: chosen
                    .into_iter()
                    .map(|option| Badge::new(option, false))
                    .collect(),
            },
        }
    }

    /// Renders a badge, with a remove button when it is removable.
    fn render_badge(&self, badge: Badge<'a>) -> Element<'a, Message> {
        let mut row = widget::row::with_capacity(2)
            .push(widget::text::caption(badge.label))
            .align_y(Alignment::Center)
            .spacing(2);

        if badge.removable {
            row = row.push(
                widget::button::icon(icon::from_name("window-close-symbolic").size(12)).on_press(
                    (self.on_message)(MultiSelectMessage::Remove(badge.value.to_owned())),
                ),
            );
        }

        widget::container(row)
            .padding([2, 6])
            .class(cosmic::style::Container::Card)
            .into()
    }

    /// Renders the content of the trigger button.
    fn render_trigger_content(&self) -> Element<'a, Message> {
        match self.trigger_content() {
            TriggerContent::Placeholder(placeholder) => widget::text::body(placeholder)
                .width(Length::Fill)
                .into(),

            TriggerContent::Badges(badges) => {
                let mut row = widget::row::with_capacity(badges.len()).spacing(self.spacing);
                for badge in badges {
                    row = row.push(self.render_badge(badge));
                }
                widget::container(row).width(Length::Fill).into()
            }

            TriggerContent::Summary { text, strip: badges } => {
                let summary = widget::container(widget::text::caption(text))
                    .padding([2, 8])
                    .class(cosmic::style::Container::Primary);

                let mut strip = widget::row::with_capacity(badges.len()).spacing(self.spacing);
                for badge in badges {
                    strip = strip.push(self.render_badge(badge));
                }

                // Scrollbar chrome is hidden; the strip still scrolls.
                let strip = widget::scrollable(strip)
                    .id(self.state.strip_id().clone())
                    .direction(Direction::Horizontal(
                        Scrollbar::new().width(0.0).scroller_width(0.0).margin(0.0),
                    ))
                    .width(Length::Fill);

                widget::row::with_capacity(2)
                    .push(summary)
                    .push(strip)
                    .align_y(Alignment::Center)
                    .spacing(8)
                    .width(Length::Fill)
                    .into()
            }
        }
    }

    /// Renders the trigger button.
    fn render_trigger(&self) -> Element<'a, Message> {
        let row = widget::row::with_capacity(2)
            .push(self.render_trigger_content())
            .push(icon::from_name("pan-down-symbolic").size(16))
            .align_y(Alignment::Center)
            .spacing(8);

        widget::button::custom(row)
            .on_press((self.on_message)(MultiSelectMessage::ToggleOpen))
            .class(cosmic::theme::Button::Standard)
            .width(self.width)
            .into()
    }

    /// Renders a single option row of the list.
    fn render_option(&self, option: &'a SelectOption) -> Element<'a, Message> {
        let is_selected = selection::is_selected(self.selected, &option.value);

        let indicator = if is_selected {
            "checkbox-checked-symbolic"
        } else {
            "checkbox-symbolic"
        };

        let row = widget::row::with_capacity(2)
            .push(icon::from_name(indicator).size(16))
            .push(widget::text::body(option.label.as_str()).width(Length::Fill))
            .align_y(Alignment::Center)
            .spacing(8);

        let item = widget::container(row).padding([6, 10]).width(Length::Fill);

        widget::mouse_area(item)
            .on_press((self.on_message)(MultiSelectMessage::Toggle(
                option.value.clone(),
            )))
            .into()
    }

    /// Renders the filtered option list, or the empty view.
    fn render_list(&self) -> Element<'a, Message> {
        let visible = self.state.visible_options(self.options);

        if visible.is_empty() {
            return widget::container(widget::text::caption(fl!("multiselect-no-options")))
                .padding(16)
                .width(Length::Fill)
                .align_x(cosmic::iced::alignment::Horizontal::Center)
                .into();
        }

        let mut column = widget::column::with_capacity(visible.len()).spacing(2);
        for option in visible {
            column = column.push(self.render_option(option));
        }

        widget::container(widget::scrollable(column).width(Length::Fill))
            .max_height(self.list_height)
            .into()
    }

    /// Renders the footer with the selection count and the clear button.
    fn render_footer(&self) -> Option<Element<'a, Message>> {
        if self.selected.is_empty() {
            return None;
        }

        let row = widget::row::with_capacity(2)
            .push(
                widget::text::caption(fl!(
                    "multiselect-selected-count",
                    count = self.selected.len()
                ))
                .width(Length::Fill),
            )
            .push(
                widget::button::text(fl!("multiselect-clear"))
                    .on_press((self.on_message)(MultiSelectMessage::Clear)),
            )
            .align_y(Alignment::Center)
            .spacing(8);

        Some(widget::container(row).padding([4, 8]).into())
    }

    /// Builds the widget and returns it as an Element.
    pub fn build(self) -> Element<'a, Message> {
        let trigger = self.render_trigger();

        if !self.state.is_open() {
            return widget::popover(trigger)
                .position(widget::popover::Position::Bottom)
                .into();
        }

        let list = self.render_list();
        let footer = self.render_footer();
        let close = (self.on_message)(MultiSelectMessage::Close);
        let submit = (self.on_message)(MultiSelectMessage::SubmitSearch);

        let on_message = self.on_message;
        let search = widget::search_input(self.search_placeholder, self.state.search())
            .id(self.state.search_id().clone())
            .on_input(move |text| on_message(MultiSelectMessage::SearchChanged(text)))
            .on_submit(move |_| submit.clone());

        let popup = widget::column::with_capacity(3)
            .push(search)
            .push(list)
            .push_maybe(footer)
            .spacing(4);

        let popup = widget::container(popup)
            .padding(8)
            .width(self.popup_width)
            .class(cosmic::style::Container::Card);

        widget::popover(trigger)
            .position(widget::popover::Position::Bottom)
            .popup(popup)
            .on_close(close)
            .into()
    }
}

impl<'a, Message> From<MultiSelect<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'static,
{
    fn from(multi_select: MultiSelect<'a, Message>) -> Self {
        multi_select.build()
    }
}
