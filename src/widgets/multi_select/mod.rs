// SPDX-License-Identifier: MPL-2.0

//! Multi-select dropdown widget.
//!
//! A trigger button shows the current selection: a placeholder when empty,
//! removable badges while few labels are selected, and an "N selected" badge
//! with a scrollable label strip otherwise. Pressing it opens a popover with
//! a search input, the filterable option list and a clear button.
//!
//! The widget is controlled. The parent owns the selection, the widget only
//! proposes a new one.
//!
//! # Example
//!
//! ```ignore
//! use crate::widgets::multi_select::{MultiSelect, MultiSelectMessage, MultiSelectState};
//!
//! // In your app state
//! struct AppModel {
//!     fruits: Vec<SelectOption>,
//!     selected: Vec<OptionValue>,
//!     fruits_state: MultiSelectState,
//! }
//!
//! // In your message enum
//! enum Message {
//!     Fruits(MultiSelectMessage),
//! }
//!
//! // In your view function
//! fn view(&self) -> Element<'_, Message> {
//!     MultiSelect::new(&self.fruits_state, &self.fruits, &self.selected, Message::Fruits)
//!         .placeholder("Pick fruits")
//!         .into()
//! }
//!
//! // In your update function
//! fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
//!     match message {
//!         Message::Fruits(msg) => {
//!             let update = self.fruits_state.update(msg, &self.fruits, &self.selected);
//!             if let Some(selected) = update.change {
//!                 self.selected = selected;
//!             }
//!             return update.task.map(|m| cosmic::Action::App(Message::Fruits(m)));
//!         }
//!     }
//! }
//! ```

mod message;
mod option;
pub mod selection;
mod state;
mod widget;

pub use message::MultiSelectMessage;
pub use option::{OptionValue, SelectOption};
pub use selection::DisplayMode;
pub use state::{DEFAULT_SCROLL_DELAY, MultiSelectState, Update};
pub use widget::MultiSelect;
