// SPDX-License-Identifier: MPL-2.0

//! State management for the multi-select widget.

use super::message::MultiSelectMessage;
use super::option::{OptionValue, SelectOption};
use super::selection::{self, DEFAULT_DISPLAY_LIMIT, DisplayMode};
use cosmic::iced::task;
use cosmic::iced::widget::scrollable::{self, RelativeOffset};
use cosmic::prelude::*;
use cosmic::widget;
use std::time::Duration;

/// Delay between a toggle and the scroll of the label strip.
pub const DEFAULT_SCROLL_DELAY: Duration = Duration::from_millis(10);

/// Result of handling a widget message.
///
/// `change` holds the proposed selection when the user asked for one. The
/// parent applies it to its own selection (or not). `task` must be mapped
/// into the parent's message type and returned from its update function.
#[must_use]
pub struct Update {
    /// Proposed new selection, if the message changes it.
    pub change: Option<Vec<OptionValue>>,
    /// Follow-up work: focusing the search input or scrolling the strip.
    pub task: Task<MultiSelectMessage>,
}

impl Update {
    fn none() -> Self {
        Self {
            change: None,
            task: Task::none(),
        }
    }

    fn task(task: Task<MultiSelectMessage>) -> Self {
        Self { change: None, task }
    }
}

/// UI state for one multi-select widget.
///
/// The selection itself is not stored here. It stays with the parent and is
/// passed in on every update and view.
#[derive(Debug)]
pub struct MultiSelectState {
    /// Whether the popover is shown.
    open: bool,
    /// Current search text.
    search: String,
    /// Id of the search input, used to focus it on open.
    search_id: widget::Id,
    /// Id of the horizontal label strip, used to scroll it.
    strip_id: widget::Id,
    /// Number of labels shown as removable badges before the summary is used.
    display_limit: usize,
    /// Delay before the strip is scrolled after a toggle.
    scroll_delay: Duration,
    /// Bumped on every toggle; only the latest scheduled scroll runs.
    scroll_generation: u64,
    /// Abort handle of the scheduled scroll. Dropping it cancels the scroll.
    pending_scroll: Option<task::Handle>,
}

impl Default for MultiSelectState {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiSelectState {
    /// Creates a closed widget state with an empty search.
    pub fn new() -> Self {
        Self {
            open: false,
            search: String::new(),
            search_id: widget::Id::unique(),
            strip_id: widget::Id::unique(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
            scroll_delay: DEFAULT_SCROLL_DELAY,
            scroll_generation: 0,
            pending_scroll: None,
        }
    }

    /// Sets how many labels are shown as removable badges.
    ///
    /// With more selected labels than this, the trigger shows an
    /// "N selected" badge and a scrollable strip of labels instead.
    /// Default is 1.
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    /// Changes how many labels are shown as removable badges.
    pub fn set_display_limit(&mut self, limit: usize) {
        self.display_limit = limit;
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    /// Sets the delay between a toggle and the strip scroll.
    pub fn with_scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = delay;
        self
    }

    /// Changes the delay between a toggle and the strip scroll.
    pub fn set_scroll_delay(&mut self, delay: Duration) {
        self.scroll_delay = delay;
    }

    /// Returns true if the popover is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_id(&self) -> &widget::Id {
        &self.search_id
    }

    pub fn strip_id(&self) -> &widget::Id {
        &self.strip_id
    }

    /// Returns the options visible under the current search.
    pub fn visible_options<'a>(&self, options: &'a [SelectOption]) -> Vec<&'a SelectOption> {
        selection::filter_options(options, &self.search)
    }

    /// Handles a widget message.
    ///
    /// `options` and `selected` are the values the widget was last rendered
    /// with. `selected` is only read; changes come back as a proposal.
    pub fn update(
        &mut self,
        message: MultiSelectMessage,
        options: &[SelectOption],
        selected: &[OptionValue],
    ) -> Update {
        match message {
            MultiSelectMessage::ToggleOpen => {
                if self.open {
                    self.close();
                    Update::none()
                } else {
                    Update::task(self.open())
                }
            }

            MultiSelectMessage::Close => {
                self.close();
                Update::none()
            }

            MultiSelectMessage::SearchChanged(search) => {
                self.search = search;
                Update::none()
            }

            MultiSelectMessage::SubmitSearch => {
                let Some(first) = self.visible_options(options).first().map(|o| o.value.clone())
                else {
                    return Update::none();
                };
                self.toggle(&first, options, selected)
            }

            MultiSelectMessage::Toggle(value) => self.toggle(&value, options, selected),

            MultiSelectMessage::Remove(value) => {
                tracing::debug!(value = %value, "multi-select remove");
                Update {
                    change: Some(selection::remove(selected, &value)),
                    task: Task::none(),
                }
            }

            MultiSelectMessage::Clear => {
                tracing::debug!(previous = selected.len(), "multi-select clear");
                Update {
                    change: Some(selection::clear()),
                    task: Task::none(),
                }
            }

            MultiSelectMessage::ScrollStrip(generation) => {
                if generation != self.scroll_generation {
                    return Update::none();
                }
                self.pending_scroll = None;
                Update::task(scrollable::snap_to(
                    self.strip_id.clone(),
                    RelativeOffset::END,
                ))
            }
        }
    }

    /// Opens the popover and focuses the search input.
    fn open(&mut self) -> Task<MultiSelectMessage> {
        self.open = true;
        tracing::debug!("multi-select opened");
        widget::text_input::focus(self.search_id.clone())
    }

    /// Closes the popover and resets the search.
    fn close(&mut self) {
        if self.open {
            tracing::debug!("multi-select closed");
        }
        self.open = false;
        self.search.clear();
    }

    fn toggle(
        &mut self,
        value: &str,
        options: &[SelectOption],
        selected: &[OptionValue],
    ) -> Update {
        let next = selection::toggle(selected, value);
        tracing::debug!(value, selected = next.len(), "multi-select toggle");

        // Only the summary mode renders a strip to scroll.
        let labels = selection::selected_options(options, &next).len();
        let task = if DisplayMode::of(labels, self.display_limit).has_strip() {
            self.schedule_scroll()
        } else {
            self.pending_scroll = None;
            Task::none()
        };

        Update {
            change: Some(next),
            task,
        }
    }

    /// Schedules a scroll of the label strip to its right edge.
    ///
    /// A previously scheduled scroll is aborted when its handle is replaced.
    fn schedule_scroll(&mut self) -> Task<MultiSelectMessage> {
        self.scroll_generation = self.scroll_generation.wrapping_add(1);
        let generation = self.scroll_generation;
        let delay = self.scroll_delay;

        let (task, handle) = Task::future(async move {
            tokio::time::sleep(delay).await;
            MultiSelectMessage::ScrollStrip(generation)
        })
        .abortable();

        self.pending_scroll = Some(handle.abort_on_drop());
        task
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "Apple"),
            SelectOption::new("b", "Banana"),
            SelectOption::new("c", "Cherry"),
        ]
    }

    fn values(items: &[&str]) -> Vec<OptionValue> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_state() {
        let state = MultiSelectState::new();
        assert!(!state.is_open());
        assert!(state.search().is_empty());
        assert_eq!(state.display_limit(), DEFAULT_DISPLAY_LIMIT);
        assert_eq!(state.scroll_delay, DEFAULT_SCROLL_DELAY);
        assert_eq!(state.scroll_generation, 0);
    }

    #[test]
    fn test_toggle_open_and_close() {
        let options = fruits();
        let mut state = MultiSelectState::new();

        let update = state.update(MultiSelectMessage::ToggleOpen, &options, &[]);
        assert!(update.change.is_none());
        assert!(state.is_open());

        let update = state.update(MultiSelectMessage::ToggleOpen, &options, &[]);
        assert!(update.change.is_none());
        assert!(!state.is_open());
    }

    #[test]
    fn test_close_resets_search() {
        let options = fruits();
        let mut state = MultiSelectState::new();

        let _ = state.update(MultiSelectMessage::ToggleOpen, &options, &[]);
        let _ = state.update(
            MultiSelectMessage::SearchChanged("ban".into()),
            &options,
            &[],
        );
        assert_eq!(state.search(), "ban");
        assert_eq!(state.visible_options(&options).len(), 1);

        let _ = state.update(MultiSelectMessage::Close, &options, &[]);
        assert!(!state.is_open());
        assert!(state.search().is_empty());
        assert_eq!(state.visible_options(&options).len(), 3);
    }

    #[test]
    fn test_toggle_proposes_without_mutating() {
        let options = fruits();
        let selected = values(&["a"]);
        let mut state = MultiSelectState::new();

        let update = state.update(MultiSelectMessage::Toggle("b".into()), &options, &selected);
        assert_eq!(update.change, Some(values(&["a", "b"])));
        assert_eq!(selected, values(&["a"]));

        let update = state.update(MultiSelectMessage::Toggle("a".into()), &options, &selected);
        assert_eq!(update.change, Some(values(&[])));
    }

    #[test]
    fn test_remove_and_clear() {
        let options = fruits();
        let selected = values(&["a", "b", "c"]);
        let mut state = MultiSelectState::new();

        let update = state.update(MultiSelectMessage::Remove("b".into()), &options, &selected);
        assert_eq!(update.change, Some(values(&["a", "c"])));

        let update = state.update(MultiSelectMessage::Clear, &options, &selected);
        assert_eq!(update.change, Some(Vec::new()));

        let update = state.update(MultiSelectMessage::Clear, &options, &[]);
        assert_eq!(update.change, Some(Vec::new()));
    }

    #[test]
    fn test_remove_does_not_toggle_popover() {
        let options = fruits();
        let selected = values(&["a"]);
        let mut state = MultiSelectState::new();

        let _ = state.update(MultiSelectMessage::Remove("a".into()), &options, &selected);
        assert!(!state.is_open());
    }

    #[test]
    fn test_walkthrough() {
        let options = fruits();
        let mut state = MultiSelectState::new();
        let mut selected = values(&["a"]);

        let update = state.update(MultiSelectMessage::Toggle("b".into()), &options, &selected);
        selected = update.change.unwrap();
        assert_eq!(selected, values(&["a", "b"]));

        let update = state.update(MultiSelectMessage::Remove("a".into()), &options, &selected);
        selected = update.change.unwrap();
        assert_eq!(selected, values(&["b"]));

        let update = state.update(MultiSelectMessage::Clear, &options, &selected);
        assert_eq!(update.change.unwrap(), Vec::<OptionValue>::new());
    }

    #[test]
    fn test_submit_toggles_first_match() {
        let options = fruits();
        let mut state = MultiSelectState::new();

        let _ = state.update(
            MultiSelectMessage::SearchChanged("err".into()),
            &options,
            &[],
        );
        let update = state.update(MultiSelectMessage::SubmitSearch, &options, &[]);
        assert_eq!(update.change, Some(values(&["c"])));

        let _ = state.update(
            MultiSelectMessage::SearchChanged("kiwi".into()),
            &options,
            &[],
        );
        let update = state.update(MultiSelectMessage::SubmitSearch, &options, &[]);
        assert!(update.change.is_none());
    }

    #[test]
    fn test_toggle_into_summary_schedules_scroll() {
        let options = fruits();
        let mut state = MultiSelectState::new();

        // One label stays in badge mode; there is no strip to scroll.
        let _ = state.update(MultiSelectMessage::Toggle("a".into()), &options, &[]);
        assert_eq!(state.scroll_generation, 0);
        assert!(state.pending_scroll.is_none());

        let selected = values(&["a"]);
        let _ = state.update(MultiSelectMessage::Toggle("b".into()), &options, &selected);
        assert_eq!(state.scroll_generation, 1);
        assert!(state.pending_scroll.is_some());

        // Remove and clear do not scroll.
        let _ = state.update(MultiSelectMessage::Clear, &options, &selected);
        assert_eq!(state.scroll_generation, 1);
    }

    #[test]
    fn test_display_limit_gates_scroll() {
        let options = fruits();
        let mut state = MultiSelectState::new().with_display_limit(2);
        assert_eq!(state.display_limit(), 2);

        let selected = values(&["a"]);
        let _ = state.update(MultiSelectMessage::Toggle("b".into()), &options, &selected);
        assert_eq!(state.scroll_generation, 0);

        let selected = values(&["a", "b"]);
        let _ = state.update(MultiSelectMessage::Toggle("c".into()), &options, &selected);
        assert_eq!(state.scroll_generation, 1);

        // Unknown values contribute no label and never reach the summary.
        state.set_display_limit(1);
        let ghosts = values(&["x"]);
        let _ = state.update(MultiSelectMessage::Toggle("y".into()), &options, &ghosts);
        assert_eq!(state.scroll_generation, 1);
    }

    #[test]
    fn test_leaving_summary_drops_pending_scroll() {
        let options = fruits();
        let mut state = MultiSelectState::new();

        let selected = values(&["a"]);
        let _ = state.update(MultiSelectMessage::Toggle("b".into()), &options, &selected);
        assert!(state.pending_scroll.is_some());

        let selected = values(&["a", "b"]);
        let _ = state.update(MultiSelectMessage::Toggle("b".into()), &options, &selected);
        assert!(state.pending_scroll.is_none());
    }

    #[test]
    fn test_stale_scroll_is_ignored() {
        let options = fruits();
        let mut state = MultiSelectState::new().with_scroll_delay(Duration::from_millis(50));
        assert_eq!(state.scroll_delay, Duration::from_millis(50));

        let _ = state.update(
            MultiSelectMessage::Toggle("b".into()),
            &options,
            &values(&["a"]),
        );
        let _ = state.update(
            MultiSelectMessage::Toggle("c".into()),
            &options,
            &values(&["a", "b"]),
        );
        assert_eq!(state.scroll_generation, 2);
        assert!(state.pending_scroll.is_some());

        let update = state.update(MultiSelectMessage::ScrollStrip(1), &options, &[]);
        assert!(update.change.is_none());
        assert!(state.pending_scroll.is_some());

        let update = state.update(MultiSelectMessage::ScrollStrip(2), &options, &[]);
        assert!(update.change.is_none());
        assert!(state.pending_scroll.is_none());
    }
}
