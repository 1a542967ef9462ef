// SPDX-License-Identifier: MPL-2.0

use crate::catalog;
use crate::config::{Config, MAX_DISPLAY_LIMIT};
use crate::error::{Error, Result};
use crate::fl;
use crate::pages;
use crate::widgets::{MultiSelectMessage, MultiSelectState, OptionValue, SelectOption};
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::{Length, Subscription};
use cosmic::prelude::*;
use cosmic::widget::{self, about::About, icon, menu, nav_bar};
use std::collections::HashMap;

const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");
const APP_ICON: &[u8] = include_bytes!("../resources/icons/hicolor/scalable/apps/icon.svg");

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// The about page for this app.
    about: About,
    /// Contains items assigned to the nav bar panel.
    nav: nav_bar::Model,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Configuration data that persists between application runs.
    /// Holds the applied selections of both pickers.
    pub config: Config,
    /// Cosmic config context for saving
    config_context: Option<cosmic_config::Config>,

    // === Pickers ===
    /// Options of the fruits picker
    pub fruits: Vec<SelectOption>,
    /// Options of the tags picker
    pub tags: Vec<SelectOption>,
    /// UI state of the fruits picker
    pub fruits_picker: MultiSelectState,
    /// UI state of the tags picker
    pub tags_picker: MultiSelectState,

    // === Settings ===
    /// Placeholder text being edited (before saving)
    pub placeholder_input: String,
    /// Outcome of the last settings change
    pub settings_status: SettingsStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SettingsStatus {
    #[default]
    Idle,
    Saved,
    Error(String),
}

/// Identifies one of the pickers on the picker page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picker {
    Fruits,
    Tags,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation & UI
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(Config),

    // Pickers
    Picker(Picker, MultiSelectMessage),

    // Settings
    PlaceholderChanged(String),
    SavePlaceholder,
    SetDisplayLimit(usize),
    SetScrollDelay(u64),
    ResetSelections,
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "dev.mmurphy.Multiselect";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create a nav bar with two pages: Picker and Settings
        let mut nav = nav_bar::Model::default();

        nav.insert()
            .text(fl!("picker"))
            .data::<Page>(Page::Picker)
            .icon(icon::from_name("view-list-symbolic"))
            .activate();

        nav.insert()
            .text(fl!("settings"))
            .data::<Page>(Page::Settings)
            .icon(icon::from_name("preferences-system-symbolic"));

        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("CARGO_PKG_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let config_context = match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
            Ok(context) => Some(context),
            Err(error) => {
                tracing::warn!(%error, "config store unavailable, settings will not persist");
                None
            }
        };
        let config = config_context
            .as_ref()
            .map(Config::load)
            .unwrap_or_default();

        let picker_state = || {
            MultiSelectState::new()
                .with_display_limit(config.display_limit())
                .with_scroll_delay(config.scroll_delay())
        };
        let fruits_picker = picker_state();
        let tags_picker = picker_state();

        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            nav,
            key_binds: HashMap::new(),
            placeholder_input: config.placeholder.clone(),
            config,
            config_context,
            fruits: catalog::fruits(),
            tags: catalog::tags(),
            fruits_picker,
            tags_picker,
            settings_status: SettingsStatus::Idle,
        };

        // Create a startup command that sets the window title.
        let command = app.update_title();

        (app, command)
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![menu::Item::Button(fl!("about"), None, MenuAction::About)],
            ),
        )]);

        vec![menu_bar.into()]
    }

    /// Enables the COSMIC application to create a nav bar with this model.
    fn nav_model(&self) -> Option<&nav_bar::Model> {
        Some(&self.nav)
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match &self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let space_s = cosmic::theme::spacing().space_s;
        let space_m = cosmic::theme::spacing().space_m;

        let page_content: Element<_> =
            match self.nav.active_data::<Page>().unwrap_or(&Page::Picker) {
                Page::Picker => pages::picker::view(self, space_s, space_m),
                Page::Settings => pages::settings::view(self, space_s, space_m),
            };

        widget::container(page_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(space_m)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        // Watch for application configuration changes.
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }

            Message::UpdateConfig(config) => {
                if config.placeholder != self.config.placeholder {
                    self.placeholder_input = config.placeholder.clone();
                }
                self.config = config;
                self.apply_picker_config();
            }

            Message::LaunchUrl(url) => {
                if let Err(error) = launch(url) {
                    tracing::error!(%error, "failed to launch url");
                }
            }

            Message::Picker(picker, msg) => return self.handle_picker(picker, msg),

            Message::PlaceholderChanged(text) => {
                self.placeholder_input = text;
            }

            Message::SavePlaceholder => {
                self.config.placeholder = self.placeholder_input.trim().to_string();
                self.persist();
            }

            Message::SetDisplayLimit(limit) => {
                self.config.display_limit = limit.clamp(1, MAX_DISPLAY_LIMIT);
                self.apply_picker_config();
                self.persist();
            }

            Message::SetScrollDelay(delay_ms) => {
                self.config.scroll_delay_ms = delay_ms;
                self.apply_picker_config();
                self.persist();
            }

            Message::ResetSelections => {
                self.config.reset_selections();
                self.persist();
            }
        }
        Task::none()
    }

    /// Called when a nav item is selected.
    fn on_nav_select(&mut self, id: nav_bar::Id) -> Task<cosmic::Action<Self::Message>> {
        self.nav.activate(id);
        self.update_title()
    }
}

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let window_title = window_title(self.nav.text(self.nav.active()));

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    /// Returns the options and applied selection of a picker.
    pub fn picker_data(
        &self,
        picker: Picker,
    ) -> (&MultiSelectState, &[SelectOption], &[OptionValue]) {
        match picker {
            Picker::Fruits => (
                &self.fruits_picker,
                self.fruits.as_slice(),
                self.config.fruits.as_slice(),
            ),
            Picker::Tags => (
                &self.tags_picker,
                self.tags.as_slice(),
                self.config.tags.as_slice(),
            ),
        }
    }

    /// Handles picker messages and applies proposed selections.
    fn handle_picker(
        &mut self,
        picker: Picker,
        msg: MultiSelectMessage,
    ) -> Task<cosmic::Action<Message>> {
        let (state, options, selected) = match picker {
            Picker::Fruits => (&mut self.fruits_picker, &self.fruits, &mut self.config.fruits),
            Picker::Tags => (&mut self.tags_picker, &self.tags, &mut self.config.tags),
        };

        let update = state.update(msg, options, selected.as_slice());

        if let Some(next) = update.change {
            tracing::debug!(?picker, selected = ?next, "applying selection");
            *selected = next;
            self.persist();
        }

        update
            .task
            .map(move |msg| cosmic::Action::App(Message::Picker(picker, msg)))
    }

    /// Pushes the configured display limit and scroll delay into both pickers.
    fn apply_picker_config(&mut self) {
        let limit = self.config.display_limit();
        let delay = self.config.scroll_delay();
        for state in [&mut self.fruits_picker, &mut self.tags_picker] {
            state.set_display_limit(limit);
            state.set_scroll_delay(delay);
        }
    }

    /// Writes the configuration and records the outcome.
    fn persist(&mut self) {
        self.settings_status = match self.save_config() {
            Ok(()) => SettingsStatus::Saved,
            Err(error) => {
                tracing::error!(%error, "failed to save config");
                SettingsStatus::Error(error.to_string())
            }
        };
    }

    fn save_config(&self) -> Result<()> {
        let context = self.config_context.as_ref().ok_or(Error::NoConfigStore)?;
        self.config.save(context)
    }
}

/// Joins the app title and the active page name.
fn window_title(page: Option<&str>) -> String {
    let mut title = fl!("app-title");
    if let Some(page) = page {
        title.push_str(" - ");
        title.push_str(page);
    }
    title
}

/// Opens a URL with the desktop's default handler.
fn launch(url: String) -> Result<()> {
    open::that_detached(&url).map_err(|source| Error::Launch { url, source })
}

/// The page to display in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Picker,
    Settings,
}

/// The context page to display in the context drawer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
    About,
}

impl menu::action::MenuAction for MenuAction {
    type Message = Message;

    fn message(&self) -> Self::Message {
        match self {
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
        }
    }
}
