use std::sync::Arc;

use economia_core::{
    ConfigStore, CoreError, EventBus, FileConfigStore, ResolvedTheme, Shell, StyleSheet,
    ThemeManager,
};
use iced::{Subscription, Task, keyboard, window};

pub mod messages;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use types::*;

use crate::pages::{self, PageView};
use crate::theme::{Chrome, iced_theme};

pub const WINDOW_TITLE: &str = "📱 Sistema de Economía v3.2 - Moderno";

pub struct App {
    pub shell: Shell<PageView>,
    pub style: StyleSheet,
    pub chrome: Chrome,
    pub dialog: Option<Dialog>,
    theme: iced::Theme,
}

impl App {
    /// Builds the window state around an already resolved theme and mounts
    /// the default page.
    pub fn new(store: Arc<dyn ConfigStore>, resolved: ResolvedTheme) -> (Self, Task<Message>) {
        let (shell, initial) =
            Shell::initialize(pages::registry(store), &resolved, EventBus::new());

        let dialog = match initial {
            Err(CoreError::PageConstruction { source, .. }) => Some(Dialog::Error {
                message: format!("Error cargando página:\n{}", source),
            }),
            _ => None,
        };

        let app = Self {
            chrome: Chrome::new(shell.colors(), &resolved.style.palette),
            theme: iced_theme(&resolved.style),
            style: resolved.style,
            shell,
            dialog,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    pub fn theme(&self) -> iced::Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::RequestExit),
            _ => None,
        });

        Subscription::batch([
            keyboard_sub,
            window::close_requests().map(|_| Message::RequestExit),
        ])
    }
}

/// Errors that prevent the window from starting.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Window error: {0}")]
    Iced(#[from] iced::Error),
}

/// Resolves the theme, then opens the window and runs the event loop until
/// the user confirms exit.
pub fn run(flags: Flags) -> Result<(), UiError> {
    let file_store = match flags.config {
        Some(path) => FileConfigStore::new(path),
        None => FileConfigStore::default_location().map_err(CoreError::from)?,
    };
    tracing::debug!(path = %file_store.path().display(), "Using config file");

    let mut themes =
        ThemeManager::with_custom_themes(ThemeManager::custom_themes_path(file_store.dir()));
    let resolved = themes.resolve(&file_store)?;
    if resolved.corrected {
        tracing::info!(theme = %resolved.name(), "Stored theme was invalid, reset to default");
    }

    let store: Arc<dyn ConfigStore> = Arc::new(file_store);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(iced::Size::new(1500.0, 900.0))
        .exit_on_close_request(false)
        .antialiasing(true)
        .run_with(move || App::new(store, resolved))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use economia_core::{AppConfig, MemoryConfigStore, PageId};

    pub(crate) fn test_app(theme: &str) -> (App, Arc<MemoryConfigStore>) {
        let store = Arc::new(MemoryConfigStore::with_config(AppConfig {
            theme: theme.to_string(),
            ..AppConfig::default()
        }));
        let resolved = ThemeManager::new().resolve(store.as_ref()).unwrap();
        let (app, _) = App::new(store.clone(), resolved);
        (app, store)
    }

    #[test]
    fn test_startup_mounts_compras() {
        let (app, _) = test_app("darkly");
        assert_eq!(app.shell.current_page_id(), Some(PageId::Compras));
        assert_eq!(app.shell.theme_name(), "darkly");
        assert!(app.dialog.is_none());
        assert_eq!(app.title(), WINDOW_TITLE);
    }

    #[test]
    fn test_startup_corrects_invalid_theme() {
        let (app, store) = test_app("not-a-real-theme");
        assert_eq!(app.shell.theme_name(), "solar");
        assert_eq!(store.load().unwrap().theme, "solar");
        assert_eq!(app.theme().to_string(), "solar");
    }
}
