//! Settings page: theme selection.
//!
//! Saving only rewrites the `theme` key; the new theme is picked up by the
//! next startup, which the reload button triggers.

use std::sync::Arc;

use economia_core::{ConfigStore, PageError, ThemeManager};
use iced::widget::{Space, button, column, container, pick_list, row, text};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use crate::app::Message;
use crate::pages::PageMessage;
use crate::style::{self, buttons};
use crate::theme::Chrome;

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    ThemeSelected(String),
    Save,
}

pub struct SettingsPage {
    store: Arc<dyn ConfigStore>,
    options: Vec<String>,
    saved: String,
    selected: String,
    status: Option<String>,
}

impl SettingsPage {
    pub fn new(store: Arc<dyn ConfigStore>) -> Result<Self, PageError> {
        let config = store
            .load()
            .map_err(|e| PageError::new(format!("No se pudo leer la configuración: {}", e)))?;

        Ok(Self {
            store,
            options: ThemeManager::theme_names().map(str::to_string).collect(),
            saved: config.theme.clone(),
            selected: config.theme,
            status: None,
        })
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn update(&mut self, message: SettingsMessage) {
        match message {
            SettingsMessage::ThemeSelected(name) => {
                self.selected = name;
                self.status = None;
            }
            SettingsMessage::Save => {
                self.status = Some(match self.save() {
                    Ok(()) => "Tema guardado. Recargue la aplicación para aplicarlo.".to_string(),
                    Err(e) => {
                        tracing::error!("Failed to save theme: {}", e);
                        format!("Error guardando el tema: {}", e)
                    }
                });
            }
        }
    }

    /// Writes the selected theme, keeping every other config key.
    fn save(&mut self) -> Result<(), economia_core::ConfigError> {
        let mut config = self.store.load()?;
        config.theme = self.selected.clone();
        self.store.save(&config)?;
        tracing::info!(theme = %self.selected, "Theme saved");
        self.saved = self.selected.clone();
        Ok(())
    }

    pub fn view<'a>(&'a self, chrome: &Chrome, active_theme: &'a str) -> Element<'a, Message> {
        let accent = chrome.accent;
        let hover = style::darken(accent, 0.15);

        let picker = pick_list(self.options.as_slice(), Some(&self.selected), |name| {
            Message::Page(PageMessage::Settings(SettingsMessage::ThemeSelected(name)))
        })
        .width(Length::Fixed(220.0))
        .padding(Padding::from([6, 10]));

        let save_btn = button(text("Guardar").size(13).color(Color::WHITE))
            .padding(Padding::from([8, 20]))
            .style(move |_: &Theme, status: button::Status| button::Style {
                background: Some(Background::Color(match status {
                    button::Status::Hovered | button::Status::Pressed => hover,
                    _ => accent,
                })),
                text_color: Color::WHITE,
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .on_press_maybe(
                (self.selected != self.saved)
                    .then_some(Message::Page(PageMessage::Settings(SettingsMessage::Save))),
            );

        let reload_btn = button(text("🔄 Recargar").size(13).color(Color::WHITE))
            .padding(Padding::from([8, 20]))
            .style(|_: &Theme, status: button::Status| button::Style {
                background: Some(Background::Color(match status {
                    button::Status::Hovered | button::Status::Pressed => buttons::RELOAD_HOVER,
                    _ => buttons::RELOAD,
                })),
                text_color: Color::WHITE,
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .on_press(Message::RequestReload);

        let status: Element<'a, Message> = match &self.status {
            Some(status) => text(status.as_str()).size(12).color(chrome.muted).into(),
            None => Space::with_height(0).into(),
        };

        let panel = chrome.panel;
        let border = chrome.border;

        container(
            column![
                text("Tema").size(15).color(chrome.foreground),
                text(format!("Tema en uso: {}", active_theme))
                    .size(12)
                    .color(chrome.muted),
                Space::with_height(8),
                row![picker, save_btn, reload_btn]
                    .spacing(12)
                    .align_y(iced::Alignment::Center),
                status,
            ]
            .spacing(6),
        )
        .padding(Padding::from([16, 20]))
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(panel)),
            border: Border {
                color: border,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        })
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use economia_core::{AppConfig, MemoryConfigStore};

    fn store_with_extra() -> Arc<MemoryConfigStore> {
        let config = AppConfig::from_toml("theme = \"solar\"\ncurrency = \"EUR\"\n").unwrap();
        Arc::new(MemoryConfigStore::with_config(config))
    }

    #[test]
    fn test_starts_from_saved_theme() {
        let store = Arc::new(MemoryConfigStore::new());
        let page = SettingsPage::new(store).unwrap();
        assert_eq!(page.selected(), "solar");
        assert!(page.status().is_none());
    }

    #[test]
    fn test_save_writes_only_theme() {
        let store = store_with_extra();
        let mut page = SettingsPage::new(store.clone()).unwrap();

        page.update(SettingsMessage::ThemeSelected("darkly".to_string()));
        page.update(SettingsMessage::Save);

        let config = store.load().unwrap();
        assert_eq!(config.theme, "darkly");
        assert_eq!(config.extra["currency"].as_str(), Some("EUR"));
        assert_eq!(store.save_count(), 1);
        assert!(page.status().unwrap().contains("Recargue"));
    }

    #[test]
    fn test_selection_alone_writes_nothing() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut page = SettingsPage::new(store.clone()).unwrap();

        page.update(SettingsMessage::ThemeSelected("flatly".to_string()));

        assert_eq!(page.selected(), "flatly");
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.load().unwrap().theme, "solar");
    }
}
