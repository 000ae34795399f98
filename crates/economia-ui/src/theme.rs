//! Turns the resolved core palette into iced colors and an iced theme.

use economia_core::{Palette, ShellColors, StyleSheet};
use iced::Color;

/// Converts to iced Color.
pub fn to_iced(color: economia_core::Color) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Every color the chrome paints with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chrome {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub panel: Color,
    pub border: Color,
    pub muted: Color,
    pub menu_button: Color,
    pub primary: Color,
    pub danger: Color,
}

impl Chrome {
    /// The three shell colors plus the rest of the palette.
    pub fn new(colors: ShellColors, palette: &Palette) -> Self {
        Self {
            background: to_iced(colors.background),
            foreground: to_iced(colors.foreground),
            accent: to_iced(colors.accent),
            panel: to_iced(colors.background.mix(colors.foreground, 0.06)),
            border: to_iced(palette.border),
            muted: to_iced(colors.foreground.mix(colors.background, 0.4)),
            menu_button: to_iced(palette.menu_button),
            primary: to_iced(palette.primary),
            danger: to_iced(palette.danger),
        }
    }
}

/// Builds the iced theme named after the resolved theme.
pub fn iced_theme(style: &StyleSheet) -> iced::Theme {
    let palette = &style.palette;
    iced::Theme::custom(
        style.theme_name.clone(),
        iced::theme::Palette {
            background: to_iced(palette.background),
            text: to_iced(palette.foreground),
            primary: to_iced(palette.primary),
            success: to_iced(palette.success),
            danger: to_iced(palette.danger),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use economia_core::{MemoryConfigStore, ThemeManager, ThemeOverride};

    #[test]
    fn test_chrome_uses_shell_colors() {
        let mut themes = ThemeManager::new();
        themes.register_override(
            "solar",
            ThemeOverride {
                accent: Some(economia_core::Color::from_hex("#ff8800").unwrap()),
                ..ThemeOverride::default()
            },
        );
        let style = StyleSheet::default();
        let chrome = Chrome::new(themes.derive_colors("solar"), &style.palette);

        assert_eq!(chrome.accent, Color::from_rgb(1.0, 136.0 / 255.0, 0.0));
        assert_eq!(chrome.background, to_iced(style.palette.background));
    }

    #[test]
    fn test_chrome_danger_follows_override() {
        let mut themes = ThemeManager::new();
        themes.register_override(
            "solar",
            ThemeOverride {
                danger: Some(economia_core::Color::from_hex("#ff0000").unwrap()),
                ..ThemeOverride::default()
            },
        );
        let resolved = themes.resolve(&MemoryConfigStore::new()).unwrap();
        let chrome = Chrome::new(resolved.colors(), &resolved.style.palette);

        assert_eq!(chrome.danger, Color::from_rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_iced_theme_named_after_style() {
        let style = StyleSheet::default();
        assert_eq!(iced_theme(&style).to_string(), "solar");
    }
}
