//! Fixed metrics and colors for the shell chrome.

use iced::Color;

/// Sidebar layout.
pub struct SidebarStyle {
    pub width: f32,
    pub button_width: f32,
    pub button_padding: [u16; 2],
    pub button_spacing: f32,
    pub text_size: f32,
}

impl Default for SidebarStyle {
    fn default() -> Self {
        Self {
            width: 280.0,
            button_width: 240.0,
            button_padding: [8, 12],
            button_spacing: 5.0,
            text_size: 13.0,
        }
    }
}

/// Bottom sidebar buttons keep their own colors whatever the theme.
pub mod buttons {
    use iced::Color;

    pub const RELOAD: Color = Color::from_rgb(0.090, 0.635, 0.722);
    pub const RELOAD_HOVER: Color = Color::from_rgb(0.075, 0.518, 0.588);
    pub const EXIT: Color = Color::from_rgb(0.863, 0.208, 0.271);
    pub const EXIT_HOVER: Color = Color::from_rgb(0.784, 0.137, 0.200);
}

/// Backdrop behind modal dialogs.
pub const OVERLAY: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);

/// Darker shade used for hover/pressed states.
pub fn darken(color: Color, amount: f32) -> Color {
    let f = 1.0 - amount.clamp(0.0, 1.0);
    Color::from_rgba(color.r * f, color.g * f, color.b * f, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken() {
        let c = darken(Color::from_rgb(1.0, 0.5, 0.0), 0.2);
        assert!((c.r - 0.8).abs() < 1e-6);
        assert!((c.g - 0.4).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_default_sidebar_width() {
        let sidebar = SidebarStyle::default();
        assert_eq!(sidebar.width, 280.0);
        // Buttons sit inside 10px of horizontal padding on each side
        assert!(sidebar.button_width <= sidebar.width - 20.0);
    }
}
