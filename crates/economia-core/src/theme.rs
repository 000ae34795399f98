//! Theme catalog, custom overrides and startup theme resolution.
//!
//! ## Layering
//!
//! A theme is resolved in three steps:
//! ```rust,ignore
//! let mut style = StyleSheet::default();
//! themes.configure_base_styles(&mut style, "solar");      // base palette
//! themes.apply_override(&mut style, &custom["solar"]);    // user overrides
//! let colors = style.colors();                            // bg / fg / accent
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::CoreResult;
use crate::config::ConfigStore;

/// Theme used when the configured one is not recognised.
pub const DEFAULT_THEME: &str = "solar";

/// Color representation.
///
/// Serialized as a `#rrggbb` string so custom theme files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ThemeError> {
        let digits = hex.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(ThemeError::InvalidColor(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ThemeError::InvalidColor(hex.to_string()))
        };

        let a = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Formats as `#rrggbb`, with an alpha byte only when not opaque.
    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        } else {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        }
    }

    /// Linear blend towards `other` by `t` (0.0 = self, 1.0 = other).
    pub fn mix(&self, other: Color, t: f32) -> Self {
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        Self::rgba(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            lerp(self.a, other.a),
        )
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Full palette of a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub primary: Color,
    pub success: Color,
    pub danger: Color,
    pub border: Color,
    pub menu_button: Color,
}

/// The three colors the shell chrome is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellColors {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
}

/// Mutable style state that base palettes and overrides are written into.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub theme_name: String,
    pub is_dark: bool,
    pub palette: Palette,
}

impl StyleSheet {
    pub fn colors(&self) -> ShellColors {
        ShellColors {
            background: self.palette.background,
            foreground: self.palette.foreground,
            accent: self.palette.accent,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        let base = builtin(DEFAULT_THEME).unwrap_or(&BUILTIN_THEMES[0]);
        Self {
            theme_name: base.name.to_string(),
            is_dark: base.dark,
            palette: base.palette(),
        }
    }
}

/// User-defined replacement colors for a theme. Unset fields keep the
/// base value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverride {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub accent: Option<Color>,
    pub primary: Option<Color>,
    pub success: Option<Color>,
    pub danger: Option<Color>,
    pub border: Option<Color>,
    pub menu_button: Option<Color>,
}

impl ThemeOverride {
    fn apply_to(&self, palette: &mut Palette) {
        let fields = [
            (self.background, &mut palette.background),
            (self.foreground, &mut palette.foreground),
            (self.accent, &mut palette.accent),
            (self.primary, &mut palette.primary),
            (self.success, &mut palette.success),
            (self.danger, &mut palette.danger),
            (self.border, &mut palette.border),
            (self.menu_button, &mut palette.menu_button),
        ];
        for (value, slot) in fields {
            if let Some(color) = value {
                *slot = color;
            }
        }
    }
}

struct BuiltinTheme {
    name: &'static str,
    dark: bool,
    background: &'static str,
    foreground: &'static str,
    primary: &'static str,
    success: &'static str,
    danger: &'static str,
    info: &'static str,
}

impl BuiltinTheme {
    fn palette(&self) -> Palette {
        // Table entries are literals checked by `test_builtin_palettes_parse`.
        let hex = |s: &str| Color::from_hex(s).unwrap_or(Color::rgb(0.5, 0.5, 0.5));
        let background = hex(self.background);
        let foreground = hex(self.foreground);
        let border = if self.dark {
            background.mix(foreground, 0.2)
        } else {
            hex("#ced4da")
        };

        Palette {
            background,
            foreground,
            accent: hex(self.info),
            primary: hex(self.primary),
            success: hex(self.success),
            danger: hex(self.danger),
            border,
            menu_button: hex("#007bff"),
        }
    }
}

macro_rules! theme {
    ($name:literal, $dark:literal, $bg:literal, $fg:literal, $primary:literal, $success:literal, $danger:literal, $info:literal) => {
        BuiltinTheme {
            name: $name,
            dark: $dark,
            background: $bg,
            foreground: $fg,
            primary: $primary,
            success: $success,
            danger: $danger,
            info: $info,
        }
    };
}

static BUILTIN_THEMES: [BuiltinTheme; 18] = [
    theme!("cosmo", false, "#ffffff", "#373a3c", "#2780e3", "#3fb618", "#ff0039", "#9954bb"),
    theme!("flatly", false, "#ffffff", "#212529", "#2c3e50", "#18bc9c", "#e74c3c", "#3498db"),
    theme!("litera", false, "#ffffff", "#343a40", "#4582ec", "#02b875", "#d9534f", "#17a2b8"),
    theme!("minty", false, "#ffffff", "#5a5a5a", "#78c2ad", "#56cc9d", "#ff7851", "#6cc3d5"),
    theme!("lumen", false, "#ffffff", "#555555", "#158cba", "#28b62c", "#ff4136", "#75caeb"),
    theme!("sandstone", false, "#ffffff", "#3e3f3a", "#325d88", "#93c54b", "#d9534f", "#29abe0"),
    theme!("yeti", false, "#ffffff", "#222222", "#008cba", "#43ac6a", "#f04124", "#5bc0de"),
    theme!("pulse", false, "#ffffff", "#444444", "#593196", "#13b955", "#fc3939", "#009cdc"),
    theme!("united", false, "#ffffff", "#333333", "#e95420", "#38b44a", "#df382c", "#17a2b8"),
    theme!("morph", false, "#d9e3f1", "#7b8ab8", "#378dfc", "#43cc29", "#e52527", "#5b62f4"),
    theme!("journal", false, "#ffffff", "#222222", "#eb6864", "#22b24c", "#f57a00", "#336699"),
    theme!("simplex", false, "#ffffff", "#212529", "#d9230f", "#469408", "#9b479f", "#029acf"),
    theme!("cerulean", false, "#ffffff", "#495057", "#2fa4e7", "#73a839", "#c71c22", "#033c73"),
    theme!("darkly", true, "#222222", "#ffffff", "#375a7f", "#00bc8c", "#e74c3c", "#3498db"),
    theme!("superhero", true, "#2b3e50", "#ffffff", "#4c9be8", "#5cb85c", "#d9534f", "#5bc0de"),
    theme!("solar", true, "#002b36", "#ffffff", "#bc951a", "#44aca4", "#d95092", "#3f98d7"),
    theme!("cyborg", true, "#060606", "#ffffff", "#2a9fd6", "#77b300", "#cc0000", "#9933cc"),
    theme!("vapor", true, "#190831", "#32fbe2", "#6e40c9", "#3cf281", "#e44c55", "#1ba2f6"),
];

fn builtin(name: &str) -> Option<&'static BuiltinTheme> {
    BUILTIN_THEMES.iter().find(|t| t.name == name)
}

/// Outcome of startup theme resolution.
#[derive(Debug, Clone)]
pub struct ResolvedTheme {
    /// Base palette with custom overrides applied
    pub style: StyleSheet,
    /// Whether the stored theme had to be replaced by the default
    pub corrected: bool,
}

impl ResolvedTheme {
    pub fn name(&self) -> &str {
        &self.style.theme_name
    }

    pub fn colors(&self) -> ShellColors {
        self.style.colors()
    }
}

/// Validates theme names, builds palettes and manages custom overrides.
#[derive(Debug, Default)]
pub struct ThemeManager {
    custom_path: Option<PathBuf>,
    overrides: HashMap<String, ThemeOverride>,
}

impl ThemeManager {
    /// Manager with only the built-in themes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager that reads custom overrides from a JSON file.
    pub fn with_custom_themes(path: impl Into<PathBuf>) -> Self {
        Self {
            custom_path: Some(path.into()),
            overrides: HashMap::new(),
        }
    }

    /// Default custom themes file next to a config directory.
    pub fn custom_themes_path(config_dir: &Path) -> PathBuf {
        config_dir.join("custom_themes.json")
    }

    /// Names of all built-in themes, light ones first.
    pub fn theme_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_THEMES.iter().map(|t| t.name)
    }

    pub fn is_valid_theme(&self, name: &str) -> bool {
        builtin(name).is_some()
    }

    /// Registers an override in memory, replacing any loaded one.
    pub fn register_override(&mut self, name: impl Into<String>, patch: ThemeOverride) {
        self.overrides.insert(name.into(), patch);
    }

    /// Reads the custom theme file. A missing file means no overrides.
    ///
    /// Entries are parsed one by one: a bad entry is logged and skipped, the
    /// rest still load. Only a file that is not a JSON object is an error.
    pub fn load_custom_theme_overrides(&self) -> Result<HashMap<String, ThemeOverride>, ThemeError> {
        let Some(path) = &self.custom_path else {
            return Ok(HashMap::new());
        };
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(path)?;
        let entries: HashMap<String, serde_json::Value> = serde_json::from_str(&content)?;

        let mut overrides = HashMap::with_capacity(entries.len());
        for (name, value) in entries {
            match serde_json::from_value::<ThemeOverride>(value) {
                Ok(patch) => {
                    overrides.insert(name, patch);
                }
                Err(e) => tracing::warn!(theme = %name, "Skipping custom theme: {}", e),
            }
        }
        Ok(overrides)
    }

    /// Writes the base palette of `name` into `style`. Unknown names get
    /// the default theme.
    pub fn configure_base_styles(&self, style: &mut StyleSheet, name: &str) {
        let base = builtin(name)
            .or_else(|| builtin(DEFAULT_THEME))
            .unwrap_or(&BUILTIN_THEMES[0]);
        style.theme_name = base.name.to_string();
        style.is_dark = base.dark;
        style.palette = base.palette();
    }

    pub fn apply_override(&self, style: &mut StyleSheet, patch: &ThemeOverride) {
        patch.apply_to(&mut style.palette);
    }

    /// Background, foreground and accent for `name`, overrides included.
    pub fn derive_colors(&self, name: &str) -> ShellColors {
        let mut style = StyleSheet::default();
        self.configure_base_styles(&mut style, name);
        if let Some(patch) = self.overrides.get(name) {
            self.apply_override(&mut style, patch);
        }
        style.colors()
    }

    /// Determines the effective theme at startup.
    ///
    /// An unrecognised stored name is replaced by [`DEFAULT_THEME`] and the
    /// correction is saved right away. Custom overrides registered under the
    /// effective name are layered on top of the base palette.
    pub fn resolve(&mut self, store: &dyn ConfigStore) -> CoreResult<ResolvedTheme> {
        let mut config = store.load()?;
        let mut corrected = false;

        if !self.is_valid_theme(&config.theme) {
            tracing::debug!(theme = %config.theme, "Unrecognised theme, falling back to default");
            config.theme = DEFAULT_THEME.to_string();
            store.save(&config)?;
            corrected = true;
        }

        match self.load_custom_theme_overrides() {
            Ok(loaded) => self.overrides.extend(loaded),
            Err(e) => tracing::warn!("Ignoring custom themes: {}", e),
        }

        let mut style = StyleSheet::default();
        self.configure_base_styles(&mut style, &config.theme);
        if let Some(patch) = self.overrides.get(&config.theme) {
            self.apply_override(&mut style, patch);
            tracing::debug!(theme = %config.theme, "Custom theme override applied");
        }

        Ok(ResolvedTheme {
            style,
            corrected,
        })
    }
}

/// Theme errors.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid custom theme file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
