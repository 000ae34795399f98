//! # Economía Core
//!
//! Toolkit-independent state behind the Economía desktop shell.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         Shell                            │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐│
//! │  │ ConfigStore │ │ThemeManager │ │      EventBus       ││
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘│
//! │         │                                                │
//! │  ┌──────┴──────────────────────────────────┐            │
//! │  │        PageRegistry  →  ContentArea      │            │
//! │  │   (one factory per PageId, ≤ 1 mounted)  │            │
//! │  └─────────────────────────────────────────┘            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The UI crate supplies the concrete page type and renders whatever the
//! shell has mounted. Everything here can be exercised without a window.

pub mod config;
pub mod event;
pub mod menu;
pub mod page;
pub mod restart;
pub mod shell;
pub mod theme;

pub use config::{AppConfig, ConfigError, ConfigStore, FileConfigStore, MemoryConfigStore};
pub use event::{EventBus, ShellEvent, drain};
pub use menu::{MENU_ENTRIES, MenuBinding, MenuEntry, build_menu};
pub use page::{InstanceId, Page, PageError, PageFactory, PageId, PageRegistry};
pub use restart::{LaunchCommand, RELOAD_DELAY};
pub use shell::{ContentArea, Shell};
pub use theme::{
    Color, DEFAULT_THEME, Palette, ResolvedTheme, ShellColors, StyleSheet, ThemeError, ThemeManager,
    ThemeOverride,
};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Theme error: {0}")]
    Theme(#[from] theme::ThemeError),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Error loading page {page}: {source}")]
    PageConstruction {
        page: PageId,
        #[source]
        source: PageError,
    },

    #[error("Relaunch failed: {0}")]
    Relaunch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
