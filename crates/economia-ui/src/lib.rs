//! # Economía UI
//!
//! The desktop window, built with iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture:
//! - **Model**: [`App`] wraps the core [`Shell`](economia_core::Shell)
//! - **Message**: clicks, key presses and timer callbacks
//! - **Update**: routes messages to the shell and the mounted page
//! - **View**: sidebar, content area and at most one modal dialog
//!
//! Everything runs on the iced event loop; the only deferred work is the
//! reload timer.

pub mod app;
pub mod pages;
pub mod style;
pub mod theme;

pub use app::{App, Flags, Message, UiError, run};
pub use theme::Chrome;
