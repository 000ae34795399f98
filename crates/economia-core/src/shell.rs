//! The application shell: current page, theme colors and lifecycle.
//!
//! ## Page lifecycle
//!
//! ```text
//!   Unmounted ──show_page(ok)──▶ Mounted(P)
//!       ▲                            │
//!       └──── destroy before the next construction, or failed build
//! ```
//!
//! Re-selecting the mounted page is not short-circuited: the current
//! instance is destroyed and a new one is built, which doubles as a page
//! refresh.
//!
//! ## Learning: Making Invalid States Unrepresentable
//!
//! [`ContentArea`] stores the page in an `Option<P>`. There is no list to
//! grow, so "two pages mounted" cannot be written down, and
//! `Option::take` hands the old page out for `destroy()` before the slot
//! is refilled.

use crate::event::{EventBus, ShellEvent};
use crate::page::{InstanceId, Page, PageError, PageId, PageRegistry};
use crate::theme::{ResolvedTheme, ShellColors};
use crate::{CoreError, CoreResult};

/// The single container pages are attached to. Holds at most one page.
#[derive(Debug)]
pub struct ContentArea<P> {
    slot: Option<P>,
}

impl<P: Page> ContentArea<P> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    pub fn current(&self) -> Option<&P> {
        self.slot.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut P> {
        self.slot.as_mut()
    }

    /// Number of attached pages (0 or 1).
    pub fn mounted_count(&self) -> usize {
        usize::from(self.slot.is_some())
    }

    /// Places `page` and runs its attach hook. A page whose hook fails is
    /// destroyed and removed again.
    fn attach(&mut self, page: P) -> Result<InstanceId, PageError> {
        debug_assert!(self.slot.is_none(), "content area already holds a page");
        let page = self.slot.insert(page);
        let instance = page.instance();
        if let Err(e) = page.attach() {
            page.destroy();
            self.slot = None;
            return Err(e);
        }
        Ok(instance)
    }

    /// Destroys and removes the current page, returning its identity.
    fn detach(&mut self) -> Option<(PageId, InstanceId)> {
        let mut page = self.slot.take()?;
        page.destroy();
        Some((page.id(), page.instance()))
    }
}

impl<P: Page> Default for ContentArea<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the current page and the theme-derived chrome colors.
pub struct Shell<P> {
    registry: PageRegistry<P>,
    content: ContentArea<P>,
    events: EventBus,
    theme_name: String,
    colors: ShellColors,
    running: bool,
}

impl<P: Page> Shell<P> {
    /// Builds the shell for a resolved theme and mounts [`PageId::DEFAULT`].
    ///
    /// The second value is the outcome of mounting the default page so the
    /// caller can report a failure the same way as for any other page.
    pub fn initialize(
        registry: PageRegistry<P>,
        theme: &ResolvedTheme,
        events: EventBus,
    ) -> (Self, CoreResult<PageId>) {
        let mut shell = Self {
            registry,
            content: ContentArea::new(),
            events,
            theme_name: theme.name().to_string(),
            colors: theme.colors(),
            running: true,
        };

        tracing::info!("{}", "=".repeat(60));
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "Application started");
        tracing::info!(theme = %shell.theme_name, "Active theme");
        tracing::info!("{}", "=".repeat(60));
        shell.events.emit(ShellEvent::Started {
            theme: shell.theme_name.clone(),
        });

        let initial = shell.show_page(PageId::DEFAULT.token());
        (shell, initial)
    }

    /// Replaces the mounted page with a fresh instance of `token`.
    ///
    /// An unknown token is only logged and leaves the current page mounted.
    /// For a known token the current page is destroyed before the new one
    /// is built; if building fails nothing is mounted afterwards.
    pub fn show_page(&mut self, token: &str) -> CoreResult<PageId> {
        let Some((id, factory)) = self.registry.resolve(token) else {
            tracing::warn!(page = %token, "Unknown page");
            self.events.emit(ShellEvent::UnknownPage(token.to_string()));
            return Err(CoreError::UnknownPage(token.to_string()));
        };

        if let Some((page, instance)) = self.content.detach() {
            tracing::debug!(%page, %instance, "Page destroyed");
            self.events.emit(ShellEvent::PageDestroyed { page, instance });
        }

        match factory().and_then(|page| self.content.attach(page)) {
            Ok(instance) => {
                tracing::info!(page = %id, "Page loaded");
                self.events.emit(ShellEvent::PageMounted { page: id, instance });
                Ok(id)
            }
            Err(source) => {
                tracing::error!(page = %id, "Error loading page: {}", source);
                self.events.emit(ShellEvent::PageFailed {
                    page: id,
                    error: source.to_string(),
                });
                Err(CoreError::PageConstruction { page: id, source })
            }
        }
    }

    /// Logs and announces a restart. The caller performs the relaunch.
    pub fn request_reload(&self) {
        tracing::info!("Reloading application...");
        self.events.emit(ShellEvent::ReloadRequested);
    }

    /// Stops the shell after a confirmed exit. Returns `false` if it was
    /// already stopped.
    pub fn shutdown(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;

        if let Some((page, instance)) = self.content.detach() {
            self.events.emit(ShellEvent::PageDestroyed { page, instance });
        }
        tracing::info!("Application closed");
        self.events.emit(ShellEvent::ShuttingDown);
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_page(&self) -> Option<&P> {
        self.content.current()
    }

    pub fn current_page_mut(&mut self) -> Option<&mut P> {
        self.content.current_mut()
    }

    pub fn current_page_id(&self) -> Option<PageId> {
        self.content.current().map(|p| p.id())
    }

    pub fn content(&self) -> &ContentArea<P> {
        &self.content
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn colors(&self) -> ShellColors {
        self.colors
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }
}
