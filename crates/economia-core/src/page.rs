//! Page identifiers, the page capability and the registry of factories.
//!
//! ## Learning: Trait Objects vs Enums
//!
//! The set of pages is closed, so identifiers are an enum and lookup by
//! token is a `match`. The page value itself is generic: the UI crate
//! decides what a mounted page is, the shell only needs [`Page`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Every screen the shell can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Compras,
    Resumenes,
    Produccion,
    Productos,
    Ventas,
    Gastos,
    Settings,
}

impl PageId {
    pub const ALL: [PageId; 7] = [
        PageId::Compras,
        PageId::Resumenes,
        PageId::Produccion,
        PageId::Productos,
        PageId::Ventas,
        PageId::Gastos,
        PageId::Settings,
    ];

    /// Page mounted right after startup.
    pub const DEFAULT: PageId = PageId::Compras;

    /// Name token used by menu bindings and `show_page`.
    pub const fn token(self) -> &'static str {
        match self {
            PageId::Compras => "compras",
            PageId::Resumenes => "resumenes",
            PageId::Produccion => "produccion",
            PageId::Productos => "productos",
            PageId::Ventas => "ventas",
            PageId::Gastos => "gastos",
            PageId::Settings => "settings",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.token() == token)
    }

    /// Human-readable page title.
    pub const fn title(self) -> &'static str {
        match self {
            PageId::Compras => "Compras",
            PageId::Resumenes => "Resúmenes",
            PageId::Produccion => "Producción",
            PageId::Productos => "Productos",
            PageId::Ventas => "Ventas",
            PageId::Gastos => "Gastos",
            PageId::Settings => "Ajustes",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PageId {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| crate::CoreError::UnknownPage(s.to_string()))
    }
}

/// Identity of one constructed page. Two mounts of the same page never
/// share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(Uuid);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A mountable screen.
pub trait Page {
    fn id(&self) -> PageId;

    fn instance(&self) -> InstanceId;

    /// Called once the page has been placed in the content area.
    fn attach(&mut self) -> Result<(), PageError> {
        Ok(())
    }

    /// Releases everything the page owns. Called exactly once, right
    /// before the page leaves the content area.
    fn destroy(&mut self);
}

/// Builds a fresh page.
pub type PageFactory<P> = Box<dyn Fn() -> Result<P, PageError> + Send + Sync>;

/// Failure while building or attaching a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct PageError(pub String);

impl PageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Fixed mapping from page to factory.
pub struct PageRegistry<P> {
    factories: HashMap<PageId, PageFactory<P>>,
}

impl<P> PageRegistry<P> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Adds a factory, replacing any previous one for `id`.
    pub fn register<F>(mut self, id: PageId, factory: F) -> Self
    where
        F: Fn() -> Result<P, PageError> + Send + Sync + 'static,
    {
        self.factories.insert(id, Box::new(factory));
        self
    }

    /// Looks up a page by its token.
    pub fn resolve(&self, token: &str) -> Option<(PageId, &PageFactory<P>)> {
        let id = PageId::from_token(token)?;
        self.factories.get(&id).map(|factory| (id, factory))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.resolve(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<P> Default for PageRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for PageRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageRegistry")
            .field("pages", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy(PageId);

    #[test]
    fn test_tokens_roundtrip() {
        for id in PageId::ALL {
            assert_eq!(PageId::from_token(id.token()), Some(id));
            assert_eq!(id.token().parse::<PageId>().unwrap(), id);
        }
        assert_eq!(PageId::from_token("Compras"), None);
        assert!("inventario".parse::<PageId>().is_err());
    }

    #[test]
    fn test_registry_lookup() {
        let registry = PageRegistry::new()
            .register(PageId::Compras, || Ok(Dummy(PageId::Compras)))
            .register(PageId::Ventas, || Ok(Dummy(PageId::Ventas)));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("ventas"));
        assert!(!registry.contains("gastos"));
        assert!(!registry.contains("unknown"));

        let (id, factory) = registry.resolve("compras").unwrap();
        assert_eq!(id, PageId::Compras);
        assert_eq!(factory().map(|d| d.0), Ok(PageId::Compras));
    }

    #[test]
    fn test_instance_ids_are_unique() {
        assert_ne!(InstanceId::new(), InstanceId::new());
    }
}
