//! Sidebar navigation entries.

use crate::page::PageId;

/// One sidebar button: label with icon glyph, and the page it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub page: PageId,
}

impl MenuEntry {
    pub const fn token(&self) -> &'static str {
        self.page.token()
    }
}

/// Sidebar entries in display order.
pub const MENU_ENTRIES: [MenuEntry; 7] = [
    MenuEntry { label: "🛒 Compras", page: PageId::Compras },
    MenuEntry { label: "📈 Resúmenes", page: PageId::Resumenes },
    MenuEntry { label: "🏭 Producción", page: PageId::Produccion },
    MenuEntry { label: "📦 Productos", page: PageId::Productos },
    MenuEntry { label: "💰 Ventas", page: PageId::Ventas },
    MenuEntry { label: "💸 Gastos", page: PageId::Gastos },
    MenuEntry { label: "⚙️ Ajustes", page: PageId::Settings },
];

/// A label paired with the action its button fires.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuBinding<A> {
    pub label: &'static str,
    pub action: A,
}

/// Binds every entry, in order, to the action built from its own token.
///
/// Each action is produced from the token of that iteration, so no two
/// buttons can end up sharing the last entry's target.
pub fn build_menu<A>(
    entries: &[MenuEntry],
    bind: impl Fn(&'static str) -> A,
) -> Vec<MenuBinding<A>> {
    entries
        .iter()
        .map(|entry| MenuBinding {
            label: entry.label,
            action: bind(entry.token()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let tokens: Vec<_> = MENU_ENTRIES.iter().map(|e| e.token()).collect();
        assert_eq!(
            tokens,
            ["compras", "resumenes", "produccion", "productos", "ventas", "gastos", "settings"]
        );
    }

    #[test]
    fn test_each_binding_targets_its_own_page() {
        let bindings = build_menu(&MENU_ENTRIES, |token| token.to_string());

        assert_eq!(bindings.len(), MENU_ENTRIES.len());
        for (binding, entry) in bindings.iter().zip(MENU_ENTRIES.iter()) {
            assert_eq!(binding.label, entry.label);
            assert_eq!(binding.action, entry.token());
        }
        assert_ne!(bindings[0].action, bindings[6].action);
    }

    #[test]
    fn test_every_page_has_one_entry() {
        for id in PageId::ALL {
            assert_eq!(MENU_ENTRIES.iter().filter(|e| e.page == id).count(), 1);
        }
    }
}
