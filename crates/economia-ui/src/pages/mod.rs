//! Page components mounted into the content area.
//!
//! Every page is a [`PageView`]: the core shell handles its lifecycle, the
//! UI asks it for a view and routes [`PageMessage`]s to it.

pub mod settings;

use std::sync::Arc;

use economia_core::{ConfigStore, InstanceId, Page, PageError, PageId, PageRegistry};
use iced::widget::{Column, Space, column, container, scrollable, text};
use iced::{Background, Border, Element, Font, Length, Padding, font};

use crate::app::Message;
use crate::theme::Chrome;
use settings::{SettingsMessage, SettingsPage};

/// Messages addressed to the mounted page.
#[derive(Debug, Clone)]
pub enum PageMessage {
    Settings(SettingsMessage),
}

/// Static description of a business screen.
struct Overview {
    subtitle: &'static str,
    sections: &'static [(&'static str, &'static str)],
}

enum PageBody {
    Overview(Overview),
    Settings(SettingsPage),
}

/// One mounted page.
pub struct PageView {
    id: PageId,
    instance: InstanceId,
    body: PageBody,
    attached: bool,
}

impl PageView {
    fn overview(id: PageId, overview: Overview) -> Self {
        Self {
            id,
            instance: InstanceId::new(),
            body: PageBody::Overview(overview),
            attached: false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn update(&mut self, message: PageMessage) {
        match (&mut self.body, message) {
            (PageBody::Settings(page), PageMessage::Settings(msg)) => page.update(msg),
            (_, msg) => {
                tracing::debug!(page = %self.id, ?msg, "Message for another page ignored");
            }
        }
    }

    pub fn view<'a>(&'a self, chrome: &Chrome, active_theme: &'a str) -> Element<'a, Message> {
        let header = column![
            text(self.id.title())
                .size(26)
                .color(chrome.accent)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                }),
            text(self.subtitle()).size(13).color(chrome.muted),
        ]
        .spacing(4);

        let body: Element<'a, Message> = match &self.body {
            PageBody::Overview(overview) => Self::view_sections(overview, chrome),
            PageBody::Settings(page) => page.view(chrome, active_theme),
        };

        scrollable(
            column![header, Space::with_height(16), body]
                .padding(24)
                .width(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    }

    fn subtitle(&self) -> &'static str {
        match &self.body {
            PageBody::Overview(overview) => overview.subtitle,
            PageBody::Settings(_) => "Apariencia y preferencias de la aplicación",
        }
    }

    fn view_sections<'a>(overview: &Overview, chrome: &Chrome) -> Element<'a, Message> {
        let panel = chrome.panel;
        let border = chrome.border;

        let cards = overview.sections.iter().map(|(title, detail)| {
            container(
                column![
                    text(*title).size(15).color(chrome.foreground),
                    text(*detail).size(12).color(chrome.muted),
                ]
                .spacing(6),
            )
            .padding(Padding::from([12, 16]))
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
        });

        Column::with_children(cards)
            .spacing(10)
            .width(Length::Fill)
            .into()
    }
}

impl Page for PageView {
    fn id(&self) -> PageId {
        self.id
    }

    fn instance(&self) -> InstanceId {
        self.instance
    }

    fn attach(&mut self) -> Result<(), PageError> {
        self.attached = true;
        Ok(())
    }

    fn destroy(&mut self) {
        self.attached = false;
        tracing::debug!(page = %self.id, instance = %self.instance, "Page released");
    }
}

const COMPRAS: Overview = Overview {
    subtitle: "Registro de compras a proveedores",
    sections: &[
        ("Nueva compra", "Proveedor, productos, cantidades y precio unitario."),
        ("Historial", "Compras registradas filtrables por fecha y proveedor."),
        ("Proveedores", "Datos de contacto y condiciones de pago."),
    ],
};

const RESUMENES: Overview = Overview {
    subtitle: "Resúmenes de ingresos, gastos y márgenes",
    sections: &[
        ("Resumen mensual", "Totales de compras, ventas y gastos por mes."),
        ("Márgenes", "Beneficio bruto por producto y periodo."),
        ("Reportes", "Exportación de informes."),
    ],
};

const PRODUCCION: Overview = Overview {
    subtitle: "Órdenes de producción y consumo de materias primas",
    sections: &[
        ("Órdenes", "Lotes planificados y terminados."),
        ("Consumo", "Materias primas usadas por lote."),
        ("Costes", "Coste unitario de cada producción."),
    ],
};

const PRODUCTOS: Overview = Overview {
    subtitle: "Catálogo de productos y existencias",
    sections: &[
        ("Catálogo", "Productos, unidades y precios de venta."),
        ("Existencias", "Stock disponible por producto."),
    ],
};

const VENTAS: Overview = Overview {
    subtitle: "Registro de ventas a clientes",
    sections: &[
        ("Nueva venta", "Cliente, productos y forma de pago."),
        ("Historial", "Ventas registradas filtrables por fecha y cliente."),
        ("Clientes", "Datos de contacto y saldo pendiente."),
    ],
};

const GASTOS: Overview = Overview {
    subtitle: "Gastos generales del negocio",
    sections: &[
        ("Nuevo gasto", "Concepto, categoría e importe."),
        ("Categorías", "Agrupación de gastos fijos y variables."),
    ],
};

/// The page registry the window uses. The settings page reads and writes
/// the config through `store`.
pub fn registry(store: Arc<dyn ConfigStore>) -> PageRegistry<PageView> {
    PageRegistry::new()
        .register(PageId::Compras, || Ok(PageView::overview(PageId::Compras, COMPRAS)))
        .register(PageId::Resumenes, || Ok(PageView::overview(PageId::Resumenes, RESUMENES)))
        .register(PageId::Produccion, || {
            Ok(PageView::overview(PageId::Produccion, PRODUCCION))
        })
        .register(PageId::Productos, || Ok(PageView::overview(PageId::Productos, PRODUCTOS)))
        .register(PageId::Ventas, || Ok(PageView::overview(PageId::Ventas, VENTAS)))
        .register(PageId::Gastos, || Ok(PageView::overview(PageId::Gastos, GASTOS)))
        .register(PageId::Settings, move || {
            Ok(PageView {
                id: PageId::Settings,
                instance: InstanceId::new(),
                body: PageBody::Settings(SettingsPage::new(Arc::clone(&store))?),
                attached: false,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use economia_core::MemoryConfigStore;

    #[test]
    fn test_every_page_registered() {
        let registry = registry(Arc::new(MemoryConfigStore::new()));
        assert_eq!(registry.len(), PageId::ALL.len());

        for id in PageId::ALL {
            let (resolved, factory) = registry.resolve(id.token()).unwrap();
            assert_eq!(resolved, id);
            let page = factory().unwrap();
            assert_eq!(page.id(), id);
            assert!(!page.is_attached());
        }
    }

    #[test]
    fn test_attach_and_destroy() {
        let registry = registry(Arc::new(MemoryConfigStore::new()));
        let (_, factory) = registry.resolve("ventas").unwrap();
        let mut page = factory().unwrap();

        page.attach().unwrap();
        assert!(page.is_attached());
        page.destroy();
        assert!(!page.is_attached());
    }

    #[test]
    fn test_unsaved_settings_dropped_on_switch() {
        let store = Arc::new(MemoryConfigStore::new());
        let registry = registry(store.clone());
        let (_, factory) = registry.resolve("settings").unwrap();
        let mut page = factory().unwrap();

        page.attach().unwrap();
        page.update(PageMessage::Settings(SettingsMessage::ThemeSelected(
            "flatly".to_string(),
        )));
        page.destroy();
        drop(page);

        assert_eq!(store.save_count(), 0);
        let (_, factory) = registry.resolve("settings").unwrap();
        match &factory().unwrap().body {
            PageBody::Settings(fresh) => assert_eq!(fresh.selected(), "solar"),
            PageBody::Overview(_) => panic!("settings token built an overview page"),
        }
    }

    #[test]
    fn test_factories_build_distinct_instances() {
        let registry = registry(Arc::new(MemoryConfigStore::new()));
        let (_, factory) = registry.resolve("compras").unwrap();
        assert_ne!(factory().unwrap().instance(), factory().unwrap().instance());
    }
}
