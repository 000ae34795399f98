use iced::widget::{Column, Space, button, column, container, text, vertical_space};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Theme, font};

use economia_core::{MENU_ENTRIES, build_menu};

use crate::app::{App, Message};
use crate::style::{self, SidebarStyle, buttons};

const INFO_ITEMS: [&str; 3] = ["• Temas Modernos: ✓", "• Reportes: ✓", "• Base de Datos: ✓"];

fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }
}

/// Flat, full-width sidebar button.
fn sidebar_button<'a>(
    label: &'a str,
    base: Color,
    hover: Color,
    message: Message,
) -> Element<'a, Message> {
    let metrics = SidebarStyle::default();

    button(text(label).size(metrics.text_size).font(bold()).color(Color::WHITE))
        .width(Length::Fixed(metrics.button_width))
        .padding(Padding::from(metrics.button_padding))
        .style(move |_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered | button::Status::Pressed => hover,
                _ => base,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: Color::WHITE,
                border: Border {
                    radius: 3.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(message)
        .into()
}

impl App {
    pub fn view_sidebar(&self) -> Element<'_, Message> {
        let metrics = SidebarStyle::default();
        let chrome = self.chrome;

        let logo = column![
            text("📱").size(32).color(chrome.accent),
            text("ECONOMÍA").size(20).font(bold()).color(chrome.accent),
            text("v3.2 Moderno").size(11).color(chrome.muted),
        ]
        .spacing(2)
        .align_x(iced::Alignment::Center)
        .width(Length::Fill);

        let menu_bg = chrome.menu_button;
        let menu_hover = style::darken(menu_bg, 0.25);
        let menu_items = build_menu(&MENU_ENTRIES, |token| Message::ShowPage(token.to_string()))
            .into_iter()
            .map(|binding| sidebar_button(binding.label, menu_bg, menu_hover, binding.action));
        let menu = Column::with_children(menu_items)
            .spacing(metrics.button_spacing)
            .align_x(iced::Alignment::Center)
            .width(Length::Fill);

        let info_lines = INFO_ITEMS.iter().fold(
            column![text("INFORMACIÓN").size(11).font(bold()).color(chrome.accent)].spacing(4),
            |col, item| col.push(text(*item).size(11).color(chrome.foreground)),
        );

        let info = container(info_lines)
            .padding(Padding::from([10, 12]))
            .width(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(chrome.panel)),
                border: Border {
                    color: chrome.border,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            });

        let bottom = column![
            sidebar_button(
                "🔄 Recargar",
                buttons::RELOAD,
                buttons::RELOAD_HOVER,
                Message::RequestReload
            ),
            sidebar_button("🚪 Salir", buttons::EXIT, buttons::EXIT_HOVER, Message::RequestExit),
        ]
        .spacing(metrics.button_spacing)
        .align_x(iced::Alignment::Center)
        .width(Length::Fill);

        let sidebar_content = column![
            Space::with_height(20),
            logo,
            Space::with_height(10),
            menu,
            Space::with_height(20),
            info,
            vertical_space(),
            bottom,
        ]
        .padding(Padding::from([0, 10]))
        .spacing(0)
        .width(Length::Fill);

        container(sidebar_content)
            .width(Length::Fixed(metrics.width))
            .height(Length::Fill)
            .padding(Padding {
                bottom: 10.0,
                ..Padding::ZERO
            })
            .style(move |_| container::Style {
                background: Some(Background::Color(chrome.background)),
                border: Border {
                    color: chrome.border,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
