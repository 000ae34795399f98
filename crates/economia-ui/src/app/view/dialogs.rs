use iced::widget::{Space, button, column, container, row, text};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use crate::app::{App, Dialog, Message};
use crate::style::{self, buttons};

impl App {
    pub fn view_dialog<'a>(&'a self, dialog: &'a Dialog) -> Element<'a, Message> {
        match dialog {
            Dialog::Error { message } => self.view_error_dialog(message),
            Dialog::ReloadNotice => self.view_reload_dialog(),
            Dialog::ConfirmExit => self.view_confirm_exit_dialog(),
        }
    }

    fn view_error_dialog<'a>(&'a self, message: &'a str) -> Element<'a, Message> {
        let content = column![
            text("Error").size(16).color(self.chrome.danger),
            Space::with_height(12),
            text(message).size(13).color(self.chrome.foreground),
            Space::with_height(16),
            row![
                Space::with_width(Length::Fill),
                self.filled_button("Aceptar", self.chrome.primary, Message::DismissError),
            ],
        ];

        self.modal_frame(content.into())
    }

    fn view_reload_dialog(&self) -> Element<'_, Message> {
        let content = column![
            text("🔄 Recargando").size(16).color(self.chrome.foreground),
            Space::with_height(12),
            text("La aplicación se reiniciará...")
                .size(13)
                .color(self.chrome.muted),
            Space::with_height(16),
            row![
                Space::with_width(Length::Fill),
                self.filled_button("Aceptar", buttons::RELOAD, Message::ReloadAcknowledged),
            ],
        ];

        self.modal_frame(content.into())
    }

    fn view_confirm_exit_dialog(&self) -> Element<'_, Message> {
        let foreground = self.chrome.foreground;
        let border = self.chrome.border;
        let panel = self.chrome.panel;

        let no_btn = button(text("No").size(13).color(foreground))
            .padding(Padding::from([8, 20]))
            .style(move |_: &Theme, status: button::Status| {
                let bg = match status {
                    button::Status::Hovered => style::darken(panel, 0.1),
                    _ => panel,
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: foreground,
                    border: Border {
                        color: border,
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::ConfirmExitNo);

        let content = column![
            text("Confirmar").size(16).color(foreground),
            Space::with_height(12),
            text("¿Salir de la aplicación?")
                .size(13)
                .color(self.chrome.muted),
            Space::with_height(16),
            row![
                Space::with_width(Length::Fill),
                no_btn,
                Space::with_width(12),
                self.filled_button("Sí", self.chrome.danger, Message::ConfirmExitYes),
            ]
            .align_y(iced::Alignment::Center),
        ];

        self.modal_frame(content.into())
    }

    fn filled_button<'a>(&self, label: &'a str, base: Color, message: Message) -> Element<'a, Message> {
        let hover = style::darken(base, 0.15);

        button(text(label).size(13).color(Color::WHITE))
            .padding(Padding::from([8, 20]))
            .style(move |_: &Theme, status: button::Status| {
                let bg = match status {
                    button::Status::Hovered | button::Status::Pressed => hover,
                    _ => base,
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: Color::WHITE,
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .on_press(message)
            .into()
    }

    /// Centers `content` in a bordered card on top of the backdrop.
    fn modal_frame<'a>(&self, content: Element<'a, Message>) -> Element<'a, Message> {
        let background = self.chrome.background;
        let border = self.chrome.border;

        container(
            container(content)
                .padding(24)
                .width(Length::Fixed(380.0))
                .style(move |_| container::Style {
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: border,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    ..Default::default()
                }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
