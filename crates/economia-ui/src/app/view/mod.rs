pub mod dialogs;
pub mod sidebar;

use iced::widget::{Space, column, container, mouse_area, row, stack, text};
use iced::{Background, Border, Element, Length};

use crate::app::{App, Dialog, Message};
use crate::style;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let background = self.chrome.background;

        let main_view: Element<'_, Message> = container(
            row![self.view_sidebar(), self.view_content()]
                .spacing(5)
                .padding(10)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        })
        .into();

        let Some(dialog) = &self.dialog else {
            return main_view;
        };

        // Clicking the backdrop only dismisses dialogs that have a neutral answer
        let backdrop_message = match dialog {
            Dialog::Error { .. } => Some(Message::DismissError),
            Dialog::ConfirmExit => Some(Message::ConfirmExitNo),
            Dialog::ReloadNotice => None,
        };

        let mut backdrop = mouse_area(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_| container::Style {
                    background: Some(Background::Color(style::OVERLAY)),
                    ..Default::default()
                }),
        );
        if let Some(message) = backdrop_message {
            backdrop = backdrop.on_press(message);
        }

        stack![main_view, backdrop, self.view_dialog(dialog)].into()
    }

    /// The content area: whatever page the shell has mounted, or an empty
    /// panel when nothing is.
    pub fn view_content(&self) -> Element<'_, Message> {
        let panel = self.chrome.panel;
        let border = self.chrome.border;

        let inner: Element<'_, Message> = match self.shell.current_page() {
            Some(page) => page.view(&self.chrome, self.shell.theme_name()),
            None => container(
                column![text("Sin página cargada").size(14).color(self.chrome.muted)]
                    .align_x(iced::Alignment::Center),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        };

        container(inner)
            .width(Length::Fill)
            .height(Length::Fill)
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
    }
}
