use iced::Task;

use economia_core::{CoreError, LaunchCommand, RELOAD_DELAY};

use super::{App, Dialog, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowPage(token) => match self.shell.show_page(&token) {
                Ok(_) | Err(CoreError::UnknownPage(_)) => {}
                Err(CoreError::PageConstruction { source, .. }) => {
                    self.show_error(format!("Error cargando página:\n{}", source));
                }
                Err(e) => self.show_error(format!("Error cargando página:\n{}", e)),
            },

            Message::Page(msg) => {
                if let Some(page) = self.shell.current_page_mut() {
                    page.update(msg);
                }
            }

            Message::RequestReload => {
                if self.dialog.is_none() {
                    self.shell.request_reload();
                    self.dialog = Some(Dialog::ReloadNotice);
                }
            }

            Message::ReloadAcknowledged => {
                if self.dialog == Some(Dialog::ReloadNotice) {
                    self.dialog = None;
                    return Task::perform(
                        async { tokio::time::sleep(RELOAD_DELAY).await },
                        |_| Message::Relaunch,
                    );
                }
            }

            Message::Relaunch => {
                let error = match LaunchCommand::current() {
                    Ok(command) => command.exec(),
                    Err(e) => e,
                };
                self.relaunch_failed(error);
            }

            // An error dialog gives way to the exit prompt; a pending reload
            // or an open prompt does not.
            Message::RequestExit => match self.dialog {
                None | Some(Dialog::Error { .. }) => self.dialog = Some(Dialog::ConfirmExit),
                Some(Dialog::ReloadNotice | Dialog::ConfirmExit) => {}
            },

            Message::ConfirmExitYes => {
                if self.dialog == Some(Dialog::ConfirmExit) {
                    self.dialog = None;
                    if self.shell.shutdown() {
                        return iced::exit();
                    }
                }
            }

            Message::ConfirmExitNo => {
                if self.dialog == Some(Dialog::ConfirmExit) {
                    self.dialog = None;
                }
            }

            Message::DismissError => {
                if matches!(self.dialog, Some(Dialog::Error { .. })) {
                    self.dialog = None;
                }
            }
        }

        Task::none()
    }

    fn show_error(&mut self, message: String) {
        self.dialog = Some(Dialog::Error { message });
    }

    /// Only reached when the process image was not replaced.
    fn relaunch_failed(&mut self, error: CoreError) {
        tracing::error!("Reload failed: {}", error);
        self.show_error(format!("No se pudo reiniciar la aplicación:\n{}", error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::pages::PageMessage;
    use crate::pages::settings::SettingsMessage;
    use economia_core::{ConfigStore, Page, PageId, ShellEvent, drain};

    #[test]
    fn test_menu_click_switches_page() {
        let (mut app, _) = test_app("solar");
        let first = app.shell.current_page().unwrap().instance();

        let _ = app.update(Message::ShowPage("ventas".to_string()));
        assert_eq!(app.shell.current_page_id(), Some(PageId::Ventas));
        assert_eq!(app.shell.content().mounted_count(), 1);

        let _ = app.update(Message::ShowPage("compras".to_string()));
        assert_ne!(app.shell.current_page().unwrap().instance(), first);
    }

    #[test]
    fn test_unknown_page_no_dialog() {
        let (mut app, _) = test_app("solar");

        let _ = app.update(Message::ShowPage("inventario".to_string()));
        assert!(app.dialog.is_none());
        assert_eq!(app.shell.current_page_id(), Some(PageId::Compras));
    }

    #[test]
    fn test_exit_declined_changes_nothing() {
        let (mut app, _) = test_app("solar");
        let instance = app.shell.current_page().unwrap().instance();

        let _ = app.update(Message::RequestExit);
        assert_eq!(app.dialog, Some(Dialog::ConfirmExit));

        let _ = app.update(Message::ConfirmExitNo);
        assert!(app.dialog.is_none());
        assert!(app.shell.is_running());
        assert_eq!(app.shell.current_page().unwrap().instance(), instance);
    }

    #[test]
    fn test_exit_confirmed_shuts_down_once() {
        let (mut app, _) = test_app("solar");
        let mut rx = app.shell.events().subscribe();

        let _ = app.update(Message::RequestExit);
        let _ = app.update(Message::ConfirmExitYes);
        let _ = app.update(Message::ConfirmExitYes);

        assert!(!app.shell.is_running());
        let shutdowns = drain(&mut rx)
            .into_iter()
            .filter(|e| *e == ShellEvent::ShuttingDown)
            .count();
        assert_eq!(shutdowns, 1);
    }

    #[test]
    fn test_reload_shows_single_notice() {
        let (mut app, _) = test_app("solar");
        let mut rx = app.shell.events().subscribe();

        let _ = app.update(Message::RequestReload);
        let _ = app.update(Message::RequestReload);
        assert_eq!(app.dialog, Some(Dialog::ReloadNotice));
        assert_eq!(drain(&mut rx), vec![ShellEvent::ReloadRequested]);

        let task = app.update(Message::ReloadAcknowledged);
        assert!(app.dialog.is_none());
        assert!(task.units() > 0);
    }

    #[test]
    fn test_acknowledge_without_notice_schedules_nothing() {
        let (mut app, _) = test_app("solar");

        let task = app.update(Message::ReloadAcknowledged);
        assert_eq!(task.units(), 0);
    }

    #[test]
    fn test_failed_relaunch_shows_error() {
        let (mut app, _) = test_app("solar");

        app.relaunch_failed(CoreError::Relaunch("No such file or directory".to_string()));

        match &app.dialog {
            Some(Dialog::Error { message }) => {
                assert!(message.starts_with("No se pudo reiniciar"));
                assert!(message.contains("No such file or directory"));
            }
            other => panic!("expected error dialog, got {:?}", other),
        }
        assert!(app.shell.is_running());
        assert_eq!(app.shell.current_page_id(), Some(PageId::Compras));
    }

    #[test]
    fn test_close_request_replaces_error_dialog() {
        let (mut app, _) = test_app("solar");

        app.show_error("Error cargando página".to_string());
        let _ = app.update(Message::RequestExit);
        assert_eq!(app.dialog, Some(Dialog::ConfirmExit));

        let _ = app.update(Message::ConfirmExitNo);
        assert!(app.dialog.is_none());
    }

    #[test]
    fn test_escape_while_dialog_open_is_ignored() {
        let (mut app, _) = test_app("solar");

        let _ = app.update(Message::RequestReload);
        let _ = app.update(Message::RequestExit);
        assert_eq!(app.dialog, Some(Dialog::ReloadNotice));
    }

    #[test]
    fn test_settings_messages_reach_mounted_page() {
        let (mut app, store) = test_app("solar");

        let _ = app.update(Message::ShowPage("settings".to_string()));
        let _ = app.update(Message::Page(PageMessage::Settings(
            SettingsMessage::ThemeSelected("minty".to_string()),
        )));
        let _ = app.update(Message::Page(PageMessage::Settings(SettingsMessage::Save)));

        assert_eq!(store.load().unwrap().theme, "minty");
        // Running theme only changes after a restart
        assert_eq!(app.shell.theme_name(), "solar");
    }

    #[test]
    fn test_page_messages_without_settings_are_ignored() {
        let (mut app, store) = test_app("solar");

        let _ = app.update(Message::Page(PageMessage::Settings(SettingsMessage::Save)));
        assert_eq!(store.save_count(), 0);
    }
}
