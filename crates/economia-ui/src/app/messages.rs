use crate::pages::PageMessage;

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    ShowPage(String),
    Page(PageMessage),

    // Reload
    RequestReload,
    ReloadAcknowledged,
    Relaunch,

    // Exit
    RequestExit,
    ConfirmExitYes,
    ConfirmExitNo,

    // Error dialog
    DismissError,
}
