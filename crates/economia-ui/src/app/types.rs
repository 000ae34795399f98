use std::path::PathBuf;

/// Launch options forwarded from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Config file to use instead of the default location
    pub config: Option<PathBuf>,
}

/// The modal dialog currently covering the window, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Something failed; only dismissable
    Error { message: String },
    /// The process is about to restart
    ReloadNotice,
    /// Yes/no before leaving
    ConfirmExit,
}
