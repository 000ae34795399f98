//! Full process relaunch for the reload action.
//!
//! Nothing survives the relaunch except what is already on disk; the new
//! process goes through normal startup with the same arguments.
//!
//! ## Learning: The Never Type
//!
//! `execv` only returns on failure. `nix` models that as
//! `Result<Infallible, Errno>`, and an empty `match never {}` turns the
//! success arm into any type we like, here `CoreError`.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use crate::{CoreError, CoreResult};

/// Delay between acknowledging the reload notice and replacing the process,
/// so the dialog can close before the window disappears.
pub const RELOAD_DELAY: Duration = Duration::from_millis(300);

/// The executable and arguments the running process was started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl LaunchCommand {
    /// Captures the current process image and its original arguments.
    pub fn current() -> CoreResult<Self> {
        Ok(Self {
            program: std::env::current_exe()?,
            args: std::env::args_os().skip(1).collect(),
        })
    }

    /// Replaces the running process with a fresh one. Only returns on
    /// failure.
    #[cfg(unix)]
    pub fn exec(self) -> CoreError {
        use std::ffi::CString;
        use std::os::unix::ffi::OsStrExt;

        let to_cstring = |bytes: &[u8]| {
            CString::new(bytes).map_err(|e| CoreError::Relaunch(e.to_string()))
        };

        let program = match to_cstring(self.program.as_os_str().as_bytes()) {
            Ok(p) => p,
            Err(e) => return e,
        };
        let mut argv = vec![program.clone()];
        for arg in &self.args {
            match to_cstring(arg.as_bytes()) {
                Ok(a) => argv.push(a),
                Err(e) => return e,
            }
        }

        tracing::debug!(program = %self.program.display(), "Replacing process image");
        match nix::unistd::execv(&program, &argv) {
            Ok(never) => match never {},
            Err(errno) => CoreError::Relaunch(errno.to_string()),
        }
    }

    /// Spawns the replacement and exits this process. Only returns on
    /// failure.
    #[cfg(not(unix))]
    pub fn exec(self) -> CoreError {
        tracing::debug!(program = %self.program.display(), "Spawning replacement process");
        match std::process::Command::new(&self.program).args(&self.args).spawn() {
            Ok(_) => std::process::exit(0),
            Err(e) => CoreError::Relaunch(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_keeps_original_arguments() {
        let launch = LaunchCommand::current().unwrap();
        let expected: Vec<OsString> = std::env::args_os().skip(1).collect();
        assert_eq!(launch.args, expected);
        assert_eq!(launch.program, std::env::current_exe().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_exec_rejects_interior_nul() {
        let launch = LaunchCommand {
            program: PathBuf::from("/bin/true"),
            args: vec![OsString::from("bad\0arg")],
        };
        assert!(matches!(launch.exec(), CoreError::Relaunch(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_exec_missing_program_fails() {
        let launch = LaunchCommand {
            program: PathBuf::from("/nonexistent/economia-binary"),
            args: Vec::new(),
        };
        assert!(matches!(launch.exec(), CoreError::Relaunch(_)));
    }

    #[test]
    fn test_reload_delay() {
        assert_eq!(RELOAD_DELAY.as_millis(), 300);
    }
}
