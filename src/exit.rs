// src/exit.rs
//! Process exit codes for `app-grep`.
//!
//! A run that aborts because no repository is available still exits with
//! `Success`; only environment failures (bad config, unwritable output) are
//! reported as `Error`.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum AppGrepExit {
    /// Run completed, or aborted with a user-facing message.
    Success = 0,
    /// Configuration, I/O or logging setup failed.
    Error = 1,
}

impl AppGrepExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for AppGrepExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
