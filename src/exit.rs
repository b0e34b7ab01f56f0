// src/exit.rs
//! Standardized process exit codes for `migralint`.
//!
//! Provides a stable contract for scripts and CI automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum MigralintExit {
    /// All migrations validated cleanly.
    Success = 0,
    /// Validation found one or more violations.
    CheckFailed = 1,
    /// Runtime failure (I/O, config).
    Error = 2,
}

impl MigralintExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for MigralintExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
