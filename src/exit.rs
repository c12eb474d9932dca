// src/exit.rs
//! Standardized process exit codes for `closeness`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::ClosenessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ClosenessExit {
    /// Scores computed and written.
    Success = 0,
    /// Generic error (output I/O, config).
    Error = 1,
    /// Input could not be read or is not a valid matrix.
    InvalidInput = 2,
    /// A vertex had a zero distance sum under the `error` policy.
    Degenerate = 3,
}

impl ClosenessExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a failure to its exit code, looking through `anyhow` context layers.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ClosenessError>() {
            Some(ClosenessError::DegenerateCloseness { .. }) => Self::Degenerate,
            Some(e) if e.is_input_error() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for ClosenessExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
