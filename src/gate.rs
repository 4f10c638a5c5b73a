// src/gate.rs

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::{AppError, AppResult};

pub const INCORRECT_PASSWORD_MSG: &str = "Incorrect password. Please try again.";

/// Password prompt guarding entry into edit mode.
///
/// This is a convenience gate for a static site owner, not an access
/// control boundary: retries are unlimited and nothing is rate limited.
#[derive(Debug, Default)]
pub struct SessionGate {
    error: bool,
    failed_attempts: u32,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing_enabled(configured: Option<&str>) -> bool {
        configured.is_some_and(|p| !p.is_empty())
    }

    /// Exact, case-sensitive match against the configured password.
    pub fn challenge(&mut self, configured: Option<&str>, candidate: &str) -> AppResult<()> {
        let expected = configured
            .filter(|p| !p.is_empty())
            .ok_or(AppError::EditingDisabled)?;

        let candidate = Zeroizing::new(candidate.to_owned());
        let matched: bool = candidate.as_bytes().ct_eq(expected.as_bytes()).into();

        if matched {
            self.reset();
            Ok(())
        } else {
            self.error = true;
            self.failed_attempts = self.failed_attempts.saturating_add(1);
            Err(AppError::IncorrectPassword)
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.then_some(INCORRECT_PASSWORD_MSG)
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn reset(&mut self) {
        self.error = false;
        self.failed_attempts = 0;
    }
}

// ======================================================
// Unit Tests
// ======================================================
