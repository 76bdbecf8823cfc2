//! Error types for the analysis client

use std::fmt;
use thiserror::Error;

/// What went wrong talking to the backend. Retained for logging; users
/// only ever see the fixed `FailureKind` message.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("network error: {0}")]
    Network(String),

    #[error("backend returned status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// User-facing failure of a submission. The message is fixed per kind;
/// backend failure detail stays in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The input was empty after trimming; no request was sent
    EmptyInput,
    /// The external call failed for any reason
    BackendUnavailable,
}

impl FailureKind {
    pub fn message(&self) -> &'static str {
        match self {
            FailureKind::EmptyInput => "Please enter some text",
            FailureKind::BackendUnavailable => "Backend connection failed.",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages_carry_no_diagnostics() {
        assert_eq!(FailureKind::EmptyInput.message(), "Please enter some text");
        assert_eq!(
            FailureKind::BackendUnavailable.to_string(),
            "Backend connection failed."
        );
    }
}
