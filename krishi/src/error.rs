//! The normalized completion failure.
//!
//! Transport errors, non-success statuses, and malformed response bodies
//! all collapse into one [`CompletionError`] at the client boundary. Its
//! `Display` is a single fixed message suitable for end users; the
//! underlying cause is logged where the failure is caught and retained
//! here only as a machine-readable [`CompletionErrorKind`].

/// Result type alias for completion calls.
pub type Result<T> = std::result::Result<T, CompletionError>;

/// Fixed user-facing message for every completion failure.
pub const COMPLETION_FAILED_MESSAGE: &str = "Failed to get AI response";

/// Diagnostic classification of a completion failure.
///
/// Never surfaced in the user-facing message; useful for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompletionErrorKind {
    /// The request never completed: connection, DNS, or timeout failure.
    Transport,
    /// The service responded with a non-success status code.
    HttpStatus,
    /// The response body did not match the expected shape.
    MalformedResponse,
}

/// A failed completion call, normalized to a single user-facing message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", COMPLETION_FAILED_MESSAGE)]
#[non_exhaustive]
pub struct CompletionError {
    kind: CompletionErrorKind,
}

impl CompletionError {
    /// Create a transport-level failure.
    #[must_use]
    pub const fn transport() -> Self {
        Self {
            kind: CompletionErrorKind::Transport,
        }
    }

    /// Create a non-success status failure.
    #[must_use]
    pub const fn http_status() -> Self {
        Self {
            kind: CompletionErrorKind::HttpStatus,
        }
    }

    /// Create a malformed-response failure.
    #[must_use]
    pub const fn malformed_response() -> Self {
        Self {
            kind: CompletionErrorKind::MalformedResponse,
        }
    }

    /// The diagnostic classification of this failure.
    #[must_use]
    pub const fn kind(&self) -> CompletionErrorKind {
        self.kind
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::malformed_response()
        } else if err.is_status() {
            Self::http_status()
        } else {
            Self::transport()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_uniform_across_kinds() {
        let errors = [
            CompletionError::transport(),
            CompletionError::http_status(),
            CompletionError::malformed_response(),
        ];
        for err in &errors {
            assert_eq!(err.to_string(), "Failed to get AI response");
            assert_eq!(err.to_string(), COMPLETION_FAILED_MESSAGE);
        }
    }

    #[test]
    fn test_kind_is_preserved_for_diagnostics() {
        assert_eq!(
            CompletionError::transport().kind(),
            CompletionErrorKind::Transport
        );
        assert_eq!(
            CompletionError::http_status().kind(),
            CompletionErrorKind::HttpStatus
        );
        assert_eq!(
            CompletionError::malformed_response().kind(),
            CompletionErrorKind::MalformedResponse
        );
    }
}
