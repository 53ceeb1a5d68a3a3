//! Why a registration attempt failed.
//!
//! The form shows the same text for every variant ([`SubmissionError::user_message`]);
//! the variants exist so callers can tell causes apart without changing what
//! the user sees.

use thiserror::Error;

/// The only message ever shown to the user for a failed registration.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed, please try again.";

#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The configured base URL does not form a valid endpoint.
    #[error("invalid auth endpoint: {0}")]
    InvalidEndpoint(String),

    /// The request never got a response (DNS, connect, timeout, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("auth service rejected registration with status {status}")]
    Rejected { status: u16, body: String },
}

impl SubmissionError {
    pub fn user_message(&self) -> &'static str {
        REGISTRATION_FAILED_MESSAGE
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cause_shows_same_message() {
        let errors = [
            SubmissionError::InvalidEndpoint("x".into()),
            SubmissionError::Rejected {
                status: 400,
                body: "username taken".into(),
            },
            SubmissionError::Rejected {
                status: 503,
                body: String::new(),
            },
        ];
        for err in &errors {
            assert_eq!(err.user_message(), "Registration failed, please try again.");
        }
    }

    #[test]
    fn test_status_only_for_rejections() {
        let rejected = SubmissionError::Rejected {
            status: 409,
            body: String::new(),
        };
        assert_eq!(rejected.status(), Some(409));
        assert_eq!(SubmissionError::InvalidEndpoint("x".into()).status(), None);
    }
}
