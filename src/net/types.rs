//! Wire types and the submission error.

use serde::Deserialize;
use serde_json::Value;

use crate::form::kind::FormKind;

// =============================================================================
// ERROR
// =============================================================================

/// Why a submission did not produce a server message.
///
/// The variants exist for logs and tests. The user only ever sees
/// [`SubmissionError::user_message`], which is the same fixed string for
/// every variant.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    /// A 2xx body that is not JSON or has no string `message`.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl SubmissionError {
    /// Text shown to the user. Error detail is intentionally dropped.
    #[must_use]
    pub fn user_message(&self, kind: FormKind) -> &'static str {
        match self {
            Self::Transport(_) | Self::Status { .. } | Self::Malformed(_) => kind.failure_message(),
        }
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Success body for both `/login` and `/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Pull the `message` field out of a parsed response body.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Malformed`] when `message` is absent or not a string.
    pub fn from_body(body: Value) -> Result<Self, SubmissionError> {
        serde_json::from_value(body).map_err(|e| SubmissionError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
