use serde::{Deserialize, Serialize};

/// Uniform result of a form-backed workflow: a user-facing message plus a
/// success flag. Validation, not-found, and store failures are all folded
/// into this shape so no internal detail leaks to the browser; the only
/// workflow error surfaced at the transport layer is an unauthenticated
/// admin call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub message: String,
    pub success: bool,
}

impl ActionOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}
