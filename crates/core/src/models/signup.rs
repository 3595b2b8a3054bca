use serde::{Deserialize, Serialize};

use crate::errors::{StudioError, StudioResult};

/// Mailing-list signup form submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
}

impl SignupRequest {
    pub fn validate(&self) -> StudioResult<String> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(String::from)
            .ok_or_else(|| StudioError::Validation("missing email".into()))
    }
}
