use serde::{Deserialize, Serialize};

use crate::errors::{StudioError, StudioResult};

/// Admin login form: the shared studio secret.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: Option<String>,
}

/// Broadcast email to the full mailing list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BroadcastRequest {
    pub subject: Option<String>,
    pub body: Option<String>,
}

impl BroadcastRequest {
    /// Subject and body must both be non-empty.
    pub fn validate(&self) -> StudioResult<(String, String)> {
        let subject = trimmed(&self.subject)
            .ok_or_else(|| StudioError::Validation("missing subject".into()))?;
        let body =
            trimmed(&self.body).ok_or_else(|| StudioError::Validation("missing body".into()))?;
        Ok((subject, body))
    }
}

/// Input for the AI-assisted class description draft. Name and type are
/// required; the rest only enriches the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub class_type: Option<String>,
    pub instructor: Option<String>,
    pub duration_minutes: Option<i32>,
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeResponse {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriberCountResponse {
    pub count: i64,
}

fn trimmed(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
