use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{StudioError, StudioResult};

/// Booking status. Transitions are one-directional: `confirmed` to
/// `cancelled`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> StudioResult<Self> {
        match value {
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(StudioError::Validation(format!(
                "unknown booking status: {other}"
            ))),
        }
    }
}

/// One customer's reservation against exactly one class session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub class_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

/// Raw reservation form submission from the public signup page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub class_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A reservation request that passed field validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidReservation {
    pub class_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl ReservationRequest {
    /// Requires a well-formed class identifier, a customer name, and a
    /// customer email; phone is optional. No side effects on failure.
    pub fn validate(&self) -> StudioResult<ValidReservation> {
        let class_id = trimmed(&self.class_id)
            .ok_or_else(|| StudioError::Validation("missing class identifier".into()))?;
        let class_id = Uuid::parse_str(&class_id)
            .map_err(|_| StudioError::Validation("malformed class identifier".into()))?;
        let name = trimmed(&self.name)
            .ok_or_else(|| StudioError::Validation("missing customer name".into()))?;
        let email = trimmed(&self.email)
            .ok_or_else(|| StudioError::Validation("missing customer email".into()))?;

        Ok(ValidReservation {
            class_id,
            name,
            email,
            phone: trimmed(&self.phone),
        })
    }
}

fn trimmed(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
