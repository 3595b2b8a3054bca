use chrono::{DateTime, Utc};
use seenfit_core::models::class::ClassSession;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClass {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub class_type: String,
    pub instructor: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub capacity: i32,
    pub price_cents: i32,
    pub created_at: DateTime<Utc>,
}

impl From<DbClass> for ClassSession {
    fn from(row: DbClass) -> Self {
        ClassSession {
            id: row.id,
            name: row.name,
            class_type: row.class_type,
            instructor: row.instructor,
            description: row.description,
            start_time: row.start_time,
            duration_minutes: row.duration_minutes,
            capacity: row.capacity,
            price_cents: row.price_cents,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub class_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

/// Booking row joined with its class for the admin bookings list. The class
/// columns are optional only because the join is outer; in practice the
/// cascade keeps orphans from existing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookingWithClass {
    pub id: Uuid,
    pub class_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub class_name: Option<String>,
    pub class_start_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEmailSignup {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
