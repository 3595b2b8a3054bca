use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::defaults;
use crate::errors::{StudioError, StudioResult};

/// One scheduled, bookable class offering as shown to the public.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub class_type: String,
    pub instructor: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub capacity: i32,
    pub price_cents: i32,
}

/// Raw admin form input for adding or editing a class. Everything arrives as
/// optional text, exactly as typed; validation and defaulting happen in
/// [`ClassFields::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassForm {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub class_type: Option<String>,
    pub instructor: Option<String>,
    pub description: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    pub class_date: Option<String>,
    /// 24-hour wall-clock time, `HH:MM`.
    pub class_time: Option<String>,
    pub duration_minutes: Option<String>,
    pub capacity: Option<String>,
    /// Major units, e.g. "35.00".
    pub price_dollars: Option<String>,
}

/// Validated class fields shared by the create and update operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassFields {
    pub name: String,
    pub class_type: String,
    pub instructor: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub capacity: i32,
    pub price_cents: i32,
}

impl ClassFields {
    /// Validates an admin form submission.
    ///
    /// Name, type, instructor, date, and time are required, and date + time
    /// must combine into a valid instant. The numeric fields are lenient:
    /// absent or unparseable duration, capacity, and price fall back to the
    /// named defaults in [`crate::defaults`] rather than rejecting.
    pub fn validate(form: &ClassForm) -> StudioResult<Self> {
        let name = required(&form.name, "name")?;
        let class_type = required(&form.class_type, "type")?;
        let instructor = required(&form.instructor, "instructor")?;
        let class_date = required(&form.class_date, "date")?;
        let class_time = required(&form.class_time, "time")?;

        let date = NaiveDate::parse_from_str(&class_date, "%Y-%m-%d")
            .map_err(|_| StudioError::Validation(format!("invalid date: {class_date}")))?;
        let time = NaiveTime::parse_from_str(&class_time, "%H:%M")
            .map_err(|_| StudioError::Validation(format!("invalid time: {class_time}")))?;
        let start_time = date.and_time(time).and_utc();

        let description = form
            .description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(String::from);

        Ok(Self {
            name,
            class_type,
            instructor,
            description,
            start_time,
            duration_minutes: defaults::duration_or_default(form.duration_minutes.as_deref()),
            capacity: defaults::capacity_or_default(form.capacity.as_deref()),
            price_cents: defaults::price_cents_or_default(form.price_dollars.as_deref()),
        })
    }
}

/// Add and edit share one validated input shape; the two operations are
/// distinguished explicitly instead of branching on an optional identifier.
#[derive(Debug, Clone)]
pub enum ClassCommand {
    Create(ClassFields),
    Update(Uuid, ClassFields),
}

fn required(field: &Option<String>, label: &str) -> StudioResult<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
        .ok_or_else(|| StudioError::Validation(format!("missing required field: {label}")))
}
