//! Recognized options and fallback values for the admin class form.
//!
//! Numeric fields on the add/edit class form are deliberately lenient: an
//! absent or unparseable value falls back to a named default instead of
//! rejecting the submission. The defaults live here as one configuration
//! table so they are independently testable rather than inline magic numbers.

use crate::money;

/// Duration choices offered by the admin form, in minutes.
pub const DURATION_OPTIONS_MINUTES: [i32; 3] = [30, 45, 60];

pub const DEFAULT_DURATION_MINUTES: i32 = 60;
pub const DEFAULT_CAPACITY: i32 = 12;
/// $35.00 in minor units.
pub const DEFAULT_PRICE_CENTS: i32 = 3500;

pub fn is_recognized_duration(minutes: i32) -> bool {
    DURATION_OPTIONS_MINUTES.contains(&minutes)
}

/// Parses a duration field, falling back to [`DEFAULT_DURATION_MINUTES`] when
/// the value is absent, unparseable, or not positive.
pub fn duration_or_default(input: Option<&str>) -> i32 {
    parse_positive_int(input).unwrap_or(DEFAULT_DURATION_MINUTES)
}

pub fn capacity_or_default(input: Option<&str>) -> i32 {
    parse_positive_int(input).unwrap_or(DEFAULT_CAPACITY)
}

/// Parses a major-units price field ("35.00") into cents, rounding to the
/// nearest cent. Absent, unparseable, or negative input falls back to
/// [`DEFAULT_PRICE_CENTS`].
pub fn price_cents_or_default(input: Option<&str>) -> i32 {
    input
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|dollars| *dollars >= 0.0 && dollars.is_finite())
        .map(money::dollars_to_cents)
        .unwrap_or(DEFAULT_PRICE_CENTS)
}

fn parse_positive_int(input: Option<&str>) -> Option<i32> {
    input
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .filter(|value| *value > 0)
}
