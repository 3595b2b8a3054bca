//! Price handling. Prices are stored in integer minor units (cents) and
//! converted to major units only at the display/email boundary.

/// Converts a major-unit amount (dollars) to integer cents, rounding to the
/// nearest cent.
pub fn dollars_to_cents(dollars: f64) -> i32 {
    (dollars * 100.0).round() as i32
}

pub fn cents_to_dollars(cents: i32) -> f64 {
    f64::from(cents) / 100.0
}

/// Display label in whole major units, e.g. 3500 -> "$35".
pub fn price_label(cents: i32) -> String {
    format!("${}", cents_to_dollars(cents).round() as i64)
}
