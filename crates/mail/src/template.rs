//! Email subject and body builders. Timestamps are rendered in a long
//! human-readable form; prices come out in whole major units.

use chrono::{DateTime, Utc};
use seenfit_core::money;

/// Everything the reservation confirmation needs from the resolved class and
/// the validated reservation.
#[derive(Debug, Clone)]
pub struct ConfirmationDetails<'a> {
    pub customer_name: &'a str,
    pub class_name: &'a str,
    pub class_type: &'a str,
    pub instructor: &'a str,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub price_cents: i32,
}

pub fn confirmation_subject(class_name: &str, start_time: DateTime<Utc>) -> String {
    format!("You're reserved: {} - {}", class_name, format_long_date(start_time))
}

pub fn confirmation_html(details: &ConfirmationDetails) -> String {
    format!(
        "<p>Hi {name},</p>\n\
         <p>You're reserved for <strong>{class}</strong>.</p>\n\
         <ul>\n\
         <li><strong>Type:</strong> {class_type}</li>\n\
         <li><strong>Instructor:</strong> {instructor}</li>\n\
         <li><strong>Date &amp; time:</strong> {date} at {time}</li>\n\
         <li><strong>Duration:</strong> {duration} minutes</li>\n\
         <li><strong>Amount:</strong> {price}</li>\n\
         </ul>\n\
         <p><strong>Payment:</strong> Payment will be collected at the start of class (cash, card, or Venmo accepted).</p>\n\
         <p>Location details will be sent closer to the date. Questions? Reply to this email.</p>\n\
         <p>See you there!</p>",
        name = escape_html(details.customer_name),
        class = escape_html(details.class_name),
        class_type = escape_html(details.class_type),
        instructor = escape_html(details.instructor),
        date = format_long_date(details.start_time),
        time = format_time(details.start_time),
        duration = details.duration_minutes,
        price = money::price_label(details.price_cents),
    )
}

/// Converts operator-typed plain text into paragraph blocks, dropping blank
/// lines and escaping markup.
pub fn body_to_html(body: &str) -> String {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("<p>{}</p>", escape_html(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// e.g. "Sunday, June 1, 2025".
pub fn format_long_date(instant: DateTime<Utc>) -> String {
    instant.format("%A, %B %-d, %Y").to_string()
}

/// 12-hour clock, e.g. "6:00 PM".
pub fn format_time(instant: DateTime<Utc>) -> String {
    instant.format("%-I:%M %p").to_string()
}
