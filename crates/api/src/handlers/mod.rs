/// Admin workflows: session, class lifecycle, bookings, broadcast
pub mod admin;
/// Public workflows: schedule, reservations, email signup
pub mod public;
