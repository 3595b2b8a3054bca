//! Domain types for the Seen Fitness booking service: class sessions,
//! bookings, email signups, workflow outcomes, and the shared error taxonomy.
//! This crate is I/O-free; persistence and transport live in `seenfit-db`
//! and `seenfit-api`.

pub mod defaults;
pub mod errors;
pub mod models;
pub mod money;
pub mod studio;
