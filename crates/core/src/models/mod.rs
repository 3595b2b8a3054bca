pub mod admin;
pub mod booking;
pub mod class;
pub mod outcome;
pub mod signup;
