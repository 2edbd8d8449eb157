pub mod app;
pub mod bookings;
pub mod config;
pub mod error;
pub mod scores;
pub mod state;
