mod dto;
pub mod handlers;
pub mod pricing;

use crate::state::AppState;
use axum::Router;

pub use pricing::{
    compute_duration, compute_total, compute_unit_price, duration_between, quote, Billing,
    BookingDate, BookingError, DateField, Quote, QuoteOptions, ServiceKind, SitterRates,
};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::booking_routes())
}
