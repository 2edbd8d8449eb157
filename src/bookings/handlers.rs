use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

use super::dto::QuoteRequest;
use super::pricing::{quote, BookingError, Quote, ServiceKind};

pub fn booking_routes() -> Router<AppState> {
    Router::new().route("/bookings/quote", post(quote_booking))
}

#[instrument(skip(state))]
pub async fn quote_booking(
    State(state): State<AppState>,
    Json(payload): Json<QuoteRequest>,
) -> Result<Json<Quote>, ApiError> {
    let service: ServiceKind = payload.service.parse()?;
    let options = state.config.pricing.quote_options();

    let q = quote(
        &payload.start_date,
        &payload.end_date,
        service,
        &payload.rates(),
        &options,
    )?;

    debug!(
        service = service.as_str(),
        duration_units = q.duration_units,
        total = q.total,
        "booking quoted"
    );
    Ok(Json(q))
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        // Expected user input problems; keep them out of error logs.
        debug!(error = %err, "booking quote rejected");
        let (status, code) = match &err {
            BookingError::InvalidDate { .. } => (StatusCode::BAD_REQUEST, "invalid_date"),
            BookingError::InvalidRange => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_range"),
            BookingError::UnknownService(_) => (StatusCode::BAD_REQUEST, "unknown_service"),
        };
        ApiError::new(status, code, err.to_string())
    }
}
