pub mod band;
pub mod breakdown;
pub mod dto;
pub mod handlers;
pub mod risk;
mod services;

use crate::state::AppState;
use axum::Router;

pub use band::{bands, classify, classify_many, BandTally, ScoreBand, ScoreClass};
pub use breakdown::ScoreBreakdown;
pub use risk::{summarize_risks, RiskLevel, RiskSummary};
pub use services::build_score_card;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::score_routes())
        .merge(handlers::product_routes())
}
