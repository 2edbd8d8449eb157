use axum::{
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, instrument};

use crate::state::AppState;

use super::band::{bands, classify, classify_many, BandTally, ScoreClass};
use super::dto::{BandsResponse, ClassifyRequest, ScoreCardRequest, ScoreCardResponse, TallyRequest};
use super::services::build_score_card;

pub fn score_routes() -> Router<AppState> {
    Router::new()
        .route("/scores/bands", get(list_bands))
        .route("/scores/classify", post(classify_score))
        .route("/scores/tally", post(tally_scores))
}

pub fn product_routes() -> Router<AppState> {
    Router::new().route("/products/score-card", post(score_card))
}

pub async fn list_bands() -> Json<BandsResponse> {
    Json(BandsResponse {
        bands: bands().to_vec(),
        unscored: classify(None),
    })
}

#[instrument]
pub async fn classify_score(Json(payload): Json<ClassifyRequest>) -> Json<ScoreClass> {
    let class = classify(payload.score);
    debug!(band = class.band.as_str(), "score classified");
    Json(class)
}

#[instrument(skip(payload), fields(count = payload.scores.len()))]
pub async fn tally_scores(Json(payload): Json<TallyRequest>) -> Json<BandTally> {
    Json(classify_many(payload.scores))
}

#[instrument(skip(payload))]
pub async fn score_card(Json(payload): Json<ScoreCardRequest>) -> Json<ScoreCardResponse> {
    let card = build_score_card(payload);
    debug!(
        band = card.classification.band.as_str(),
        ingredients = card.ingredients.len(),
        additives = card.additives.len(),
        "score card built"
    );
    Json(card)
}
