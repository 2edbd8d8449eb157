use serde::{Deserialize, Serialize};

use super::band::{BandSpec, ScoreClass};
use super::breakdown::{ComponentView, ScoreBreakdown};
use super::risk::{RiskLevel, RiskSummary};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct TallyRequest {
    #[serde(default)]
    pub scores: Vec<Option<f64>>,
}

#[derive(Debug, Serialize)]
pub struct BandsResponse {
    pub bands: Vec<BandSpec>,
    pub unscored: ScoreClass,
}

/// An ingredient or additive as listed on a product record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedItem {
    pub name: String,
    #[serde(default, alias = "riskLevel")]
    pub risk: RiskLevel,
}

/// The score-related slice of a product record.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCardRequest {
    #[serde(default)]
    pub nutrition_score: Option<f64>,
    #[serde(default)]
    pub score_details: Option<ScoreBreakdown>,
    #[serde(default)]
    pub ingredients: Vec<RatedItem>,
    #[serde(default)]
    pub additives: Vec<RatedItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedItemView {
    pub name: String,
    pub risk: RiskLevel,
    pub label: &'static str,
    pub color: &'static str,
    pub background_color: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCardResponse {
    pub score: Option<f64>,
    pub classification: ScoreClass,
    pub breakdown: Option<Vec<ComponentView>>,
    pub ingredients: Vec<RatedItemView>,
    pub additives: Vec<RatedItemView>,
    pub ingredient_risks: RiskSummary,
    pub additive_risks: RiskSummary,
}
