use super::band::classify;
use super::dto::{RatedItem, RatedItemView, ScoreCardRequest, ScoreCardResponse};
use super::risk::summarize_risks;

/// Everything a product detail screen needs to render the score section.
pub fn build_score_card(req: ScoreCardRequest) -> ScoreCardResponse {
    let ingredient_risks = summarize_risks(req.ingredients.iter().map(|i| i.risk));
    let additive_risks = summarize_risks(req.additives.iter().map(|a| a.risk));

    ScoreCardResponse {
        score: req.nutrition_score,
        classification: classify(req.nutrition_score),
        breakdown: req.score_details.map(|details| details.components()),
        ingredients: req.ingredients.into_iter().map(item_view).collect(),
        additives: req.additives.into_iter().map(item_view).collect(),
        ingredient_risks,
        additive_risks,
    }
}

fn item_view(item: RatedItem) -> RatedItemView {
    RatedItemView {
        name: item.name,
        risk: item.risk,
        label: item.risk.label(),
        color: item.risk.color(),
        background_color: item.risk.background(),
    }
}
