use serde::{Deserialize, Serialize};

use super::band::{classify, ScoreClass};

/// Sub-scores reported by the product service next to the overall score.
///
/// Informational only: the three parts are not expected to add up to the
/// overall score and are never used to recompute it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub ingredients_score: Option<f64>,
    #[serde(default)]
    pub additives_score: Option<f64>,
    #[serde(default, alias = "nutritionScore")]
    pub nutrition_sub_score: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Ingredients,
    Additives,
    Nutrition,
}

struct ComponentSpec {
    component: Component,
    weight: f64,
    max: f64,
}

const COMPONENTS: [ComponentSpec; 3] = [
    ComponentSpec {
        component: Component::Ingredients,
        weight: 0.40,
        max: 40.0,
    },
    ComponentSpec {
        component: Component::Additives,
        weight: 0.30,
        max: 30.0,
    },
    ComponentSpec {
        component: Component::Nutrition,
        weight: 0.30,
        max: 30.0,
    },
];

/// A single sub-score ready for display as a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentView {
    pub component: Component,
    pub raw: Option<f64>,
    pub max: f64,
    pub weight: f64,
    /// `raw / max` as a percentage clamped to [0, 100].
    pub percent: Option<f64>,
    pub class: ScoreClass,
}

impl ScoreBreakdown {
    pub fn raw(&self, component: Component) -> Option<f64> {
        match component {
            Component::Ingredients => self.ingredients_score,
            Component::Additives => self.additives_score,
            Component::Nutrition => self.nutrition_sub_score,
        }
    }

    pub fn components(&self) -> Vec<ComponentView> {
        COMPONENTS
            .iter()
            .map(|spec| {
                let raw = self.raw(spec.component).filter(|v| v.is_finite());
                let percent = raw.map(|v| (v / spec.max * 100.0).clamp(0.0, 100.0));
                ComponentView {
                    component: spec.component,
                    raw,
                    max: spec.max,
                    weight: spec.weight,
                    percent,
                    class: classify(percent),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::band::ScoreBand;

    #[test]
    fn weights_sum_to_one() {
        let sum: f64 = COMPONENTS.iter().map(|c| c.weight).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn components_are_scaled_against_their_max() {
        let breakdown = ScoreBreakdown {
            ingredients_score: Some(30.0),
            additives_score: Some(30.0),
            nutrition_sub_score: Some(6.0),
        };
        let views = breakdown.components();
        assert_eq!(views.len(), 3);

        assert_eq!(views[0].component, Component::Ingredients);
        assert_eq!(views[0].percent, Some(75.0));
        assert_eq!(views[0].class.band, ScoreBand::Good);

        assert_eq!(views[1].percent, Some(100.0));
        assert_eq!(views[1].class.band, ScoreBand::Excellent);

        assert_eq!(views[2].percent, Some(20.0));
        assert_eq!(views[2].class.band, ScoreBand::Bad);
    }

    #[test]
    fn missing_component_is_unscored() {
        let breakdown = ScoreBreakdown {
            ingredients_score: Some(0.0),
            ..Default::default()
        };
        let views = breakdown.components();
        assert_eq!(views[0].class.band, ScoreBand::VeryBad);
        assert_eq!(views[1].percent, None);
        assert_eq!(views[1].class.band, ScoreBand::Unscored);
        assert_eq!(views[2].class.band, ScoreBand::Unscored);
    }

    #[test]
    fn overflowing_component_is_clamped() {
        let breakdown = ScoreBreakdown {
            additives_score: Some(45.0),
            nutrition_sub_score: Some(-3.0),
            ..Default::default()
        };
        let views = breakdown.components();
        assert_eq!(views[1].percent, Some(100.0));
        assert_eq!(views[2].percent, Some(0.0));
    }

    #[test]
    fn deserializes_collaborator_payload() {
        let breakdown: ScoreBreakdown = serde_json::from_str(
            r#"{"ingredientsScore": 32, "additivesScore": 18, "nutritionScore": 21}"#,
        )
        .unwrap();
        assert_eq!(breakdown.raw(Component::Ingredients), Some(32.0));
        assert_eq!(breakdown.raw(Component::Additives), Some(18.0));
        assert_eq!(breakdown.raw(Component::Nutrition), Some(21.0));

        let partial: ScoreBreakdown = serde_json::from_str(r#"{"additivesScore": 12}"#).unwrap();
        assert_eq!(partial.ingredients_score, None);
        assert_eq!(partial.additives_score, Some(12.0));
    }
}
