use serde::{Deserialize, Serialize};

/// Qualitative category a nutrition score falls into.
///
/// Scored bands are declared in ascending threshold order. `Unscored` sits
/// apart and has no rank: it is not "worse" than `VeryBad`, it means no score
/// exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    VeryBad,
    Bad,
    Mediocre,
    Good,
    Excellent,
    Unscored,
}

impl ScoreBand {
    /// Position of a scored band in the table, `None` for `Unscored`.
    pub fn rank(self) -> Option<u8> {
        match self {
            ScoreBand::VeryBad => Some(0),
            ScoreBand::Bad => Some(1),
            ScoreBand::Mediocre => Some(2),
            ScoreBand::Good => Some(3),
            ScoreBand::Excellent => Some(4),
            ScoreBand::Unscored => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::VeryBad => "very_bad",
            ScoreBand::Bad => "bad",
            ScoreBand::Mediocre => "mediocre",
            ScoreBand::Good => "good",
            ScoreBand::Excellent => "excellent",
            ScoreBand::Unscored => "unscored",
        }
    }
}

/// One row of the band table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandSpec {
    pub lower_bound: f64,
    pub band: ScoreBand,
    pub label: &'static str,
    pub color: &'static str,
    pub background: &'static str,
}

// Ascending lower bounds; the first row has no effective lower bound.
static BANDS: [BandSpec; 5] = [
    BandSpec {
        lower_bound: 0.0,
        band: ScoreBand::VeryBad,
        label: "Tres mauvais",
        color: "scoreVeryBad",
        background: "scoreVeryBadBg",
    },
    BandSpec {
        lower_bound: 20.0,
        band: ScoreBand::Bad,
        label: "Mauvais",
        color: "scoreBad",
        background: "scoreBadBg",
    },
    BandSpec {
        lower_bound: 40.0,
        band: ScoreBand::Mediocre,
        label: "Moyen",
        color: "scoreMediocre",
        background: "scoreMediocreBg",
    },
    BandSpec {
        lower_bound: 60.0,
        band: ScoreBand::Good,
        label: "Bon",
        color: "scoreGood",
        background: "scoreGoodBg",
    },
    BandSpec {
        lower_bound: 80.0,
        band: ScoreBand::Excellent,
        label: "Excellent",
        color: "scoreExcellent",
        background: "scoreExcellentBg",
    },
];

static UNSCORED: BandSpec = BandSpec {
    lower_bound: f64::NAN,
    band: ScoreBand::Unscored,
    label: "Non evalue",
    color: "scoreNeutral",
    background: "scoreNeutralBg",
};

/// The scored bands, lowest first.
pub fn bands() -> &'static [BandSpec] {
    &BANDS
}

/// Display semantics of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreClass {
    pub band: ScoreBand,
    pub label: &'static str,
    pub color: &'static str,
    pub background_color: &'static str,
}

impl From<&BandSpec> for ScoreClass {
    fn from(spec: &BandSpec) -> Self {
        Self {
            band: spec.band,
            label: spec.label,
            color: spec.color,
            background_color: spec.background,
        }
    }
}

/// Maps a score to its band, label and color tokens.
///
/// Total over every input: an absent score (or `NaN`) is `Unscored`, values
/// below 0 land in `VeryBad` and values above 100 in `Excellent`. Comparison
/// is `>=` on the raw value, no rounding, so `19.999` is still `VeryBad`.
pub fn classify(score: Option<f64>) -> ScoreClass {
    let Some(score) = score.filter(|s| !s.is_nan()) else {
        return ScoreClass::from(&UNSCORED);
    };

    let spec = BANDS
        .iter()
        .rev()
        .find(|spec| score >= spec.lower_bound)
        .unwrap_or(&BANDS[0]);
    ScoreClass::from(spec)
}

/// Per-band counts for aggregate views such as filter chips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandTally {
    pub very_bad: usize,
    pub bad: usize,
    pub mediocre: usize,
    pub good: usize,
    pub excellent: usize,
    pub unscored: usize,
}

impl BandTally {
    pub fn get(&self, band: ScoreBand) -> usize {
        match band {
            ScoreBand::VeryBad => self.very_bad,
            ScoreBand::Bad => self.bad,
            ScoreBand::Mediocre => self.mediocre,
            ScoreBand::Good => self.good,
            ScoreBand::Excellent => self.excellent,
            ScoreBand::Unscored => self.unscored,
        }
    }

    pub fn total(&self) -> usize {
        self.very_bad + self.bad + self.mediocre + self.good + self.excellent + self.unscored
    }

    fn bump(&mut self, band: ScoreBand) {
        let slot = match band {
            ScoreBand::VeryBad => &mut self.very_bad,
            ScoreBand::Bad => &mut self.bad,
            ScoreBand::Mediocre => &mut self.mediocre,
            ScoreBand::Good => &mut self.good,
            ScoreBand::Excellent => &mut self.excellent,
            ScoreBand::Unscored => &mut self.unscored,
        };
        *slot += 1;
    }
}

pub fn classify_many<I>(scores: I) -> BandTally
where
    I: IntoIterator<Item = Option<f64>>,
{
    scores
        .into_iter()
        .fold(BandTally::default(), |mut tally, score| {
            tally.bump(classify(score).band);
            tally
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band_of(score: f64) -> ScoreBand {
        classify(Some(score)).band
    }

    #[test]
    fn zero_is_very_bad_not_unscored() {
        let class = classify(Some(0.0));
        assert_eq!(class.band, ScoreBand::VeryBad);
        assert_eq!(class.label, "Tres mauvais");
        assert_eq!(class.color, "scoreVeryBad");
        assert_eq!(class.background_color, "scoreVeryBadBg");
    }

    #[test]
    fn absent_score_is_unscored() {
        let class = classify(None);
        assert_eq!(class.band, ScoreBand::Unscored);
        assert_eq!(class.label, "Non evalue");
        assert_eq!(class.color, "scoreNeutral");
        assert_eq!(class.background_color, "scoreNeutralBg");
        assert_ne!(class, classify(Some(0.0)));
    }

    #[test]
    fn boundaries_are_lower_inclusive() {
        assert_eq!(band_of(20.0), ScoreBand::Bad);
        assert_eq!(band_of(40.0), ScoreBand::Mediocre);
        assert_eq!(band_of(60.0), ScoreBand::Good);
        assert_eq!(band_of(80.0), ScoreBand::Excellent);
        assert_eq!(band_of(100.0), ScoreBand::Excellent);
    }

    #[test]
    fn fractional_scores_are_not_rounded() {
        assert_eq!(band_of(19.999), ScoreBand::VeryBad);
        assert_eq!(band_of(79.9999), ScoreBand::Good);
        assert_eq!(band_of(20.0001), ScoreBand::Bad);
    }

    #[test]
    fn out_of_range_scores_degrade_to_edge_bands() {
        assert_eq!(band_of(-5.0), ScoreBand::VeryBad);
        assert_eq!(band_of(150.0), ScoreBand::Excellent);
        assert_eq!(band_of(f64::NEG_INFINITY), ScoreBand::VeryBad);
        assert_eq!(band_of(f64::INFINITY), ScoreBand::Excellent);
    }

    #[test]
    fn nan_is_unscored() {
        assert_eq!(band_of(f64::NAN), ScoreBand::Unscored);
    }

    #[test]
    fn labels_match_table() {
        let labels: Vec<_> = [10.0, 30.0, 50.0, 70.0, 90.0]
            .into_iter()
            .map(|s| classify(Some(s)).label)
            .collect();
        assert_eq!(labels, ["Tres mauvais", "Mauvais", "Moyen", "Bon", "Excellent"]);
    }

    #[test]
    fn band_never_decreases_as_score_increases() {
        let mut previous = 0u8;
        let mut score = -10.0;
        while score <= 110.0 {
            let rank = classify(Some(score)).band.rank().expect("scored band");
            assert!(rank >= previous, "rank dropped at {score}");
            previous = rank;
            score += 0.25;
        }
        assert_eq!(previous, 4);
    }

    #[test]
    fn table_is_strictly_ascending() {
        for pair in bands().windows(2) {
            assert!(pair[0].lower_bound < pair[1].lower_bound);
            assert!(pair[0].band.rank() < pair[1].band.rank());
        }
    }

    #[test]
    fn tally_counts_every_band_including_unscored() {
        let tally = classify_many([
            Some(0.0),
            None,
            Some(25.0),
            Some(45.0),
            Some(65.0),
            Some(85.0),
            Some(99.0),
            None,
        ]);
        assert_eq!(tally.very_bad, 1);
        assert_eq!(tally.bad, 1);
        assert_eq!(tally.mediocre, 1);
        assert_eq!(tally.good, 1);
        assert_eq!(tally.excellent, 2);
        assert_eq!(tally.get(ScoreBand::Unscored), 2);
        assert_eq!(tally.total(), 8);
    }

    #[test]
    fn tally_ignores_input_order() {
        let scores = vec![Some(12.0), None, Some(81.0), Some(40.0), Some(40.0)];
        let mut reversed = scores.clone();
        reversed.reverse();
        assert_eq!(classify_many(scores), classify_many(reversed));
    }

    #[test]
    fn empty_tally_is_zero() {
        let tally = classify_many(std::iter::empty());
        assert_eq!(tally, BandTally::default());
        assert_eq!(tally.total(), 0);
    }
}
