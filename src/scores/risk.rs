use serde::{Deserialize, Deserializer, Serialize};

/// Health risk attached to an ingredient or additive, least severe first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    Unknown,
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Lenient parse of the product service's risk strings. Anything
    /// unrecognised is `Unknown` rather than an error.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return RiskLevel::Unknown;
        };
        let folded: String = raw.trim().to_lowercase().chars().map(fold_accent).collect();
        match folded.as_str() {
            "low" | "faible" => RiskLevel::Low,
            "moderate" | "medium" | "modere" | "moyen" => RiskLevel::Moderate,
            "high" | "eleve" => RiskLevel::High,
            _ => RiskLevel::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Risque faible",
            RiskLevel::Moderate => "Risque modere",
            RiskLevel::High => "Risque eleve",
            RiskLevel::Unknown => "Risque inconnu",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "riskLow",
            RiskLevel::Moderate => "riskModerate",
            RiskLevel::High => "riskHigh",
            RiskLevel::Unknown => "riskUnknown",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            RiskLevel::Low => "riskLowBg",
            RiskLevel::Moderate => "riskModerateBg",
            RiskLevel::High => "riskHighBg",
            RiskLevel::Unknown => "riskUnknownBg",
        }
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(RiskLevel::parse(raw.as_deref()))
    }
}

fn fold_accent(c: char) -> char {
    match c {
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'à' | 'â' => 'a',
        'î' | 'ï' => 'i',
        'ô' => 'o',
        'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        other => other,
    }
}

/// Counts per risk level plus the most severe known level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskSummary {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
    pub unknown: usize,
    pub worst: Option<RiskLevel>,
}

pub fn summarize_risks<I>(levels: I) -> RiskSummary
where
    I: IntoIterator<Item = RiskLevel>,
{
    levels
        .into_iter()
        .fold(RiskSummary::default(), |mut summary, level| {
            match level {
                RiskLevel::Low => summary.low += 1,
                RiskLevel::Moderate => summary.moderate += 1,
                RiskLevel::High => summary.high += 1,
                RiskLevel::Unknown => summary.unknown += 1,
            }
            if level != RiskLevel::Unknown {
                summary.worst = summary.worst.max(Some(level));
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_french_levels() {
        assert_eq!(RiskLevel::parse(Some("low")), RiskLevel::Low);
        assert_eq!(RiskLevel::parse(Some("Faible")), RiskLevel::Low);
        assert_eq!(RiskLevel::parse(Some(" MEDIUM ")), RiskLevel::Moderate);
        assert_eq!(RiskLevel::parse(Some("modéré")), RiskLevel::Moderate);
        assert_eq!(RiskLevel::parse(Some("Élevé")), RiskLevel::High);
        assert_eq!(RiskLevel::parse(Some("high")), RiskLevel::High);
    }

    #[test]
    fn unrecognised_or_missing_is_unknown() {
        assert_eq!(RiskLevel::parse(None), RiskLevel::Unknown);
        assert_eq!(RiskLevel::parse(Some("")), RiskLevel::Unknown);
        assert_eq!(RiskLevel::parse(Some("toxic?")), RiskLevel::Unknown);
    }

    #[test]
    fn deserializes_null_and_strings() {
        let levels: Vec<RiskLevel> =
            serde_json::from_str(r#"["eleve", null, "low", "whatever"]"#).unwrap();
        assert_eq!(
            levels,
            [RiskLevel::High, RiskLevel::Unknown, RiskLevel::Low, RiskLevel::Unknown]
        );
    }

    #[test]
    fn summary_tracks_worst_known_level() {
        let summary = summarize_risks([
            RiskLevel::Low,
            RiskLevel::Unknown,
            RiskLevel::Moderate,
            RiskLevel::Low,
        ]);
        assert_eq!(summary.low, 2);
        assert_eq!(summary.moderate, 1);
        assert_eq!(summary.high, 0);
        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.worst, Some(RiskLevel::Moderate));
    }

    #[test]
    fn summary_of_unknowns_has_no_worst() {
        let summary = summarize_risks([RiskLevel::Unknown, RiskLevel::Unknown]);
        assert_eq!(summary.unknown, 2);
        assert_eq!(summary.worst, None);
    }

    #[test]
    fn tokens_are_distinct_per_level() {
        let levels = [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High, RiskLevel::Unknown];
        for (i, a) in levels.iter().enumerate() {
            for b in &levels[i + 1..] {
                assert_ne!(a.color(), b.color());
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
