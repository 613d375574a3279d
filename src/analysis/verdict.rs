//! Verdict selection
//!
//! Keyword groups are checked in priority order against the lower-cased
//! subject; the first group with any hit decides the verdict.

use serde::Serialize;

/// Canned analysis outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    HighMisinformationRisk,
    PotentiallyMisleading,
    ScamAlert,
    Credible,
}

/// Keyword groups in priority order
const KEYWORD_RULES: &[(&[&str], Verdict)] = &[
    (&["fake", "false"], Verdict::HighMisinformationRisk),
    (&["misleading", "exaggerated"], Verdict::PotentiallyMisleading),
    (&["scam", "fraud"], Verdict::ScamAlert),
];

impl Verdict {
    /// Pick a verdict for `text` by case-insensitive substring matching
    pub fn classify(text: &str) -> Self {
        let subject = text.to_lowercase();
        KEYWORD_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| subject.contains(k)))
            .map_or(Self::Credible, |(_, verdict)| *verdict)
    }

    pub const fn explanation(self) -> &'static str {
        match self {
            Self::HighMisinformationRisk => {
                "This content contains claims that are known to be false or highly suspicious."
            }
            Self::PotentiallyMisleading => {
                "This content appears to contain exaggerated or potentially misleading information."
            }
            Self::ScamAlert => {
                "Warning: This content matches patterns commonly seen in fraudulent schemes."
            }
            Self::Credible => "This content appears to be credible based on our analysis.",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighMisinformationRisk => "HIGH_MISINFORMATION_RISK",
            Self::PotentiallyMisleading => "POTENTIALLY_MISLEADING",
            Self::ScamAlert => "SCAM_ALERT",
            Self::Credible => "CREDIBLE",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_any_case() {
        assert_eq!(Verdict::classify("this is FAKE news"), Verdict::HighMisinformationRisk);
        assert_eq!(Verdict::classify("Fake"), Verdict::HighMisinformationRisk);
        assert_eq!(Verdict::classify("a False claim"), Verdict::HighMisinformationRisk);
    }

    #[test]
    fn test_misleading() {
        assert_eq!(
            Verdict::classify("slightly Exaggerated numbers"),
            Verdict::PotentiallyMisleading
        );
        assert_eq!(Verdict::classify("misleading"), Verdict::PotentiallyMisleading);
    }

    #[test]
    fn test_scam() {
        assert_eq!(Verdict::classify("Win a prize! SCAM?"), Verdict::ScamAlert);
        assert_eq!(Verdict::classify("bank fraud warning"), Verdict::ScamAlert);
    }

    #[test]
    fn test_credible() {
        assert_eq!(Verdict::classify("The sun rises in the east"), Verdict::Credible);
        assert_eq!(Verdict::classify(""), Verdict::Credible);
    }

    #[test]
    fn test_priority_order() {
        // first group wins regardless of position in the text
        assert_eq!(
            Verdict::classify("scam fraud misleading fake"),
            Verdict::HighMisinformationRisk
        );
        assert_eq!(
            Verdict::classify("a scam with exaggerated returns"),
            Verdict::PotentiallyMisleading
        );
    }

    #[test]
    fn test_substring_match() {
        // "falsehood" contains "false"; "scammer" contains "scam"
        assert_eq!(Verdict::classify("falsehood"), Verdict::HighMisinformationRisk);
        assert_eq!(Verdict::classify("scammer"), Verdict::ScamAlert);
    }

    #[test]
    fn test_serialized_labels() {
        assert_eq!(
            serde_json::to_string(&Verdict::HighMisinformationRisk).unwrap(),
            r#""HIGH_MISINFORMATION_RISK""#
        );
        assert_eq!(
            serde_json::to_string(&Verdict::ScamAlert).unwrap(),
            r#""SCAM_ALERT""#
        );
        assert_eq!(Verdict::PotentiallyMisleading.to_string(), "POTENTIALLY_MISLEADING");
        assert_eq!(Verdict::Credible.to_string(), "CREDIBLE");
    }
}
