//! Analysis result types and generator configuration.

use std::fmt;

use serde::Serialize;

/// Bounded password score.
///
/// Raw section points may transiently leave the valid range during
/// accumulation; `Score::new` clamps the final value to `[0, 8]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 8;

    /// Clamps a raw accumulated score into the valid range.
    pub fn new(raw: i64) -> Self {
        Score(raw.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Password strength level.
///
/// Closed enumeration; classification is a pure function of
/// (entropy, score, blacklisted) and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLevel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Maps an analysis outcome to a strength level, first match wins.
    ///
    /// A blacklist hit forces `VeryWeak` regardless of entropy or score.
    /// The 80/50 entropy and 6/4 score thresholds are calibration
    /// constants; changing them silently alters classification.
    pub fn classify(entropy: f64, score: Score, blacklisted: bool) -> Self {
        if blacklisted {
            StrengthLevel::VeryWeak
        } else if entropy >= 80.0 && score.value() >= 6 {
            StrengthLevel::Strong
        } else if entropy >= 50.0 && score.value() >= 4 {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Weak
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one analysis call.
///
/// Field order is part of the reporting contract; downstream renderers
/// rely on it, so new fields go at the end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// The analyzed password, echoed for the report.
    pub password: String,
    /// Length in characters (Unicode scalars, not bytes).
    pub length: usize,
    /// Estimated entropy in bits, rounded to 2 decimals.
    pub entropy: f64,
    pub score: Score,
    pub level: StrengthLevel,
    /// Human-readable findings, in detection order.
    pub remarks: Vec<String>,
    /// Audit timestamp (`YYYY-MM-DD HH:MM:SS`); never a scoring input.
    pub timestamp: String,
}

/// Configuration for the secure password generator.
///
/// Lowercase letters are always included; the flags opt the remaining
/// character classes in. Defaults to a 16-character password drawing
/// from all four classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Target output length in characters; must be at least 1.
    pub length: usize,
    pub include_upper: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_upper: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps_negative() {
        assert_eq!(Score::new(-3).value(), 0);
    }

    #[test]
    fn test_score_clamps_overflow() {
        assert_eq!(Score::new(11).value(), 8);
    }

    #[test]
    fn test_score_in_range_unchanged() {
        for raw in 0..=8 {
            assert_eq!(Score::new(raw).value(), raw as u8);
        }
    }

    #[test]
    fn test_classify_blacklisted_wins() {
        let level = StrengthLevel::classify(120.0, Score::new(8), true);
        assert_eq!(level, StrengthLevel::VeryWeak);
    }

    #[test]
    fn test_classify_strong_needs_both_thresholds() {
        assert_eq!(
            StrengthLevel::classify(80.0, Score::new(6), false),
            StrengthLevel::Strong
        );
        assert_eq!(
            StrengthLevel::classify(79.9, Score::new(8), false),
            StrengthLevel::Medium
        );
        assert_eq!(
            StrengthLevel::classify(120.0, Score::new(5), false),
            StrengthLevel::Medium
        );
    }

    #[test]
    fn test_classify_medium_and_weak() {
        assert_eq!(
            StrengthLevel::classify(50.0, Score::new(4), false),
            StrengthLevel::Medium
        );
        assert_eq!(
            StrengthLevel::classify(49.9, Score::new(8), false),
            StrengthLevel::Weak
        );
        assert_eq!(
            StrengthLevel::classify(100.0, Score::new(3), false),
            StrengthLevel::Weak
        );
    }

    #[test]
    fn test_level_display_strings() {
        assert_eq!(StrengthLevel::VeryWeak.to_string(), "Very Weak");
        assert_eq!(StrengthLevel::Strong.to_string(), "Strong");
    }

    #[test]
    fn test_result_serializes_in_report_field_order() {
        let result = AnalysisResult {
            password: "abc".to_string(),
            length: 3,
            entropy: 14.1,
            score: Score::new(1),
            level: StrengthLevel::Weak,
            remarks: vec!["Too short (min 8 chars)".to_string()],
            timestamp: "2025-01-01 00:00:00".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let positions: Vec<usize> = [
            "\"password\"",
            "\"length\"",
            "\"entropy\"",
            "\"score\"",
            "\"level\"",
            "\"remarks\"",
            "\"timestamp\"",
        ]
        .iter()
        .map(|k| json.find(k).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains("\"score\":1"));
        assert!(json.contains("\"level\":\"Weak\""));
    }
}
