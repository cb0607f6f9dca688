//! Password analyzer - main analysis pipeline.

use chrono::Local;
use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::Blacklist;
use crate::entropy::estimate_entropy;
use crate::sections::{blacklist_section, length_section, pattern_section, variety_section};
use crate::types::{AnalysisResult, Score, StrengthLevel};

/// Analyzes password strength and returns a structured result.
///
/// Sections run in a fixed order (length, variety, patterns, blacklist)
/// and their remarks are reported in that order. Entropy is estimated
/// independently of scoring, from the unmodified password. The result
/// is deterministic for a given (password, blacklist) pair apart from
/// the audit timestamp.
pub fn analyze(password: &SecretString, blacklist: Option<&Blacklist>) -> AnalysisResult {
    let pwd = password.expose_secret();

    let mut raw_score: i64 = 0;
    let mut remarks: Vec<&'static str> = Vec::new();

    for outcome in [
        length_section(password),
        variety_section(password),
        pattern_section(password),
    ] {
        raw_score += outcome.points;
        remarks.extend(outcome.remarks);
    }

    let mut blacklisted = false;
    if let Some(outcome) = blacklist_section(password, blacklist) {
        blacklisted = true;
        raw_score += outcome.points;
        remarks.extend(outcome.remarks);
    }

    let entropy = estimate_entropy(pwd);
    let score = Score::new(raw_score);
    let level = StrengthLevel::classify(entropy, score, blacklisted);

    AnalysisResult {
        password: pwd.to_string(),
        length: pwd.chars().count(),
        entropy,
        score,
        level,
        remarks: remarks.into_iter().map(str::to_string).collect(),
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}
