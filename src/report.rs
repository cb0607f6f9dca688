//! Text report rendering for analysis results.

use std::fmt::Write;

use crate::types::AnalysisResult;

/// Renders an analysis result as a human-readable report.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    // write! into a String cannot fail
    let _ = writeln!(out, "\n Password Strength Report ");
    let _ = writeln!(out, "-------------------------------");
    let _ = writeln!(out, "Password : {}", result.password);
    let _ = writeln!(out, "Length   : {}", result.length);
    let _ = writeln!(out, "Entropy  : {} bits", result.entropy);
    let _ = writeln!(out, "Strength : {}", result.level);
    let _ = writeln!(out, "Score    : {}", result.score);

    if !result.remarks.is_empty() {
        let _ = writeln!(out, "\nSuggestions:");
        for remark in &result.remarks {
            let _ = writeln!(out, " - {remark}");
        }
    }

    out
}
