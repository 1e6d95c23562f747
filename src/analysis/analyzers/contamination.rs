use super::clamp_score;
use crate::analysis::domain::{Severity, SubRiskResult};
use crate::analysis::reference::{HIGH_RISK_CATEGORIES, RECALL_PRONE_INGREDIENTS};

/// Keyword heuristics over the product category and raw ingredient text.
/// Factors are additive: high-risk category +20, raw/unpasteurized +30,
/// recall-prone ingredients +15.
pub fn analyze_contamination(category: &str, raw_ingredients: &str) -> SubRiskResult {
    let category = category.to_lowercase();
    let ingredients = raw_ingredients.to_lowercase();

    let mut score = 0.0;
    let mut details = Vec::new();

    if HIGH_RISK_CATEGORIES
        .iter()
        .any(|risky| category.contains(risky))
    {
        details.push("High-risk category for bacterial contamination".to_string());
        score += 20.0;
    }

    if category.contains("raw") || ingredients.contains("unpasteurized") {
        details.push("Raw/unpasteurized product - higher contamination risk".to_string());
        score += 30.0;
    }

    if RECALL_PRONE_INGREDIENTS
        .iter()
        .any(|prone| ingredients.contains(prone))
    {
        details.push("Contains ingredients with history of contamination issues".to_string());
        score += 15.0;
    }

    if details.is_empty() {
        details.push("Low contamination risk".to_string());
    }

    let score = clamp_score(score);
    let severity = severity_for(score);

    SubRiskResult {
        score,
        severity,
        details,
    }
}

fn severity_for(score: f64) -> Severity {
    if score > 40.0 {
        Severity::High
    } else if score > 20.0 {
        Severity::Medium
    } else {
        Severity::Low
    }
}
