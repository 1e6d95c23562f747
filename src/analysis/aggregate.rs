use crate::analysis::domain::{Severity, SubRiskResult};

/// Fixed fusion weights, summing to 1.0. Components are already clamped to
/// [0, 100], so the weighted sum needs no further clamping.
const ALLERGEN_WEIGHT: f64 = 0.30;
const ADDITIVE_WEIGHT: f64 = 0.25;
const NUTRITION_WEIGHT: f64 = 0.20;
const CONTAMINATION_WEIGHT: f64 = 0.15;
const INTERACTION_WEIGHT: f64 = 0.10;

/// Weighted overall score, rounded to one decimal place.
pub fn overall_score(
    allergen: &SubRiskResult,
    additive: &SubRiskResult,
    nutrition: &SubRiskResult,
    contamination: &SubRiskResult,
    interaction: &SubRiskResult,
) -> f64 {
    let raw = allergen.score * ALLERGEN_WEIGHT
        + additive.score * ADDITIVE_WEIGHT
        + nutrition.score * NUTRITION_WEIGHT
        + contamination.score * CONTAMINATION_WEIGHT
        + interaction.score * INTERACTION_WEIGHT;

    (raw * 10.0).round() / 10.0
}

/// Overall risk tier. Boundaries are inclusive at the lower bound.
pub fn risk_level(score: f64) -> Severity {
    if score >= 80.0 {
        Severity::Critical
    } else if score >= 60.0 {
        Severity::High
    } else if score >= 30.0 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Consolidated warnings in fixed order: allergen, additive, nutrition, then
/// an affirmative fallback when nothing triggered.
pub fn safety_warnings(
    allergen: &SubRiskResult,
    additive: &SubRiskResult,
    nutrition: &SubRiskResult,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if matches!(allergen.severity, Severity::High | Severity::Critical) {
        warnings.push("Contains known allergens - check ingredient list carefully".to_string());
    }
    if additive.severity == Severity::High {
        warnings.push("Contains potentially harmful additives".to_string());
    }
    if nutrition.severity == Severity::High {
        warnings.push("High in sodium, sugar, or unhealthy fats".to_string());
    }

    if warnings.is_empty() {
        warnings.push("No major safety concerns identified".to_string());
    }

    warnings
}
