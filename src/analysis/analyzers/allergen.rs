use super::clamp_score;
use crate::analysis::domain::{HealthProfile, Severity, SubRiskResult};
use crate::analysis::reference::ALLERGENS;

const POINTS_PER_MATCH: f64 = 15.0;
const PROFILE_MATCH_MULTIPLIER: f64 = 3.0;

/// Scans parsed ingredients for known allergens. Matching is substring
/// containment, so one ingredient can surface several allergens and the same
/// allergen can be reported once per ingredient it appears in.
pub fn analyze_allergens(
    ingredients: &[String],
    profile: Option<&HealthProfile>,
) -> (SubRiskResult, Vec<String>) {
    let mut identified = Vec::new();
    let mut details = Vec::new();

    for ingredient in ingredients {
        for allergen in ALLERGENS {
            if ingredient.contains(allergen) {
                identified.push(allergen.to_string());

                let personal = profile.map(|p| p.has_allergy(allergen)).unwrap_or(false);
                if personal {
                    details.push(format!(
                        "CRITICAL: Contains {allergen} - matches your allergy profile"
                    ));
                } else {
                    details.push(format!("Contains {allergen}"));
                }
            }
        }
    }

    let personal_match = profile
        .map(|p| identified.iter().any(|allergen| p.has_allergy(allergen)))
        .unwrap_or(false);
    let multiplier = if personal_match {
        PROFILE_MATCH_MULTIPLIER
    } else {
        1.0
    };

    let score = clamp_score(identified.len() as f64 * POINTS_PER_MATCH * multiplier);
    let severity = severity_for(score);

    (
        SubRiskResult {
            score,
            severity,
            details,
        },
        identified,
    )
}

fn severity_for(score: f64) -> Severity {
    if score > 80.0 {
        Severity::Critical
    } else if score > 50.0 {
        Severity::High
    } else if score > 20.0 {
        Severity::Medium
    } else {
        Severity::Low
    }
}
