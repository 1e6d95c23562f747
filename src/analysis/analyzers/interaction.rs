use super::clamp_score;
use crate::analysis::domain::{HealthProfile, Severity, SubRiskResult};
use crate::analysis::reference::INTERACTION_INGREDIENTS;

const POINTS_PER_MATCH: f64 = 25.0;

/// Flags ingredients known to interact with medications. Runs only when the
/// health profile declares at least one medical condition; otherwise the
/// analyzer is skipped with a zero score.
pub fn analyze_interactions(
    ingredients: &[String],
    profile: Option<&HealthProfile>,
) -> SubRiskResult {
    let applicable = profile
        .map(HealthProfile::has_medical_conditions)
        .unwrap_or(false);
    if !applicable {
        return SubRiskResult {
            score: 0.0,
            severity: Severity::Low,
            details: vec!["No medical conditions specified".to_string()],
        };
    }

    let mut matches = 0usize;
    let mut details = Vec::new();

    for ingredient in ingredients {
        for (name, warning) in INTERACTION_INGREDIENTS {
            if ingredient.contains(name) {
                matches += 1;
                details.push(format!("{name}: {warning}"));
            }
        }
    }

    if details.is_empty() {
        details.push("No known drug interactions".to_string());
    }

    let score = clamp_score(matches as f64 * POINTS_PER_MATCH);
    let severity = severity_for(score);

    SubRiskResult {
        score,
        severity,
        details,
    }
}

fn severity_for(score: f64) -> Severity {
    if score > 50.0 {
        Severity::High
    } else if score > 25.0 {
        Severity::Medium
    } else {
        Severity::Low
    }
}
