use super::clamp_score;
use crate::analysis::domain::{AdditiveFinding, Severity, SubRiskResult};
use crate::analysis::reference::HARMFUL_ADDITIVES;

const POINTS_PER_ADDITIVE: f64 = 20.0;

/// Scans parsed ingredients for additives with documented health concerns.
/// Each distinct additive is scored once no matter how many ingredients it
/// appears in. This analyzer has no CRITICAL tier.
pub fn analyze_additives(ingredients: &[String]) -> (SubRiskResult, Vec<AdditiveFinding>) {
    let mut findings: Vec<AdditiveFinding> = Vec::new();
    let mut details = Vec::new();

    for (additive, concern) in HARMFUL_ADDITIVES {
        let matched = ingredients
            .iter()
            .any(|ingredient| ingredient.contains(additive));
        if matched {
            findings.push(AdditiveFinding {
                name: additive.to_string(),
                concern: concern.to_string(),
            });
            details.push(format!("Contains {additive}: {concern}"));
        }
    }

    let score = clamp_score(findings.len() as f64 * POINTS_PER_ADDITIVE);
    let severity = severity_for(score);

    (
        SubRiskResult {
            score,
            severity,
            details,
        },
        findings,
    )
}

fn severity_for(score: f64) -> Severity {
    if score > 60.0 {
        Severity::High
    } else if score > 30.0 {
        Severity::Medium
    } else {
        Severity::Low
    }
}
