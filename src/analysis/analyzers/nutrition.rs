use super::clamp_score;
use crate::analysis::domain::{NutrientConcern, NutritionFacts, Severity, SubRiskResult};
use crate::analysis::reference::thresholds;

/// Threshold evaluation of nutrition facts. Each nutrient contributes
/// independently: sodium and sugar score one tier at most, trans fat scores a
/// flat 30 above 0.5g. A missing or entirely empty facts block short-circuits
/// to score 20 / MEDIUM.
pub fn analyze_nutrition(facts: Option<&NutritionFacts>) -> (SubRiskResult, Vec<NutrientConcern>) {
    let facts = match facts {
        Some(facts) if !facts.is_empty() => facts,
        _ => {
            return (
                SubRiskResult {
                    score: 20.0,
                    severity: Severity::Medium,
                    details: vec!["Nutrition information not available".to_string()],
                },
                Vec::new(),
            )
        }
    };

    let mut score = 0.0;
    let mut details = Vec::new();
    let mut concerns = Vec::new();

    let sodium = facts.sodium_mg.unwrap_or(0.0);
    if sodium > thresholds::SODIUM_VERY_HIGH_MG {
        concerns.push(concern("sodium", "very_high", sodium));
        details.push(format!("Very high sodium content: {sodium}mg"));
        score += 25.0;
    } else if sodium > thresholds::SODIUM_HIGH_MG {
        concerns.push(concern("sodium", "high", sodium));
        details.push(format!("High sodium content: {sodium}mg"));
        score += 15.0;
    }

    let sugar = facts.sugar_g.unwrap_or(0.0);
    if sugar > thresholds::SUGAR_VERY_HIGH_G {
        concerns.push(concern("sugar", "very_high", sugar));
        details.push(format!("Very high sugar content: {sugar}g"));
        score += 20.0;
    } else if sugar > thresholds::SUGAR_HIGH_G {
        concerns.push(concern("sugar", "high", sugar));
        details.push(format!("High sugar content: {sugar}g"));
        score += 10.0;
    }

    let trans_fat = facts.trans_fat_g.unwrap_or(0.0);
    if trans_fat > thresholds::TRANS_FAT_ANY_G {
        concerns.push(concern("trans_fat", "any", trans_fat));
        details.push(format!("Contains trans fat: {trans_fat}g"));
        score += 30.0;
    }

    let score = clamp_score(score);
    let severity = severity_for(score);

    (
        SubRiskResult {
            score,
            severity,
            details,
        },
        concerns,
    )
}

fn concern(nutrient: &str, level: &str, value: f64) -> NutrientConcern {
    NutrientConcern {
        nutrient: nutrient.to_string(),
        level: level.to_string(),
        value,
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
