use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk tier derived from a numeric score via fixed per-analyzer thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Product fields consumed by the scoring pipeline. All text is optional in
/// practice; missing fields degrade to empty rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub product_name: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub nutrition_facts: Option<NutritionFacts>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub product_description: Option<String>,
}

impl ProductSnapshot {
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

/// Per-serving nutrition figures. Absent values score as zero; a facts block
/// with no values at all is treated the same as a missing block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    #[serde(default)]
    pub sodium_mg: Option<f64>,
    #[serde(default)]
    pub sugar_g: Option<f64>,
    #[serde(default)]
    pub saturated_fat_g: Option<f64>,
    #[serde(default)]
    pub trans_fat_g: Option<f64>,
}

impl NutritionFacts {
    pub fn is_empty(&self) -> bool {
        self.sodium_mg.is_none()
            && self.sugar_g.is_none()
            && self.saturated_fat_g.is_none()
            && self.trans_fat_g.is_none()
    }
}

/// Caller-supplied health context used to personalize certain risk scores.
/// Immutable for the duration of one analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub pregnancy_status: Option<bool>,
}

impl HealthProfile {
    pub fn has_allergy(&self, allergen: &str) -> bool {
        self.allergies.iter().any(|entry| entry == allergen)
    }

    pub fn has_medical_conditions(&self) -> bool {
        !self.medical_conditions.is_empty()
    }
}

/// Output common to every analyzer: a clamped score, its severity tier, and
/// the human-readable findings behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubRiskResult {
    pub score: f64,
    pub severity: Severity,
    pub details: Vec<String>,
}

impl SubRiskResult {
    pub fn failed() -> Self {
        Self {
            score: 0.0,
            severity: Severity::Low,
            details: vec!["Analysis failed".to_string()],
        }
    }
}

/// Harmful additive matched in the ingredient list, with its concern text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditiveFinding {
    pub name: String,
    pub concern: String,
}

/// Nutrient that crossed a threshold, with the offending value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientConcern {
    pub nutrient: String,
    pub level: String,
    pub value: f64,
}

/// Final fused report handed to the boundary layer. Constructed fresh per
/// request and never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallRiskReport {
    pub overall_risk_score: f64,
    pub risk_level: Severity,
    pub confidence_score: f64,
    pub allergen_risk: SubRiskResult,
    pub nutritional_risk: SubRiskResult,
    pub additive_risk: SubRiskResult,
    pub contamination_risk: SubRiskResult,
    pub interaction_risk: SubRiskResult,
    pub identified_allergens: Vec<String>,
    pub harmful_additives: Vec<AdditiveFinding>,
    pub nutritional_concerns: Vec<NutrientConcern>,
    pub safety_warnings: Vec<String>,
    pub ai_summary: String,
    pub ai_recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl OverallRiskReport {
    /// Fixed report returned when the scoring pipeline itself fails. Callers
    /// always receive a well-formed report, never an error.
    pub fn degraded() -> Self {
        Self {
            overall_risk_score: 50.0,
            risk_level: Severity::Medium,
            confidence_score: 30.0,
            allergen_risk: SubRiskResult::failed(),
            nutritional_risk: SubRiskResult::failed(),
            additive_risk: SubRiskResult::failed(),
            contamination_risk: SubRiskResult::failed(),
            interaction_risk: SubRiskResult::failed(),
            identified_allergens: Vec::new(),
            harmful_additives: Vec::new(),
            nutritional_concerns: Vec::new(),
            safety_warnings: vec!["Analysis error - please try again".to_string()],
            ai_summary: "Analysis could not be completed due to technical error".to_string(),
            ai_recommendations: vec![
                "Please try again or consult a healthcare professional".to_string(),
            ],
            generated_at: Utc::now(),
        }
    }
}
