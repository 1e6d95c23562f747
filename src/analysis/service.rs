use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{error, info, warn};

use super::aggregate::{overall_score, risk_level, safety_warnings};
use super::analyzers::{
    analyze_additives, analyze_allergens, analyze_contamination, analyze_interactions,
    analyze_nutrition,
};
use super::domain::{
    AdditiveFinding, HealthProfile, NutrientConcern, OverallRiskReport, ProductSnapshot,
    SubRiskResult,
};
use super::parser::parse_ingredients;
use crate::advisory::{AdvisorySummarizer, AdvisorySummary};

/// Orchestrates the deterministic analyzer fan-out and the best-effort
/// advisory call, fusing both into one report. Stateless between requests.
pub struct ProductRiskService<S> {
    advisory: Arc<S>,
    advisory_timeout: Duration,
}

/// Joined output of the five deterministic analyzers.
struct DeterministicScores {
    allergen: SubRiskResult,
    identified_allergens: Vec<String>,
    additive: SubRiskResult,
    harmful_additives: Vec<AdditiveFinding>,
    nutrition: SubRiskResult,
    nutritional_concerns: Vec<NutrientConcern>,
    contamination: SubRiskResult,
    interaction: SubRiskResult,
}

impl<S> ProductRiskService<S>
where
    S: AdvisorySummarizer + 'static,
{
    pub fn new(advisory: Arc<S>, advisory_timeout: Duration) -> Self {
        Self {
            advisory,
            advisory_timeout,
        }
    }

    /// Produces a risk report for one product. Never fails: advisory trouble
    /// degrades to the canned summary, and a pipeline panic degrades to the
    /// fixed fallback report.
    pub async fn analyze(
        &self,
        product: ProductSnapshot,
        profile: Option<HealthProfile>,
    ) -> OverallRiskReport {
        // Both branches run on their own tasks, so a panic in either one is
        // contained to that branch instead of tearing down the request.
        let advisory = self.advisory.clone();
        let advisory_timeout = self.advisory_timeout;
        let advisory_product = product.clone();
        let advisory_profile = profile.clone();
        let advisory_branch = tokio::spawn(async move {
            summarize_with_deadline(
                advisory,
                advisory_timeout,
                &advisory_product,
                advisory_profile.as_ref(),
            )
            .await
        });

        let scoring_product = product.clone();
        let scoring_profile = profile.clone();
        let scoring_branch = tokio::spawn(async move {
            score_product(&scoring_product, scoring_profile.as_ref()).await
        });

        let (advisory, scores) = tokio::join!(advisory_branch, scoring_branch);

        let advisory = advisory.unwrap_or_else(|err| {
            warn!(%err, "advisory branch failed; using canned response");
            AdvisorySummary::fallback()
        });

        match scores {
            Ok(scores) => {
                let report = assemble_report(scores, advisory);
                info!(
                    product = %product.product_name,
                    overall = report.overall_risk_score,
                    risk_level = report.risk_level.label(),
                    "product analysis complete"
                );
                report
            }
            Err(err) => {
                error!(product = %product.product_name, %err, "risk scoring pipeline failed");
                OverallRiskReport::degraded()
            }
        }
    }
}

async fn summarize_with_deadline<S>(
    advisory: Arc<S>,
    deadline: Duration,
    product: &ProductSnapshot,
    profile: Option<&HealthProfile>,
) -> AdvisorySummary
where
    S: AdvisorySummarizer,
{
    let call = advisory.summarize(product, profile);
    match tokio::time::timeout(deadline, call).await {
        Ok(Ok(summary)) => summary,
        Ok(Err(err)) => {
            warn!(%err, "advisory summarizer unavailable; using canned response");
            AdvisorySummary::fallback()
        }
        Err(_) => {
            warn!(
                timeout_ms = deadline.as_millis() as u64,
                "advisory summarizer timed out; using canned response"
            );
            AdvisorySummary::fallback()
        }
    }
}

/// Runs the five analyzers as independent branches with a single join
/// barrier. None of them shares mutable state or blocks on I/O.
async fn score_product(
    product: &ProductSnapshot,
    profile: Option<&HealthProfile>,
) -> DeterministicScores {
    let ingredients = parse_ingredients(&product.ingredients);

    let (allergen, additive, nutrition, contamination, interaction) = tokio::join!(
        async { analyze_allergens(&ingredients, profile) },
        async { analyze_additives(&ingredients) },
        async { analyze_nutrition(product.nutrition_facts.as_ref()) },
        async { analyze_contamination(product.category(), &product.ingredients) },
        async { analyze_interactions(&ingredients, profile) },
    );

    let (allergen, identified_allergens) = allergen;
    let (additive, harmful_additives) = additive;
    let (nutrition, nutritional_concerns) = nutrition;

    DeterministicScores {
        allergen,
        identified_allergens,
        additive,
        harmful_additives,
        nutrition,
        nutritional_concerns,
        contamination,
        interaction,
    }
}

fn assemble_report(scores: DeterministicScores, advisory: AdvisorySummary) -> OverallRiskReport {
    let overall = overall_score(
        &scores.allergen,
        &scores.additive,
        &scores.nutrition,
        &scores.contamination,
        &scores.interaction,
    );
    let warnings = safety_warnings(&scores.allergen, &scores.additive, &scores.nutrition);

    OverallRiskReport {
        overall_risk_score: overall,
        risk_level: risk_level(overall),
        confidence_score: advisory.confidence.clamp(0.0, 100.0),
        allergen_risk: scores.allergen,
        nutritional_risk: scores.nutrition,
        additive_risk: scores.additive,
        contamination_risk: scores.contamination,
        interaction_risk: scores.interaction,
        identified_allergens: scores.identified_allergens,
        harmful_additives: scores.harmful_additives,
        nutritional_concerns: scores.nutritional_concerns,
        safety_warnings: warnings,
        ai_summary: advisory.summary,
        ai_recommendations: advisory.recommendations,
        generated_at: Utc::now(),
    }
}
