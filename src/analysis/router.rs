use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use super::analyzers::analyze_allergens;
use super::domain::{HealthProfile, OverallRiskReport, ProductSnapshot, Severity};
use super::parser::parse_ingredients;
use super::service::ProductRiskService;
use crate::advisory::AdvisorySummarizer;

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> String {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("analysis-{id:06}")
}

/// Analysis request body: the product under review plus an optional health
/// profile for personalization.
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub product: ProductSnapshot,
    #[serde(default)]
    pub health_profile: Option<HealthProfile>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub status: &'static str,
    pub session_id: String,
    pub analysis: OverallRiskReport,
}

/// Quick-check request: raw label text plus an optional allergen watch list.
#[derive(Debug, Deserialize)]
pub struct QuickCheckRequest {
    pub ingredients: String,
    #[serde(default)]
    pub allergens: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct QuickCheckResponse {
    pub status: &'static str,
    pub ingredients_found: Vec<String>,
    pub allergen_warnings: Vec<String>,
    pub risk_level: Severity,
    pub identified_allergens: Vec<String>,
}

/// Router builder exposing the analysis endpoints. The degradation policy
/// guarantees a well-formed report, so the handlers always answer 200.
pub fn analysis_router<S>(service: Arc<ProductRiskService<S>>) -> Router
where
    S: AdvisorySummarizer + 'static,
{
    Router::new()
        .route("/api/v1/analysis", post(analyze_handler::<S>))
        .route("/api/v1/analysis/quick-check", post(quick_check_handler))
        .with_state(service)
}

pub(crate) async fn analyze_handler<S>(
    State(service): State<Arc<ProductRiskService<S>>>,
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response
where
    S: AdvisorySummarizer + 'static,
{
    let report = service
        .analyze(request.product, request.health_profile)
        .await;

    let response = AnalysisResponse {
        status: "success",
        session_id: next_session_id(),
        analysis: report,
    };

    (StatusCode::OK, axum::Json(response)).into_response()
}

/// Lightweight allergen screen over raw label text: runs only the parser and
/// the allergen analyzer, with no advisory call and no full report.
pub(crate) async fn quick_check_handler(
    axum::Json(request): axum::Json<QuickCheckRequest>,
) -> Response {
    let ingredients = parse_ingredients(&request.ingredients);

    // An empty watch list means no personalization, same as none at all.
    let profile = request
        .allergens
        .filter(|allergens| !allergens.is_empty())
        .map(|allergies| HealthProfile {
            allergies,
            ..HealthProfile::default()
        });

    let (result, identified) = analyze_allergens(&ingredients, profile.as_ref());

    let response = QuickCheckResponse {
        status: "success",
        ingredients_found: ingredients,
        allergen_warnings: result.details,
        risk_level: result.severity,
        identified_allergens: identified,
    };

    (StatusCode::OK, axum::Json(response)).into_response()
}
