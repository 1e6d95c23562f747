//! Integration specifications for the product risk analysis pipeline.
//!
//! Scenarios exercise the public service facade and HTTP router end to end:
//! deterministic scoring, health-profile personalization, advisory
//! degradation, and the wire contract of the analysis endpoint.

mod common {
    use std::sync::Arc;
    use std::time::Duration;

    use safebite::advisory::{AdvisoryError, AdvisorySummarizer, AdvisorySummary};
    use safebite::analysis::domain::{HealthProfile, NutritionFacts, ProductSnapshot};
    use safebite::analysis::ProductRiskService;

    /// Advisory double that replies with a fixed structured summary.
    #[derive(Clone)]
    pub(super) struct ScriptedAdvisory {
        pub(super) summary: AdvisorySummary,
    }

    impl ScriptedAdvisory {
        pub(super) fn confident() -> Self {
            Self {
                summary: AdvisorySummary {
                    summary: "Generally safe in moderation".to_string(),
                    recommendations: vec!["Limit to one serving per day".to_string()],
                    confidence: 92.0,
                    concerns: vec!["High sugar".to_string()],
                },
            }
        }
    }

    impl AdvisorySummarizer for ScriptedAdvisory {
        async fn summarize(
            &self,
            _product: &ProductSnapshot,
            _profile: Option<&HealthProfile>,
        ) -> Result<AdvisorySummary, AdvisoryError> {
            Ok(self.summary.clone())
        }
    }

    /// Advisory double that always fails.
    pub(super) struct UnavailableAdvisory;

    impl AdvisorySummarizer for UnavailableAdvisory {
        async fn summarize(
            &self,
            _product: &ProductSnapshot,
            _profile: Option<&HealthProfile>,
        ) -> Result<AdvisorySummary, AdvisoryError> {
            Err(AdvisoryError::Unconfigured)
        }
    }

    pub(super) fn service_with<S>(advisory: S) -> ProductRiskService<S>
    where
        S: AdvisorySummarizer + 'static,
    {
        ProductRiskService::new(Arc::new(advisory), Duration::from_secs(2))
    }

    pub(super) fn product(name: &str, ingredients: &str) -> ProductSnapshot {
        ProductSnapshot {
            product_name: name.to_string(),
            ingredients: ingredients.to_string(),
            nutrition_facts: None,
            category: None,
            product_description: None,
        }
    }

    pub(super) fn salty_facts() -> NutritionFacts {
        NutritionFacts {
            sodium_mg: Some(1500.0),
            sugar_g: Some(30.0),
            saturated_fat_g: None,
            trans_fat_g: Some(1.0),
        }
    }
}

mod scoring {
    use super::common::*;
    use safebite::analysis::domain::{HealthProfile, Severity};

    #[tokio::test]
    async fn reference_product_matches_expected_breakdown() {
        let service = service_with(ScriptedAdvisory::confident());
        let report = service
            .analyze(product("Chocolate Bar", "milk, sugar, salt"), None)
            .await;

        assert_eq!(report.allergen_risk.score, 15.0);
        assert_eq!(report.additive_risk.score, 0.0);
        assert_eq!(report.nutritional_risk.score, 20.0);
        assert_eq!(report.contamination_risk.score, 0.0);
        assert_eq!(report.interaction_risk.score, 0.0);
        assert_eq!(report.overall_risk_score, 8.5);
        assert_eq!(report.risk_level, Severity::Low);
        assert_eq!(report.identified_allergens, vec!["milk"]);
        assert_eq!(
            report.safety_warnings,
            vec!["No major safety concerns identified"]
        );
    }

    #[tokio::test]
    async fn all_scores_stay_within_bounds_for_worst_case_input() {
        let service = service_with(ScriptedAdvisory::confident());
        let mut worst = product(
            "Everything Bomb",
            "milk, eggs, fish, shellfish, tree nuts, peanuts, wheat, soybeans, sesame, \
             monosodium glutamate, sodium nitrate, high fructose corn syrup, aspartame, \
             red dye 40, bht, bha, sodium benzoate, unpasteurized cream, sprouts, \
             grapefruit, caffeine, alcohol, vitamin k, tyramine",
        );
        worst.category = Some("raw seafood".to_string());
        worst.nutrition_facts = Some(salty_facts());

        let profile = HealthProfile {
            allergies: vec!["milk".to_string()],
            medical_conditions: vec!["hypertension".to_string()],
            ..HealthProfile::default()
        };

        let report = service.analyze(worst, Some(profile)).await;

        for result in [
            &report.allergen_risk,
            &report.additive_risk,
            &report.nutritional_risk,
            &report.contamination_risk,
            &report.interaction_risk,
        ] {
            assert!((0.0..=100.0).contains(&result.score));
        }
        assert!((0.0..=100.0).contains(&report.overall_risk_score));
        assert_eq!(report.risk_level, Severity::Critical);
        assert_eq!(
            report.safety_warnings,
            vec![
                "Contains known allergens - check ingredient list carefully",
                "Contains potentially harmful additives",
                "High in sodium, sugar, or unhealthy fats",
            ]
        );
    }

    #[tokio::test]
    async fn profile_allergy_escalates_allergen_severity() {
        let service = service_with(ScriptedAdvisory::confident());
        let profile = HealthProfile {
            allergies: vec!["peanuts".to_string()],
            ..HealthProfile::default()
        };

        let report = service
            .analyze(
                product("Peanut Snack", "peanuts, wheat flour, salt"),
                Some(profile),
            )
            .await;

        // Two matches at 15 points tripled by the allergy hit.
        assert_eq!(report.allergen_risk.score, 90.0);
        assert_eq!(report.allergen_risk.severity, Severity::Critical);
        assert!(report
            .allergen_risk
            .details
            .iter()
            .any(|line| line.starts_with("CRITICAL: Contains peanuts")));
    }

    #[tokio::test]
    async fn interactions_ignored_without_medical_conditions() {
        let service = service_with(ScriptedAdvisory::confident());
        let report = service
            .analyze(product("Energy Drink", "water, caffeine, grapefruit"), None)
            .await;

        assert_eq!(report.interaction_risk.score, 0.0);
        assert_eq!(
            report.interaction_risk.details,
            vec!["No medical conditions specified"]
        );
    }

    #[tokio::test]
    async fn advisory_content_is_merged_into_report() {
        let service = service_with(ScriptedAdvisory::confident());
        let report = service.analyze(product("Yogurt", "milk, cultures"), None).await;

        assert_eq!(report.ai_summary, "Generally safe in moderation");
        assert_eq!(report.ai_recommendations, vec!["Limit to one serving per day"]);
        assert_eq!(report.confidence_score, 92.0);
    }
}

mod degradation {
    use super::common::*;

    #[tokio::test]
    async fn advisory_failure_never_changes_deterministic_scores() {
        let healthy = service_with(ScriptedAdvisory::confident());
        let broken = service_with(UnavailableAdvisory);

        let with_advisory = healthy
            .analyze(product("Chips", "potatoes, monosodium glutamate"), None)
            .await;
        let without_advisory = broken
            .analyze(product("Chips", "potatoes, monosodium glutamate"), None)
            .await;

        assert_eq!(
            with_advisory.overall_risk_score,
            without_advisory.overall_risk_score
        );
        assert_eq!(with_advisory.allergen_risk, without_advisory.allergen_risk);
        assert_eq!(with_advisory.additive_risk, without_advisory.additive_risk);
        assert_eq!(
            without_advisory.ai_summary,
            "AI analysis unavailable - basic rule-based analysis completed"
        );
        assert_eq!(without_advisory.confidence_score, 60.0);
    }

    #[tokio::test]
    async fn empty_product_still_yields_complete_report() {
        let service = service_with(UnavailableAdvisory);
        let report = service.analyze(product("Mystery Item", ""), None).await;

        assert_eq!(report.allergen_risk.score, 0.0);
        assert_eq!(report.nutritional_risk.score, 20.0);
        assert_eq!(report.overall_risk_score, 4.0);
        assert_eq!(
            report.safety_warnings,
            vec!["No major safety concerns identified"]
        );
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use safebite::analysis::{analysis_router, ProductRiskService};
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        let service = Arc::new(ProductRiskService::new(
            Arc::new(UnavailableAdvisory),
            Duration::from_secs(1),
        ));
        analysis_router(service)
    }

    #[tokio::test]
    async fn post_analysis_returns_full_report() {
        let router = build_router();
        let payload = json!({
            "product": {
                "product_name": "Chocolate Bar",
                "ingredients": "milk, sugar, salt"
            }
        });

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analysis")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");

        assert_eq!(payload.get("status"), Some(&json!("success")));
        assert!(payload
            .get("session_id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .starts_with("analysis-"));

        let analysis = payload.get("analysis").expect("analysis present");
        assert_eq!(analysis.get("overall_risk_score"), Some(&json!(8.5)));
        assert_eq!(analysis.get("risk_level"), Some(&json!("LOW")));
        assert_eq!(
            analysis.get("identified_allergens"),
            Some(&json!(["milk"]))
        );
    }

    #[tokio::test]
    async fn post_analysis_accepts_health_profile_and_nutrition() {
        let router = build_router();
        let payload = json!({
            "product": {
                "product_name": "Instant Noodles",
                "ingredients": "wheat flour, monosodium glutamate",
                "category": "snacks",
                "nutrition_facts": { "sodium_mg": 1600.0 }
            },
            "health_profile": {
                "allergies": ["wheat"],
                "medical_conditions": ["diabetes"]
            }
        });

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analysis")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let analysis = payload.get("analysis").expect("analysis present");

        // One wheat match tripled by the allergy profile.
        let allergen = analysis.get("allergen_risk").expect("allergen risk");
        assert_eq!(allergen.get("score"), Some(&json!(45.0)));
        assert_eq!(allergen.get("severity"), Some(&json!("MEDIUM")));

        let nutrition = analysis.get("nutritional_risk").expect("nutrition risk");
        assert_eq!(nutrition.get("score"), Some(&json!(25.0)));
    }

    #[tokio::test]
    async fn quick_check_screens_label_text_for_allergens() {
        let router = build_router();
        let payload = json!({ "ingredients": "Ingredients: milk, sugar, salt" });

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analysis/quick-check")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");

        assert_eq!(payload.get("status"), Some(&json!("success")));
        assert_eq!(
            payload.get("ingredients_found"),
            Some(&json!(["milk", "sugar", "salt"]))
        );
        assert_eq!(
            payload.get("allergen_warnings"),
            Some(&json!(["Contains milk"]))
        );
        assert_eq!(payload.get("risk_level"), Some(&json!("LOW")));
        assert_eq!(payload.get("identified_allergens"), Some(&json!(["milk"])));
    }

    #[tokio::test]
    async fn quick_check_escalates_on_declared_allergens() {
        let router = build_router();
        let payload = json!({
            "ingredients": "peanuts, wheat flour, salt",
            "allergens": ["peanuts"]
        });

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analysis/quick-check")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");

        // Two matches at 15 points tripled by the watch-list hit.
        assert_eq!(payload.get("risk_level"), Some(&json!("CRITICAL")));
        assert!(payload
            .get("allergen_warnings")
            .and_then(Value::as_array)
            .expect("warnings array")
            .iter()
            .any(|line| {
                line.as_str()
                    .unwrap_or_default()
                    .starts_with("CRITICAL: Contains peanuts")
            }));
        assert_eq!(
            payload.get("identified_allergens"),
            Some(&json!(["peanuts", "wheat"]))
        );
    }

    #[tokio::test]
    async fn malformed_body_is_rejected_at_the_boundary() {
        let router = build_router();
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analysis")
            .header("content-type", "application/json")
            .body(Body::from("{\"product\": 42}"))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
