use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use safebite::advisory::HttpAdvisoryClient;
use safebite::analysis::analysis_router;
use safebite::analysis::domain::{
    HealthProfile, NutritionFacts, OverallRiskReport, ProductSnapshot,
};
use safebite::analysis::ProductRiskService;
use safebite::config::AppConfig;
use safebite::error::AppError;
use safebite::telemetry;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Safebite Risk Analyzer",
    about = "Score consumable products for health and safety risks from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Analyze a single product and print the risk report
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Product name
    #[arg(long)]
    name: String,
    /// Raw ingredient list as printed on the label
    #[arg(long, default_value = "")]
    ingredients: String,
    /// Product category (e.g. dairy, seafood, snacks)
    #[arg(long)]
    category: Option<String>,
    /// Sodium per serving in milligrams
    #[arg(long)]
    sodium_mg: Option<f64>,
    /// Sugar per serving in grams
    #[arg(long)]
    sugar_g: Option<f64>,
    /// Saturated fat per serving in grams
    #[arg(long)]
    saturated_fat_g: Option<f64>,
    /// Trans fat per serving in grams
    #[arg(long)]
    trans_fat_g: Option<f64>,
    /// Allergy in the user's health profile (repeatable)
    #[arg(long = "allergy")]
    allergies: Vec<String>,
    /// Medical condition in the user's health profile (repeatable)
    #[arg(long = "condition")]
    conditions: Vec<String>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Analyze(args) => run_analysis(args).await,
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let advisory = Arc::new(HttpAdvisoryClient::new(&config.advisory));
    let service = Arc::new(ProductRiskService::new(advisory, config.advisory.timeout));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(analysis_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "product risk analyzer ready");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_analysis(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let advisory = Arc::new(HttpAdvisoryClient::new(&config.advisory));
    let service = ProductRiskService::new(advisory, config.advisory.timeout);

    let (product, profile) = build_analysis_input(args);
    let product_name = product.product_name.clone();
    let report = service.analyze(product, profile).await;

    render_report(&product_name, &report);
    Ok(())
}

fn build_analysis_input(args: AnalyzeArgs) -> (ProductSnapshot, Option<HealthProfile>) {
    let facts = NutritionFacts {
        sodium_mg: args.sodium_mg,
        sugar_g: args.sugar_g,
        saturated_fat_g: args.saturated_fat_g,
        trans_fat_g: args.trans_fat_g,
    };
    let nutrition_facts = if facts.is_empty() { None } else { Some(facts) };

    let product = ProductSnapshot {
        product_name: args.name,
        ingredients: args.ingredients,
        nutrition_facts,
        category: args.category,
        product_description: None,
    };

    let profile = if args.allergies.is_empty() && args.conditions.is_empty() {
        None
    } else {
        Some(HealthProfile {
            allergies: args.allergies,
            medical_conditions: args.conditions,
            ..HealthProfile::default()
        })
    };

    (product, profile)
}

fn render_report(product_name: &str, report: &OverallRiskReport) {
    println!("Risk report for {product_name}");
    println!(
        "Overall: {:.1} ({}) with confidence {:.0}",
        report.overall_risk_score,
        report.risk_level.label(),
        report.confidence_score
    );

    let sections = [
        ("Allergens", &report.allergen_risk),
        ("Additives", &report.additive_risk),
        ("Nutrition", &report.nutritional_risk),
        ("Contamination", &report.contamination_risk),
        ("Drug interactions", &report.interaction_risk),
    ];

    for (label, result) in sections {
        println!(
            "\n{label}: {:.0} ({})",
            result.score,
            result.severity.label()
        );
        for detail in &result.details {
            println!("- {detail}");
        }
    }

    println!("\nSafety warnings");
    for warning in &report.safety_warnings {
        println!("- {warning}");
    }

    println!("\nAdvisory summary");
    println!("{}", report.ai_summary);
    for recommendation in &report.ai_recommendations {
        println!("- {recommendation}");
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
