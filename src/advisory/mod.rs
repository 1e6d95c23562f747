//! External advisory summarizer capability. The summarizer enriches a report
//! with natural-language commentary; it is best-effort and non-authoritative,
//! and every failure mode collapses into the canned fallback.

mod client;

pub use client::HttpAdvisoryClient;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::analysis::domain::{HealthProfile, ProductSnapshot};

/// Structured advisory content merged into the final report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorySummary {
    pub summary: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    #[serde(default)]
    pub concerns: Vec<String>,
}

fn default_confidence() -> f64 {
    80.0
}

impl AdvisorySummary {
    /// Canned response substituted when the external service is unavailable,
    /// times out, or returns unparseable content.
    pub fn fallback() -> Self {
        Self {
            summary: "AI analysis unavailable - basic rule-based analysis completed".to_string(),
            recommendations: vec![
                "Consult healthcare provider for personalized advice".to_string()
            ],
            confidence: 60.0,
            concerns: Vec::new(),
        }
    }
}

/// Failure modes of the advisory call. None of these ever reach the caller of
/// the analysis pipeline; they are absorbed into [`AdvisorySummary::fallback`].
#[derive(Debug, thiserror::Error)]
pub enum AdvisoryError {
    #[error("advisory summarizer is not configured")]
    Unconfigured,
    #[error("advisory request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("advisory service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("advisory response was empty")]
    EmptyResponse,
}

/// Capability interface for the external summarizer. Provider selection and
/// retry policy live behind this seam, not in the scoring pipeline.
pub trait AdvisorySummarizer: Send + Sync {
    fn summarize(
        &self,
        product: &ProductSnapshot,
        profile: Option<&HealthProfile>,
    ) -> impl Future<Output = Result<AdvisorySummary, AdvisoryError>> + Send;
}
