//! Multi-factor product risk analysis: ingredient parsing, five independent
//! analyzers, weighted aggregation, and the fused report.

pub mod aggregate;
pub mod analyzers;
pub mod domain;
pub mod parser;
pub mod reference;
mod router;
mod service;

pub use router::{
    analysis_router, AnalysisRequest, AnalysisResponse, QuickCheckRequest, QuickCheckResponse,
};
pub use service::ProductRiskService;
