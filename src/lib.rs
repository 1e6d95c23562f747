//! Risk analysis service for consumable products: deterministic analyzers
//! over ingredient lists and nutrition facts, fused into a single report and
//! optionally enriched by an external advisory summarizer.

pub mod advisory;
pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
