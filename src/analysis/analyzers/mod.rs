//! Five independent scoring analyzers. Each is a pure function from product
//! and health data to a clamped `SubRiskResult`; none of them can fail on
//! valid input, and none depends on the output of another.

mod additive;
mod allergen;
mod contamination;
mod interaction;
mod nutrition;

pub use additive::analyze_additives;
pub use allergen::analyze_allergens;
pub use contamination::analyze_contamination;
pub use interaction::analyze_interactions;
pub use nutrition::analyze_nutrition;

pub(crate) fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
