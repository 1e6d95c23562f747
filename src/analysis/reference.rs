//! Curated reference tables backing the analyzers. All tables are static and
//! read-only; they are shared across concurrent analyses without locking.
//!
//! Matching against these tables is substring containment, which is
//! intentionally loose: "peanuts" matches inside "peanut-free". Downstream
//! warning semantics depend on this behavior, so tightening it is a contract
//! change, not a cleanup.

/// Major allergens recognized by the allergen analyzer.
pub const ALLERGENS: &[&str] = &[
    "milk",
    "eggs",
    "fish",
    "shellfish",
    "tree nuts",
    "peanuts",
    "wheat",
    "soybeans",
    "sesame",
    "lactose",
    "gluten",
    "casein",
];

/// Additives with documented health concerns, keyed by label name.
pub const HARMFUL_ADDITIVES: &[(&str, &str)] = &[
    (
        "monosodium glutamate",
        "May cause headaches and nausea in sensitive individuals",
    ),
    ("sodium nitrate", "Potential carcinogen, linked to cancer risk"),
    ("high fructose corn syrup", "Linked to obesity and diabetes"),
    ("trans fat", "Increases heart disease risk"),
    ("aspartame", "May cause headaches in sensitive individuals"),
    ("red dye 40", "Potential behavioral issues in children"),
    ("bht", "Potential carcinogen"),
    ("bha", "Potential carcinogen"),
    (
        "sodium benzoate",
        "May form benzene when combined with vitamin C",
    ),
];

/// Ingredients known to interact with common medications.
pub const INTERACTION_INGREDIENTS: &[(&str, &str)] = &[
    ("grapefruit", "Can interfere with many medications"),
    ("caffeine", "Can interact with stimulants and blood thinners"),
    ("alcohol", "Can interact with many medications"),
    ("vitamin k", "Can interfere with blood thinners"),
    ("tyramine", "Can interact with MAO inhibitors"),
];

/// Product categories prone to bacterial contamination.
pub const HIGH_RISK_CATEGORIES: &[&str] = &["seafood", "meat", "dairy", "eggs"];

/// Ingredients with a recall history tracked by the contamination analyzer.
pub const RECALL_PRONE_INGREDIENTS: &[&str] = &["spinach", "lettuce", "sprouts"];

/// Per-serving nutrition thresholds (mg for sodium, g otherwise).
pub mod thresholds {
    pub const SODIUM_HIGH_MG: f64 = 600.0;
    pub const SODIUM_VERY_HIGH_MG: f64 = 1400.0;
    pub const SUGAR_HIGH_G: f64 = 15.0;
    pub const SUGAR_VERY_HIGH_G: f64 = 25.0;
    pub const TRANS_FAT_ANY_G: f64 = 0.5;
}
