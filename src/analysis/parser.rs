/// Normalizes raw label text into an ordered list of ingredient tokens.
///
/// Strips an optional leading `ingredients:` label, lower-cases, splits on
/// commas, trims, and drops tokens of length <= 1. Never fails; empty input
/// yields an empty list.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() {
        return Vec::new();
    }

    let body = strip_label(&lowered);

    body.split(',')
        .map(str::trim)
        .filter(|token| token.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

fn strip_label(text: &str) -> &str {
    for label in ["ingredients:", "ingredient:", "ingredients", "ingredient"] {
        if let Some(rest) = text.strip_prefix(label) {
            return rest.trim_start();
        }
    }
    text
}
