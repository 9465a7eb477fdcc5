//! Splits free-text ingredient lines into amount, unit and name.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::IngredientLine;
use crate::text::normalize_fractions;

/// Closed unit vocabulary, matched case-insensitively as a whole word.
/// Anything outside this list belongs to the ingredient name.
const UNIT_PATTERN: &str = "oz|ounces?|lbs?|pounds?|cups?|tbsp|tsp|tablespoons?|teaspoons?|kg|g|ml|l|pieces?|cloves?|units?";

/// Optional amount segment (digits, dots, slashes, whitespace: "1 1/2",
/// "2.5"), optional unit token, remainder as the name. The amount is greedy
/// so mixed numbers stay in one piece.
static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*(\d[\d\s./]*)?(?:({UNIT_PATTERN})\b)?\s*(.+)$"
    ))
    .expect("ingredient line pattern is valid")
});

static SLASH_SPACING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*/\s*").expect("slash spacing pattern is valid"));

/// Parse one ingredient line into its display parts.
///
/// Fraction glyphs are normalized first. The amount is never validated as a
/// number; it stays whatever the line said. Lines that do not separate
/// cleanly come back whole in `name`, so `name` is never empty.
pub fn parse_ingredient_line(raw: &str) -> IngredientLine {
    let normalized = normalize_fractions(raw);

    let Some(caps) = LINE_RE.captures(&normalized) else {
        return IngredientLine {
            amount: None,
            unit: None,
            name: raw.to_string(),
        };
    };

    let amount = caps
        .get(1)
        .map(|m| SLASH_SPACING_RE.replace_all(m.as_str().trim(), "/").into_owned());
    let unit = caps.get(2).map(|m| m.as_str().to_string());
    let name = caps
        .get(3)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    if name.is_empty() {
        return IngredientLine {
            amount: None,
            unit: None,
            name: raw.to_string(),
        };
    }

    IngredientLine { amount, unit, name }
}
