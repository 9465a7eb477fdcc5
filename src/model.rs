use serde::{Deserialize, Serialize};

/// A recipe normalized from a publisher page.
///
/// Produced once per import call and owned by the caller afterwards; the
/// importer keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub servings: u32,
    /// Minutes, when the source declares or implies them.
    pub prep_time: Option<u32>,
    /// Minutes, when the source declares or implies them.
    pub cook_time: Option<u32>,
    pub ingredients: Vec<IngredientLine>,
    pub directions: Vec<String>,
    /// At most six, Title-Cased, unique ignoring case.
    pub tags: Vec<String>,
}

/// One ingredient line split into display parts.
///
/// `amount` is kept as a display string ("1 1/2", "2.5") rather than a
/// number; recipes use fractions and ranges that a numeric field would
/// mangle. When a line cannot be split, the whole line lands in `name`,
/// which is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub amount: Option<String>,
    pub unit: Option<String>,
    pub name: String,
}
