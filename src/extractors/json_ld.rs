use html_escape::decode_html_entities;
use log::{debug, warn};
use scraper::Selector;
use serde::Deserialize;
use serde_json::Value;

use crate::duration::parse_duration;
use crate::error::ImportError;
use crate::extractors::{Extraction, Extractor, ParsingContext, DEFAULT_TITLE};
use crate::ingredient::parse_ingredient_line;
use crate::model::{IngredientLine, Recipe};
use crate::tags::derive_tags;

/// Extracts the first schema.org Recipe block embedded as JSON-LD.
pub struct StructuredDataExtractor;

#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    name: Option<String>,
    description: Option<DescriptionField>,
    image: Option<ImageField>,
    #[serde(rename = "recipeIngredient", default)]
    recipe_ingredient: Vec<String>,
    #[serde(rename = "recipeInstructions")]
    recipe_instructions: Option<InstructionsField>,
    #[serde(rename = "recipeYield")]
    recipe_yield: Option<YieldField>,
    #[serde(rename = "prepTime")]
    prep_time: Option<String>,
    #[serde(rename = "cookTime")]
    cook_time: Option<String>,
    #[serde(rename = "totalTime")]
    total_time: Option<String>,
    #[serde(rename = "recipeCuisine")]
    recipe_cuisine: Option<String>,
    #[serde(rename = "recipeCategory")]
    recipe_category: Option<CategoryField>,
}

#[derive(Debug, Deserialize)]
struct TextObject {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DescriptionField {
    Text(String),
    Object(TextObject),
}

#[derive(Debug, Deserialize)]
struct ImageObject {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageField {
    Url(String),
    Object(ImageObject),
    Urls(Vec<String>),
    Objects(Vec<ImageObject>),
}

impl ImageField {
    /// First usable URL; a declared list contributes its first element.
    fn into_first_url(self) -> Option<String> {
        match self {
            ImageField::Url(url) => Some(url),
            ImageField::Object(obj) => Some(obj.url),
            ImageField::Urls(urls) => urls.into_iter().next(),
            ImageField::Objects(objs) => objs.into_iter().next().map(|o| o.url),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstructionsField {
    Text(String),
    List(Vec<InstructionEntry>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstructionEntry {
    Text(String),
    Step(TextObject),
    // HowToSections and other exotic shapes land here and are skipped
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YieldField {
    Number(f64),
    Text(String),
    List(Vec<Value>),
}

impl YieldField {
    /// Leading-integer read of the declared yield, parseInt-style.
    fn servings(&self) -> Option<u32> {
        match self {
            YieldField::Number(n) => (*n >= 1.0).then(|| *n as u32),
            YieldField::Text(s) => leading_int(s),
            YieldField::List(items) => items.iter().find_map(|item| match item {
                Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
                Value::String(s) => leading_int(s),
                _ => None,
            }),
        }
    }
}

fn leading_int(s: &str) -> Option<u32> {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryField {
    One(String),
    Many(Vec<String>),
}

impl CategoryField {
    fn into_vec(self) -> Vec<String> {
        match self {
            CategoryField::One(category) => vec![category],
            CategoryField::Many(categories) => categories,
        }
    }
}

fn decode_html_symbols(text: &str) -> String {
    // publishers double-encode entities often enough that one pass leaves
    // stragglers behind
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

/// Trim and patch the common breakages in embedded JSON payloads before
/// handing them to the parser.
fn sanitize_json(json_str: &str) -> String {
    let mut cleaned = json_str.trim().to_string();

    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        if let Some(start) = cleaned.find('{') {
            cleaned = cleaned[start..].to_string();
        }
    }

    cleaned = cleaned.replace(",]", "]").replace(",}", "}");

    cleaned.replace("<!--", "").replace("-->", "")
}

fn is_recipe_node(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(t)) => t.eq_ignore_ascii_case("Recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .any(|t| t.as_str().is_some_and(|t| t.eq_ignore_ascii_case("Recipe"))),
        _ => false,
    }
}

/// Locate the first Recipe node: the value itself, an element of a
/// top-level array, or an entry of an `@graph` wrapper.
fn find_recipe_node(json: &Value) -> Option<&Value> {
    if is_recipe_node(json) {
        return Some(json);
    }
    match json {
        Value::Array(items) => items.iter().find(|item| is_recipe_node(item)),
        Value::Object(_) => json
            .get("@graph")
            .and_then(Value::as_array)
            .and_then(|items| items.iter().find(|item| is_recipe_node(item))),
        _ => None,
    }
}

impl JsonLdRecipe {
    fn into_recipe(self) -> Recipe {
        let ingredients: Vec<IngredientLine> = self
            .recipe_ingredient
            .iter()
            .map(|line| parse_ingredient_line(&decode_html_symbols(line)))
            .collect();

        let directions: Vec<String> = match self.recipe_instructions {
            Some(InstructionsField::Text(text)) => vec![decode_html_symbols(&text)],
            Some(InstructionsField::List(entries)) => entries
                .into_iter()
                .filter_map(|entry| match entry {
                    InstructionEntry::Text(text) => Some(text),
                    InstructionEntry::Step(step) => Some(step.text),
                    InstructionEntry::Other(_) => None,
                })
                .map(|text| decode_html_symbols(&text))
                .collect(),
            None => Vec::new(),
        };

        let mut prep_time = self.prep_time.as_deref().and_then(parse_duration);
        let mut cook_time = self.cook_time.as_deref().and_then(parse_duration);
        let total_time = self.total_time.as_deref().and_then(parse_duration);

        // A lone declared total splits one third prep, the rest cook; the
        // pair always sums back to the total.
        if prep_time.is_none() && cook_time.is_none() {
            if let Some(total) = total_time {
                let prep = (f64::from(total) / 3.0).round() as u32;
                prep_time = Some(prep);
                cook_time = Some(total - prep);
            }
        }

        let tag_minutes =
            total_time.unwrap_or_else(|| prep_time.unwrap_or(0) + cook_time.unwrap_or(0));

        let title = self
            .name
            .map(|name| decode_html_symbols(&name))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let description = match self.description {
            Some(DescriptionField::Text(text)) => decode_html_symbols(&text),
            Some(DescriptionField::Object(obj)) => decode_html_symbols(&obj.text),
            None => String::new(),
        };

        let cuisine = self
            .recipe_cuisine
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        let categories: Vec<String> = self
            .recipe_category
            .map(CategoryField::into_vec)
            .unwrap_or_default()
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        let ingredient_names: Vec<String> =
            ingredients.iter().map(|line| line.name.clone()).collect();
        let tags = derive_tags(
            &title,
            &ingredient_names,
            cuisine,
            &categories,
            Some(tag_minutes),
        );

        Recipe {
            title,
            description,
            image_url: self.image.and_then(ImageField::into_first_url),
            servings: self
                .recipe_yield
                .as_ref()
                .and_then(YieldField::servings)
                .unwrap_or(2),
            prep_time,
            cook_time,
            ingredients,
            directions,
            tags,
        }
    }
}

impl Extractor for StructuredDataExtractor {
    fn extract(&self, context: &ParsingContext) -> Result<Extraction, ImportError> {
        let selector = Selector::parse("script[type='application/ld+json']").unwrap();

        for script in context.document.select(&selector) {
            let cleaned = sanitize_json(&script.inner_html());
            let Ok(json) = serde_json::from_str::<Value>(&cleaned) else {
                continue;
            };

            let Some(node) = find_recipe_node(&json) else {
                continue;
            };

            match serde_json::from_value::<JsonLdRecipe>(node.clone()) {
                Ok(block) => {
                    debug!("structured recipe block found on {}", context.url);
                    return Ok(Extraction::Found(block.into_recipe()));
                }
                Err(err) => {
                    warn!(
                        "recipe block on {} did not deserialize: {err}",
                        context.url
                    );
                }
            }
        }

        Ok(Extraction::NotFound)
    }
}
