use log::debug;
use scraper::{ElementRef, Selector};

use crate::error::ImportError;
use crate::extractors::{Extraction, Extractor, ParsingContext, DEFAULT_TITLE};
use crate::ingredient::parse_ingredient_line;
use crate::model::{IngredientLine, Recipe};
use crate::tags::derive_tags;

/// Markup-level fallback for pages without structured data.
///
/// Scans attribute and class heuristics aimed at common recipe-card markup.
/// Timing and yield are unknowable at this level, so servings fall back to 2
/// and both times stay empty.
pub struct HtmlHeuristicExtractor;

/// Selector group for ingredient-list markup, tried as one query in
/// document order.
const INGREDIENT_SELECTORS: &str =
    "[data-test-id='ingredient-item-shipped'], .ingredients-list li, [class*='ingredient']";

/// Selector group for instruction-step markup.
const DIRECTION_SELECTORS: &str =
    "[data-test-id='instruction-step'], .instructions-list li, [class*='instruction'] p";

/// Direction nodes at or under this length are labels or decoration, not
/// steps.
const MIN_DIRECTION_CHARS: usize = 10;

fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

impl Extractor for HtmlHeuristicExtractor {
    fn extract(&self, context: &ParsingContext) -> Result<Extraction, ImportError> {
        let document = &context.document;

        let heading = Selector::parse("h1, h2").unwrap();
        let title = document
            .select(&heading)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let meta_description = Selector::parse("meta[name='description']").unwrap();
        let description = document
            .select(&meta_description)
            .next()
            .and_then(|el| el.value().attr("content"))
            .unwrap_or("")
            .to_string();

        let og_image = Selector::parse("meta[property='og:image']").unwrap();
        let image_url = document
            .select(&og_image)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(str::to_string);

        let ingredient_selector = Selector::parse(INGREDIENT_SELECTORS).unwrap();
        let ingredients: Vec<IngredientLine> = document
            .select(&ingredient_selector)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .map(|text| parse_ingredient_line(&text))
            .collect();

        let direction_selector = Selector::parse(DIRECTION_SELECTORS).unwrap();
        let directions: Vec<String> = document
            .select(&direction_selector)
            .map(element_text)
            .filter(|text| text.chars().count() > MIN_DIRECTION_CHARS)
            .collect();

        let ingredient_names: Vec<String> =
            ingredients.iter().map(|line| line.name.clone()).collect();
        let tags = derive_tags(&title, &ingredient_names, None, &[], None);

        debug!(
            "heuristic extraction on {}: {} ingredients, {} directions",
            context.url,
            ingredients.len(),
            directions.len()
        );

        Ok(Extraction::Found(Recipe {
            title,
            description,
            image_url,
            servings: 2,
            prep_time: None,
            cook_time: None,
            ingredients,
            directions,
            tags,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn context_for(html: &str) -> ParsingContext {
        ParsingContext {
            url: "https://example.com/recipe".to_string(),
            document: Html::parse_document(html),
        }
    }

    fn extract(html: &str) -> Recipe {
        match HtmlHeuristicExtractor.extract(&context_for(html)).unwrap() {
            Extraction::Found(recipe) => recipe,
            Extraction::NotFound => unreachable!("heuristic extraction always yields a record"),
        }
    }

    #[test]
    fn reads_heading_meta_and_lists() {
        let recipe = extract(
            r#"
            <html>
            <head>
                <meta name="description" content="A quick weeknight dinner">
                <meta property="og:image" content="https://example.com/dish.jpg">
            </head>
            <body>
                <h1>Chicken Stir Fry</h1>
                <ul class="ingredients-list">
                    <li>2 cups broccoli florets</li>
                    <li>1 lb chicken breast</li>
                </ul>
                <div class="instructions-list">
                    <li>Heat the wok until smoking hot.</li>
                    <li>Stir-fry the chicken in batches.</li>
                </div>
            </body>
            </html>
            "#,
        );

        assert_eq!(recipe.title, "Chicken Stir Fry");
        assert_eq!(recipe.description, "A quick weeknight dinner");
        assert_eq!(recipe.image_url.as_deref(), Some("https://example.com/dish.jpg"));
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.prep_time, None);
        assert_eq!(recipe.cook_time, None);

        let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert!(names.contains(&"broccoli florets"));
        assert!(names.contains(&"chicken breast"));
        assert_eq!(recipe.directions.len(), 2);
    }

    #[test]
    fn short_direction_nodes_are_noise() {
        let recipe = extract(
            r#"
            <html><body>
                <h1>Plain Dish</h1>
                <div class="instructions-list">
                    <li>Step 1</li>
                    <li>Simmer everything for twenty minutes.</li>
                </div>
            </body></html>
            "#,
        );
        assert_eq!(
            recipe.directions,
            vec!["Simmer everything for twenty minutes."]
        );
    }

    #[test]
    fn missing_everything_still_yields_a_record() {
        let recipe = extract("<html><body><p>nothing to see</p></body></html>");
        assert_eq!(recipe.title, "Imported Recipe");
        assert_eq!(recipe.description, "");
        assert_eq!(recipe.image_url, None);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.directions.is_empty());
        assert!(recipe.tags.is_empty());
    }

    #[test]
    fn tags_come_from_title_and_ingredients_without_time_bucket() {
        let recipe = extract(
            r#"
            <html><body>
                <h1>Veggie Bowl</h1>
                <ul class="ingredients-list"><li>1 cup rice</li></ul>
            </body></html>
            "#,
        );
        assert_eq!(recipe.tags, vec!["Vegetarian", "Bowl"]);
    }
}
