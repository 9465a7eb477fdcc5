//! Imports recipes from publisher web pages.
//!
//! Given a URL, the importer fetches the page, prefers an embedded
//! schema.org Recipe block (JSON-LD) and falls back to markup heuristics,
//! returning one normalized [`Recipe`] per call. Only a failed fetch is
//! fatal; everything after the fetch degrades to a best-effort record.

pub mod config;
pub mod duration;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod ingredient;
pub mod model;
pub mod tags;
pub mod text;

use std::time::Duration;

use log::debug;
use scraper::Html;

use crate::config::ImportConfig;
use crate::extractors::{
    Extraction, Extractor, HtmlHeuristicExtractor, ParsingContext, StructuredDataExtractor,
};
use crate::fetch::PageFetcher;

pub use crate::error::ImportError;
pub use crate::model::{IngredientLine, Recipe};

/// Import a recipe from a publisher page with default settings.
pub async fn import_recipe(url: &str) -> Result<Recipe, ImportError> {
    import_recipe_with_config(url, &ImportConfig::default()).await
}

/// Import a recipe with an explicit fetch timeout.
pub async fn import_recipe_with_timeout(
    url: &str,
    timeout: Duration,
) -> Result<Recipe, ImportError> {
    let fetcher = PageFetcher::new(Some(timeout))?;
    let body = fetcher.fetch(url).await?;
    extract_from_body(url, &body)
}

/// Import a recipe using loaded [`ImportConfig`] settings.
pub async fn import_recipe_with_config(
    url: &str,
    config: &ImportConfig,
) -> Result<Recipe, ImportError> {
    let fetcher = PageFetcher::with_user_agent(
        Some(Duration::from_secs(config.timeout)),
        &config.user_agent,
    )?;
    let body = fetcher.fetch(url).await?;
    extract_from_body(url, &body)
}

/// Run the extraction chain over an already-fetched page body.
///
/// Strategies run in order; the first to find a recipe wins. The heuristic
/// strategy always yields a record, so the trailing error is defensive.
pub fn extract_from_body(url: &str, body: &str) -> Result<Recipe, ImportError> {
    let context = ParsingContext {
        url: url.to_string(),
        document: Html::parse_document(body),
    };

    let strategies: Vec<Box<dyn Extractor>> = vec![
        Box::new(StructuredDataExtractor),
        Box::new(HtmlHeuristicExtractor),
    ];

    for strategy in strategies {
        match strategy.extract(&context)? {
            Extraction::Found(recipe) => {
                debug!("imported \"{}\" from {url}", recipe.title);
                return Ok(recipe);
            }
            Extraction::NotFound => continue,
        }
    }

    Err(ImportError::ParseError(format!(
        "no extraction strategy matched {url}"
    )))
}
