use scraper::Html;

use crate::error::ImportError;
use crate::model::Recipe;

mod html_class;
mod json_ld;

pub use self::html_class::HtmlHeuristicExtractor;
pub use self::json_ld::StructuredDataExtractor;

/// Title used when a page carries no usable one.
pub(crate) const DEFAULT_TITLE: &str = "Imported Recipe";

/// Inputs shared by every extraction strategy.
pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

/// Outcome of one extraction strategy.
///
/// `NotFound` means the page simply does not carry what this strategy looks
/// for; the next strategy in the chain gets its turn. It is not an error.
pub enum Extraction {
    Found(Recipe),
    NotFound,
}

pub trait Extractor {
    fn extract(&self, context: &ParsingContext) -> Result<Extraction, ImportError>;
}
