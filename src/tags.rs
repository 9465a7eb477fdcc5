//! Derives a small descriptive tag set from weak textual signals.

use crate::duration::TimeBucket;

/// Keyword → tag rules tested against the title and the ingredient names,
/// in this order.
const PROTEIN_RULES: &[(&[&str], &str)] = &[
    (&["chicken"], "Chicken"),
    (&["beef", "steak"], "Beef"),
    (&["pork"], "Pork"),
    (&["shrimp", "salmon", "fish"], "Seafood"),
];

/// Keyword → tag rules tested against the title only, in this order.
const STYLE_RULES: &[(&[&str], &str)] = &[
    (&["vegetarian", "veggie"], "Vegetarian"),
    (&["bowl"], "Bowl"),
    (&["salad"], "Salad"),
    (&["pasta", "spaghetti"], "Pasta"),
    (&["taco", "burrito"], "Mexican"),
    (&["stir fry", "teriyaki", "asian"], "Asian"),
];

const MAX_TAGS: usize = 6;

/// Derive an ordered tag set for a recipe.
///
/// Insertion order: time bucket, cuisine, categories, protein rules, style
/// rules. First occurrence wins; later case-insensitive duplicates are
/// dropped, and the list is cut to six entries. The time bucket, when one
/// is derivable, is always the first tag and there is never more than one.
pub fn derive_tags(
    title: &str,
    ingredient_names: &[String],
    cuisine: Option<&str>,
    categories: &[String],
    total_minutes: Option<u32>,
) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    if let Some(bucket) = total_minutes.and_then(TimeBucket::from_minutes) {
        push_tag(&mut tags, bucket.label().to_string());
    }

    if let Some(cuisine) = cuisine {
        push_tag(&mut tags, title_case(cuisine));
    }

    for category in categories {
        push_tag(&mut tags, title_case(category));
    }

    let title_lower = title.to_lowercase();
    let names_lower = ingredient_names
        .iter()
        .map(|name| name.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    for (keywords, tag) in PROTEIN_RULES {
        if keywords
            .iter()
            .any(|kw| title_lower.contains(kw) || names_lower.contains(kw))
        {
            push_tag(&mut tags, (*tag).to_string());
        }
    }

    for (keywords, tag) in STYLE_RULES {
        if keywords.iter().any(|kw| title_lower.contains(kw)) {
            push_tag(&mut tags, (*tag).to_string());
        }
    }

    tags.truncate(MAX_TAGS);
    tags
}

fn push_tag(tags: &mut Vec<String>, tag: String) {
    if !tags.iter().any(|t| t.to_lowercase() == tag.to_lowercase()) {
        tags.push(tag);
    }
}

/// Lowercase the whole string, then capitalize the first letter of each
/// whitespace-separated word. No acronym handling: "BBQ" becomes "Bbq".
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn time_bucket_comes_first() {
        let tags = derive_tags(
            "Chicken Bowl",
            &names(&["1 cup rice"]),
            None,
            &[],
            Some(35),
        );
        assert_eq!(tags[0], "45 Minutes");
        assert!(tags.contains(&"Chicken".to_string()));
        assert!(tags.contains(&"Bowl".to_string()));
    }

    #[test]
    fn no_time_bucket_without_minutes() {
        let tags = derive_tags("Beef Tacos", &[], None, &[], None);
        assert_eq!(tags, vec!["Beef", "Mexican"]);

        let zero = derive_tags("Beef Tacos", &[], None, &[], Some(0));
        assert_eq!(zero, vec!["Beef", "Mexican"]);
    }

    #[test]
    fn cuisine_and_categories_are_title_cased_in_order() {
        let tags = derive_tags(
            "Some Dish",
            &[],
            Some("ITALIAN"),
            &names(&["main course", "weeknight"]),
            Some(20),
        );
        assert_eq!(tags, vec!["30 Minutes", "Italian", "Main Course", "Weeknight"]);
    }

    #[test]
    fn proteins_match_ingredient_names_too() {
        let tags = derive_tags(
            "Weeknight Skillet",
            &names(&["boneless chicken thighs", "salmon fillet"]),
            None,
            &[],
            None,
        );
        assert_eq!(tags, vec!["Chicken", "Seafood"]);
    }

    #[test]
    fn style_rules_check_title_only() {
        let tags = derive_tags("Garden Medley", &names(&["pasta shells"]), None, &[], None);
        assert!(tags.is_empty());
    }

    #[test]
    fn duplicates_are_dropped_case_insensitively() {
        let tags = derive_tags(
            "Chicken Salad",
            &names(&["chicken breast"]),
            None,
            &names(&["CHICKEN"]),
            None,
        );
        assert_eq!(tags, vec!["Chicken", "Salad"]);
    }

    #[test]
    fn tag_list_is_capped_at_six() {
        let tags = derive_tags(
            "Chicken Beef Pork Fish Veggie Bowl Salad Pasta Taco",
            &[],
            Some("fusion"),
            &names(&["dinner", "lunch"]),
            Some(90),
        );
        assert_eq!(tags.len(), 6);
        assert_eq!(tags[0], "1 Hour+");
        // only one time bucket ever appears
        let buckets = ["15 Minutes", "30 Minutes", "45 Minutes", "1 Hour", "1 Hour+"];
        assert_eq!(tags.iter().filter(|t| buckets.contains(&t.as_str())).count(), 1);
    }

    #[test]
    fn title_case_flattens_internal_capitals() {
        assert_eq!(title_case("BBQ ribs"), "Bbq Ribs");
        assert_eq!(title_case("comfort  food"), "Comfort  Food");
        assert_eq!(title_case(""), "");
    }
}
