use strum::IntoEnumIterator;
use tracing::debug;

use super::{Category, ValidationError};

/// Returns true if the whole of `text` matches the pattern for `category`
pub fn validate(category: Category, text: &str) -> bool {
    let matched = category.pattern().is_match(text);
    debug!("{} {:?} -> {}", category, text, matched);
    matched
}

/// Same as [`validate`], keyed by the category's canonical name
pub fn validate_by_name(name: &str, text: &str) -> Result<bool, ValidationError> {
    let category = Category::from_name(name)?;
    Ok(validate(category, text))
}

/// Returns every category that accepts `text`, in category order
pub fn classify(text: &str) -> Vec<Category> {
    Category::iter()
        .filter(|category| validate(*category, text))
        .collect()
}
