pub mod patterns;
pub mod classifier;
pub mod errors;

#[cfg(test)]
mod tests;

use regex::Regex;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

pub use classifier::{classify, validate, validate_by_name};
pub use errors::ValidationError;

/// The kinds of data the classifier knows how to recognise.
///
/// Declaration order is the order reports and [`classify`] use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    IntoStaticStr,
    Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Emails,
    Urls,
    PhoneNumbers,
    CreditCards,
    Times,
}

impl Category {
    /// Parses a canonical category name such as `phone_numbers`.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        name.parse()
            .map_err(|_| ValidationError::UnknownCategory(name.to_string()))
    }

    /// The compiled pattern backing this category
    pub fn pattern(self) -> &'static Regex {
        match self {
            Category::Emails => &patterns::EMAIL_REGEX,
            Category::Urls => &patterns::URL_REGEX,
            Category::PhoneNumbers => &patterns::PHONE_REGEX,
            Category::CreditCards => &patterns::CREDIT_CARD_REGEX,
            Category::Times => &patterns::TIME_REGEX,
        }
    }
}
