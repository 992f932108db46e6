use once_cell::sync::Lazy;
use regex::Regex;

// `^`/`$` anchor to the whole text (no multi-line mode), and every class is
// spelled in ASCII because `\w`, `\d` and `\s` are Unicode-aware in `regex`.

/// local part, `@`, one domain label, then one or more `.xx` alphabetic suffixes
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+(?:[._+-][a-zA-Z0-9]+)*@[a-zA-Z0-9-]+(?:\.[a-zA-Z]{2,})+$")
        .expect("email pattern is a valid regex")
});

/// http(s) scheme, at least one dotted label, a closing label and an optional path
pub static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(?:[A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]+(?:/[A-Za-z0-9_\-./?%&=]*)?$")
        .expect("url pattern is a valid regex")
});

/// `123-456-7890`, `(123) 456-7890`, `123.456.7890`, `1234567890`
pub static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\([0-9]{3}\)|[0-9]{3})[-.[:space:]]?[0-9]{3}[-.[:space:]]?[0-9]{4}$")
        .expect("phone pattern is a valid regex")
});

/// Four groups of four digits, each of the first three optionally followed by `-` or a space
pub static CREDIT_CARD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]{4}[- ]?){3}[0-9]{4}$").expect("credit card pattern is a valid regex")
});

/// 24-hour `HH:MM`, or 12-hour `H:MM` with a mandatory AM/PM marker (marker case-insensitive)
pub static TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:[01][0-9]|2[0-3]):[0-5][0-9]|(?:0?[1-9]|1[0-2]):[0-5][0-9][[:space:]]?(?i:AM|PM))$",
    )
    .expect("time pattern is a valid regex")
});
