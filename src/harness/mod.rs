pub mod config;
pub mod report;
pub mod samples;

use strum::IntoEnumIterator;
use tracing::{info, warn};

use crate::data_classifier::{validate, Category};
pub use self::config::{HarnessConfig, OutputFormat};
pub use report::{render_json, render_text, CategoryReport, SampleResult, Verdict};
pub use samples::{samples_for, SAMPLES};

/// Runs the built-in samples for the given categories.
///
/// Categories are reported in category order whatever order they are passed
/// in, and each is reported at most once. A category with no samples is
/// skipped.
pub fn run(categories: &[Category]) -> Vec<CategoryReport> {
    info!("Running sample table for {} categories", categories.len());

    let mut reports = Vec::new();
    for category in Category::iter().filter(|c| categories.contains(c)) {
        let Some(samples) = samples_for(category) else {
            warn!("No samples for category {}, skipping", category);
            continue;
        };

        let results = samples
            .iter()
            .map(|sample| SampleResult {
                sample: sample.to_string(),
                verdict: validate(category, sample).into(),
            })
            .collect();
        reports.push(CategoryReport { category, results });
    }

    let matched: usize = reports.iter().map(CategoryReport::match_count).sum();
    let total: usize = reports.iter().map(|r| r.results.len()).sum();
    info!(
        "Sample table complete. {} categories reported, {}/{} samples matched",
        reports.len(),
        matched,
        total
    );
    reports
}

pub fn run_all() -> Vec<CategoryReport> {
    let all: Vec<Category> = Category::iter().collect();
    run(&all)
}

/// Validates one caller-supplied string; an empty selection means every category.
pub fn check(text: &str, categories: &[Category]) -> Vec<(Category, bool)> {
    Category::iter()
        .filter(|c| categories.is_empty() || categories.contains(c))
        .map(|c| (c, validate(c, text)))
        .collect()
}
