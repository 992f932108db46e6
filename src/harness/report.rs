use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data_classifier::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Match,
    NoMatch,
}

impl From<bool> for Verdict {
    fn from(matched: bool) -> Self {
        if matched {
            Verdict::Match
        } else {
            Verdict::NoMatch
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Match => write!(f, "MATCH"),
            Verdict::NoMatch => write!(f, "NO MATCH"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleResult {
    pub sample: String,
    pub verdict: Verdict,
}

impl SampleResult {
    pub fn matched(&self) -> bool {
        self.verdict == Verdict::Match
    }
}

/// Results of one category, samples kept in table order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    pub results: Vec<SampleResult>,
}

impl CategoryReport {
    pub fn match_count(&self) -> usize {
        self.results.iter().filter(|r| r.matched()).count()
    }
}

/// Plain text report: a header per category and one padded line per sample.
pub fn render_text(reports: &[CategoryReport], width: usize) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!(
            "\nTesting {}:\n",
            report.category.as_ref().to_uppercase()
        ));
        for result in &report.results {
            let quoted = format!("{:?}", result.sample);
            out.push_str(&format!("  {:<width$} -> {}\n", quoted, result.verdict, width = width));
        }
    }
    out
}

pub fn render_json(reports: &[CategoryReport]) -> Result<String> {
    serde_json::to_string_pretty(reports).context("Failed to serialize report")
}
