use reconview_common::error::IngestResult;

use super::ArtifactParser;

/// Flat newline-separated lists: subdomains, emails, dorks.
#[derive(Debug, Clone, Copy)]
pub struct LineList {
    category: &'static str,
}

impl LineList {
    pub fn new(category: &'static str) -> Self {
        Self { category }
    }
}

impl ArtifactParser for LineList {
    type Output = Vec<String>;

    fn category(&self) -> &'static str {
        self.category
    }

    fn parse(&self, raw: &str) -> IngestResult<Self::Output> {
        Ok(split_lines(raw))
    }
}

/// Trimmed, non-empty lines in file order. Duplicates are kept.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
