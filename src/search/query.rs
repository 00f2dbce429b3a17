//! Free-text query parsing for part search.
//!
//! Queries are sanitized to letters, digits, spaces, hyphens and apostrophes, then
//! split on spaces into lowercase terms. Every term must match a whole token.

/// Parsed search query: lowercase terms combined with AND
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub terms: Vec<String>,
}

impl SearchQuery {
    pub fn parse(input: &str) -> Self {
        let sanitized: String = input
            .chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '\''))
            .collect();

        let terms = sanitized.split_whitespace().map(str::to_lowercase).collect();

        Self { terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
