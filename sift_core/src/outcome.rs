use serde::Serialize;

use crate::candidate::Candidate;
use crate::criteria::FilterCriteria;

/// The answer to one query: the matches plus the criteria actually applied.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub total_candidates: usize,
    pub candidates: Vec<Candidate>,
    pub filter: FilterCriteria,
    /// Original free-text query, natural-language path only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Rendered interpretation, natural-language path only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_query: Option<String>,
}

impl SearchOutcome {
    #[must_use]
    pub fn new(matches: &[&Candidate], filter: FilterCriteria) -> Self {
        Self {
            total_candidates: matches.len(),
            candidates: matches.iter().map(|&c| c.clone()).collect(),
            filter,
            query: None,
            parsed_query: None,
        }
    }

    #[must_use]
    pub fn with_interpretation(
        mut self,
        query: impl Into<String>,
        parsed_query: impl Into<String>,
    ) -> Self {
        self.query = Some(query.into());
        self.parsed_query = Some(parsed_query.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_direct_outcome_omits_interpretation() {
        let candidate = Candidate::new("John Doe");
        let outcome = SearchOutcome::new(&[&candidate], FilterCriteria::new());
        let value = serde_json::to_value(&outcome).expect("outcome should serialize");

        assert_eq!(value["total_candidates"], 1);
        assert_eq!(value["candidates"][0]["name"], "John Doe");
        assert!(value.get("parsed_query").is_none());
    }

    #[test]
    fn test_interpretation_attached() {
        let outcome = SearchOutcome::new(&[], FilterCriteria::new())
            .with_interpretation("anyone", crate::NO_CRITERIA);
        assert_eq!(outcome.total_candidates, 0);
        assert_eq!(outcome.parsed_query.as_deref(), Some(crate::NO_CRITERIA));
    }
}
