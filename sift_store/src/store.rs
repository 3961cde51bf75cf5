use std::path::Path;
use std::sync::Arc;

use sift_core::{Candidate, FilterCriteria, SearchOutcome, filter_candidates, par_filter_candidates};
use sift_query::QueryInterpreter;
use tracing::debug;

use crate::error::Result;
use crate::loader::{LoadReport, load_path};

/// Record sets at least this large are filtered on the rayon pool.
const PARALLEL_THRESHOLD: usize = 4096;

/// Immutable, cheaply clonable candidate set shared across requests.
#[derive(Debug, Clone, Default)]
pub struct CandidateStore {
    candidates: Arc<[Candidate]>,
}

impl CandidateStore {
    #[must_use]
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates: candidates.into(),
        }
    }

    pub fn open(path: &Path, list_delimiter: char) -> Result<(Self, LoadReport)> {
        let (candidates, report) = load_path(path, list_delimiter)?;
        Ok((Self::new(candidates), report))
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Run structured criteria against every record.
    #[must_use]
    pub fn search(&self, criteria: FilterCriteria) -> SearchOutcome {
        let matches = if self.candidates.len() >= PARALLEL_THRESHOLD {
            par_filter_candidates(&self.candidates, &criteria)
        } else {
            filter_candidates(&self.candidates, &criteria)
        };
        SearchOutcome::new(&matches, criteria)
    }

    /// Interpret free text, then search with the inferred criteria.
    #[must_use]
    pub fn search_text(&self, interpreter: &QueryInterpreter, query: &str) -> SearchOutcome {
        let interpretation = interpreter.interpret(query);
        let parsed = interpretation.summary();
        debug!("Query {:?} parsed as: {parsed}", query);
        self.search(interpretation.criteria)
            .with_interpretation(query, parsed)
    }
}

impl From<Vec<Candidate>> for CandidateStore {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self::new(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::NO_CRITERIA;

    fn store() -> CandidateStore {
        CandidateStore::new(vec![
            Candidate::new("John Doe")
                .with_skills(["Java", "SQL"])
                .with_institute("IIT")
                .with_experience(2, 5),
            Candidate::new("Priya Sharma")
                .with_skills(["python"])
                .with_optional_skills(["React"])
                .with_institute("MIT")
                .with_experience(3, 12),
        ])
    }

    #[test]
    fn test_empty_criteria_returns_all_in_order() {
        let outcome = store().search(FilterCriteria::new());
        assert_eq!(outcome.total_candidates, 2);
        assert_eq!(outcome.candidates[0].name, "John Doe");
        assert_eq!(outcome.candidates[1].name, "Priya Sharma");
        assert!(outcome.parsed_query.is_none());
    }

    #[test]
    fn test_search_echoes_criteria() {
        let criteria = FilterCriteria::new().with_skills(["java"]);
        let outcome = store().search(criteria.clone());
        assert_eq!(outcome.total_candidates, 1);
        assert_eq!(outcome.filter, criteria);
    }

    #[test]
    fn test_search_text_attaches_interpretation() {
        let interpreter = QueryInterpreter::with_defaults();
        let outcome = store().search_text(&interpreter, "react would be a plus");
        assert_eq!(outcome.total_candidates, 1);
        assert_eq!(outcome.candidates[0].name, "Priya Sharma");
        assert_eq!(outcome.query.as_deref(), Some("react would be a plus"));
        assert_eq!(
            outcome.parsed_query.as_deref(),
            Some("Nice to have skills: react")
        );
    }

    #[test]
    fn test_search_text_without_criteria() {
        let interpreter = QueryInterpreter::with_defaults();
        let outcome = store().search_text(&interpreter, "");
        assert_eq!(outcome.total_candidates, 2);
        assert_eq!(outcome.parsed_query.as_deref(), Some(NO_CRITERIA));
    }

    #[test]
    fn test_large_store_uses_same_semantics() {
        let candidates: Vec<Candidate> = (0..PARALLEL_THRESHOLD + 10)
            .map(|i| {
                let skill = if i % 2 == 0 { "rust" } else { "go" };
                Candidate::new(format!("c{i}")).with_skills([skill])
            })
            .collect();
        let outcome = CandidateStore::from(candidates)
            .search(FilterCriteria::new().with_skills(["rust"]));

        assert_eq!(outcome.total_candidates, (PARALLEL_THRESHOLD + 10).div_ceil(2));
        assert_eq!(outcome.candidates[0].name, "c0");
        assert_eq!(outcome.candidates[1].name, "c2");
    }
}
