//! Free-text query interpretation.

use serde::Serialize;
use sift_core::{FilterCriteria, render_interpretation};
use tracing::debug;

use crate::config::InterpreterConfig;
use crate::error::BuildError;
use crate::experience::{ExperienceRule, parse_experience};
use crate::name::NameExtractor;
use crate::tables;
use crate::vocabulary::{VocabHit, Vocabulary};

/// The criteria field a rule contributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    RequiredSkill,
    OptionalSkill,
    Institution,
    Course,
    Company,
    MinExperience,
    MaxExperience,
    ExperienceRange,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::RequiredSkill => "required_skill",
            Self::OptionalSkill => "optional_skill",
            Self::Institution => "institution",
            Self::Course => "course",
            Self::Company => "company",
            Self::MinExperience => "min_experience",
            Self::MaxExperience => "max_experience",
            Self::ExperienceRange => "experience_range",
        }
    }
}

/// One rule that fired while interpreting a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub field: Field,
    /// Canonical value (or the phrase itself for experience rules).
    pub value: String,
    /// Lower-cased text the rule matched.
    pub matched: String,
    /// Byte offset of the match in the lower-cased query.
    pub start: usize,
}

impl RuleHit {
    fn from_vocab(field: Field, hit: VocabHit) -> Self {
        Self {
            field,
            value: hit.canonical,
            matched: hit.matched,
            start: hit.start,
        }
    }
}

/// Criteria inferred from a query, plus the trace of how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub query: String,
    pub criteria: FilterCriteria,
    pub hits: Vec<RuleHit>,
}

impl Interpretation {
    /// Human-readable summary of the inferred criteria.
    #[must_use]
    pub fn summary(&self) -> String {
        render_interpretation(&self.criteria)
    }
}

/// Rule-based interpreter over ordered vocabulary tables.
///
/// Built once and shared; `interpret` takes `&self` and holds no state
/// between calls.
#[derive(Debug, Clone)]
pub struct QueryInterpreter {
    skills: Vocabulary,
    institutions: Vocabulary,
    companies: Vocabulary,
    courses: Vocabulary,
    names: NameExtractor,
    optional_markers: Vec<String>,
    optional_window: usize,
}

impl QueryInterpreter {
    /// Build from configuration, rejecting invalid vocabulary patterns.
    pub fn new(config: &InterpreterConfig) -> Result<Self, BuildError> {
        Ok(Self::assemble(
            config,
            Vocabulary::compile(&config.skill_entries())?,
            Vocabulary::compile(&config.institution_entries())?,
            Vocabulary::compile(&config.company_entries())?,
            Vocabulary::compile(&config.course_entries())?,
        ))
    }

    /// Build with the built-in tables only.
    #[must_use]
    pub fn with_defaults() -> Self {
        let config = InterpreterConfig::default();
        Self::assemble(
            &config,
            Vocabulary::compile_lossy(&config.skill_entries()),
            Vocabulary::compile_lossy(&config.institution_entries()),
            Vocabulary::compile_lossy(&config.company_entries()),
            Vocabulary::compile_lossy(&config.course_entries()),
        )
    }

    fn assemble(
        config: &InterpreterConfig,
        skills: Vocabulary,
        institutions: Vocabulary,
        companies: Vocabulary,
        courses: Vocabulary,
    ) -> Self {
        let excluded = tables::excluded_name_words()
            .into_iter()
            .chain(config.extra_excluded_names.iter().cloned())
            .chain(skills.words().iter().cloned())
            .chain(institutions.words().iter().cloned())
            .chain(companies.words().iter().cloned())
            .chain(courses.words().iter().cloned());

        Self {
            names: NameExtractor::new(excluded),
            skills,
            institutions,
            companies,
            courses,
            optional_markers: config
                .optional_markers
                .iter()
                .map(|m| m.trim().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
            optional_window: config.optional_window,
        }
    }

    /// Interpret a free-text query. Never fails: unmatched text leaves the
    /// corresponding field unconstrained.
    #[must_use]
    pub fn interpret(&self, query: &str) -> Interpretation {
        let text = query.to_lowercase();
        let mut hits = Vec::new();

        let mut required = Vec::new();
        let mut optional = Vec::new();
        for hit in self.skills.find_all(&text) {
            let field = if self.is_optional(&text, hit.start, hit.end) {
                optional.push(hit.canonical.clone());
                Field::OptionalSkill
            } else {
                required.push(hit.canonical.clone());
                Field::RequiredSkill
            };
            hits.push(RuleHit::from_vocab(field, hit));
        }

        let institutes = collect(&self.institutions, &text, Field::Institution, &mut hits);
        let courses = collect(&self.courses, &text, Field::Course, &mut hits);
        let companies = collect(&self.companies, &text, Field::Company, &mut hits);

        let (experience, experience_hits) = parse_experience(&text);
        hits.extend(experience_hits.into_iter().map(|hit| {
            let field = match hit.rule {
                ExperienceRule::Minimum => Field::MinExperience,
                ExperienceRule::Maximum => Field::MaxExperience,
                ExperienceRule::Range => Field::ExperienceRange,
            };
            RuleHit {
                field,
                value: hit.matched.clone(),
                matched: hit.matched,
                start: hit.start,
            }
        }));

        let mut criteria = FilterCriteria::new()
            .with_skills(required)
            .with_optional_skills(optional)
            .with_institutes(institutes)
            .with_courses(courses)
            .with_experience(experience)
            .with_companies(companies);

        if let Some(name) = self.names.extract(&text) {
            criteria = criteria.with_name(&name.name);
            hits.push(RuleHit {
                field: Field::Name,
                value: name.name,
                matched: name.matched,
                start: name.start,
            });
        }

        debug!("Interpreted {:?} with {} rule hits", query, hits.len());

        Interpretation {
            query: query.to_string(),
            criteria,
            hits,
        }
    }

    fn is_optional(&self, text: &str, start: usize, end: usize) -> bool {
        let (before, after) = context_window(text, start, end, self.optional_window);
        self.optional_markers
            .iter()
            .any(|marker| contains_phrase(before, marker) || contains_phrase(after, marker))
    }
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn collect(vocab: &Vocabulary, text: &str, field: Field, hits: &mut Vec<RuleHit>) -> Vec<String> {
    vocab
        .find_all(text)
        .into_iter()
        .map(|hit| {
            let canonical = hit.canonical.clone();
            hits.push(RuleHit::from_vocab(field, hit));
            canonical
        })
        .collect()
}

/// Up to `radius` characters on each side of `start..end`.
fn context_window(text: &str, start: usize, end: usize, radius: usize) -> (&str, &str) {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);
    (&text[from..start], &text[end..to])
}

/// `phrase` occurs in `haystack` with no letters or digits glued to it.
fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    haystack.match_indices(phrase).any(|(i, _)| {
        let clear_before = haystack[..i]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let clear_after = haystack[i + phrase.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        clear_before && clear_after
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::{ExperienceRange, NO_CRITERIA};

    fn interpret(query: &str) -> Interpretation {
        QueryInterpreter::with_defaults().interpret(query)
    }

    #[test]
    fn test_skill_with_minimum_experience() {
        let result = interpret("Find python developers with minimum 2 years experience");
        let expected = FilterCriteria::new()
            .with_skills(["python"])
            .with_min_experience(2);

        assert_eq!(result.criteria, expected);
        assert_eq!(
            result.summary(),
            "Must have skills: python; Minimum 2 years experience"
        );
    }

    #[test]
    fn test_range_only() {
        let result = interpret("2-5 years experience");
        assert_eq!(
            result.criteria,
            FilterCriteria::new().with_experience(ExperienceRange::closed(2, 5))
        );
    }

    #[test]
    fn test_institutions_are_collected() {
        let result = interpret("Candidates from MIT or Stanford with react skills");
        assert_eq!(result.criteria.institutes(), ["MIT", "Stanford"]);
        assert_eq!(result.criteria.skills(), ["react"]);
        assert_eq!(result.criteria.name(), None);
    }

    #[test]
    fn test_institution_alias_collapses() {
        let result = interpret("from iit or indian institute of technology");
        assert_eq!(result.criteria.institutes(), ["IIT"]);
    }

    #[test]
    fn test_companies_and_skills() {
        let result = interpret("Candidates with react and nodejs skills from Google or Microsoft");
        assert_eq!(result.criteria.skills(), ["react", "nodejs"]);
        assert_eq!(result.criteria.companies(), ["Google", "Microsoft"]);
    }

    #[test]
    fn test_course_vocabulary() {
        let result = interpret("Candidates from MIT or Stanford with computer science degree");
        assert_eq!(result.criteria.courses(), ["Computer Science"]);
        assert_eq!(result.criteria.institutes(), ["MIT", "Stanford"]);
    }

    #[test]
    fn test_alias_maps_to_canonical_skill() {
        let result = interpret("js and k8s people");
        assert_eq!(result.criteria.skills(), ["javascript", "kubernetes"]);
    }

    #[test]
    fn test_java_does_not_match_javascript() {
        let result = interpret("Find javascript developers with 1-4 years experience");
        assert_eq!(result.criteria.skills(), ["javascript"]);
        assert_eq!(result.criteria.experience(), ExperienceRange::closed(1, 4));
    }

    #[test]
    fn test_optional_marker_in_window() {
        let result = interpret("java developer, react is nice to have");
        assert_eq!(result.criteria.skills(), ["java"]);
        assert_eq!(result.criteria.optional_skills(), ["react"]);
    }

    #[test]
    fn test_optional_marker_before_skill() {
        let result = interpret("bonus if docker");
        assert!(result.criteria.skills().is_empty());
        assert_eq!(result.criteria.optional_skills(), ["docker"]);
    }

    #[test]
    fn test_marker_outside_window_is_ignored() {
        let result =
            interpret("rust engineers for the storage team; a plus would be kubernetes");
        assert_eq!(result.criteria.skills(), ["rust"]);
        assert_eq!(result.criteria.optional_skills(), ["kubernetes"]);
    }

    #[test]
    fn test_skill_recorded_once() {
        let result = interpret("python, python and more python");
        assert_eq!(result.criteria.skills(), ["python"]);
        assert!(result.criteria.optional_skills().is_empty());
    }

    #[test]
    fn test_required_skill_is_not_also_optional() {
        let result = interpret("python developers, python is a plus");
        assert_eq!(result.criteria.skills(), ["python"]);
        assert!(result.criteria.optional_skills().is_empty());
        let skill_hits = result
            .hits
            .iter()
            .filter(|h| matches!(h.field, Field::RequiredSkill | Field::OptionalSkill))
            .count();
        assert_eq!(skill_hits, 1);
    }

    #[test]
    fn test_name_extraction() {
        let result = interpret("show candidate named priya sharma from iit");
        assert_eq!(result.criteria.name(), Some("Priya Sharma"));
        assert_eq!(result.criteria.institutes(), ["IIT"]);
    }

    #[test]
    fn test_vocabulary_terms_are_not_names() {
        let result = interpret("candidate java with 3+ years");
        assert_eq!(result.criteria.name(), None);
        assert_eq!(result.criteria.skills(), ["java"]);
        assert_eq!(result.criteria.experience().min, Some(3));
    }

    #[test]
    fn test_generic_query_is_unconstrained() {
        for query in ["", "   ", "show me everyone", "ruby on rails wizards"] {
            let result = interpret(query);
            assert!(result.criteria.is_unconstrained(), "query: {query:?}");
            assert_eq!(result.summary(), NO_CRITERIA);
            assert!(result.hits.is_empty());
        }
    }

    #[test]
    fn test_summary_is_stable() {
        let result = interpret("Show me candidates from IIT or MIT with minimum 2 years of experience in java");
        assert_eq!(result.summary(), result.summary());
        assert_eq!(
            result.summary(),
            "Must have skills: java; From institutions: IIT, MIT; Minimum 2 years experience"
        );
    }

    #[test]
    fn test_hits_trace_fields() {
        let result = interpret("python from tcs with 2-5 years");
        let fields: Vec<Field> = result.hits.iter().map(|h| h.field).collect();
        assert_eq!(
            fields,
            vec![Field::RequiredSkill, Field::Company, Field::ExperienceRange]
        );
        assert_eq!(result.hits[1].value, "TCS");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_extra_vocabulary_from_config() {
        let config = InterpreterConfig {
            extra_skills: vec![crate::VocabEntry::phrases("elixir", &["elixir", "ex"])],
            extra_excluded_names: vec!["wizard".to_string()],
            ..InterpreterConfig::default()
        };
        let interpreter = QueryInterpreter::new(&config).expect("extra entries should compile");
        let result = interpreter.interpret("candidate wizard who knows elixir");
        assert_eq!(result.criteria.skills(), ["elixir"]);
        assert_eq!(result.criteria.name(), None);
    }

    #[test]
    fn test_invalid_config_pattern_fails_build() {
        let config = InterpreterConfig {
            extra_companies: vec![crate::VocabEntry::pattern("Broken", "[a-")],
            ..InterpreterConfig::default()
        };
        assert!(QueryInterpreter::new(&config).is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_context_window_respects_char_boundaries() {
        let text = "ééé java ééé";
        let start = text.find("java").expect("needle is present");
        let (before, after) = context_window(text, start, start + 4, 2);
        assert_eq!(before, "é ");
        assert_eq!(after, " é");
    }

    #[test]
    fn test_contains_phrase_needs_clear_edges() {
        assert!(contains_phrase("react is a plus", "plus"));
        assert!(!contains_phrase("surplus budget", "plus"));
    }
}
