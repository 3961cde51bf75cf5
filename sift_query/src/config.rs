use serde::{Deserialize, Serialize};

use crate::tables;
use crate::vocabulary::VocabEntry;

/// Interpreter tuning and vocabulary extensions.
///
/// `extra_*` entries are appended after the built-in tables, so they can add
/// terms but never shadow a built-in match that appears earlier in the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Characters inspected on each side of a skill for optionality markers.
    #[serde(default = "InterpreterConfig::default_window")]
    pub optional_window: usize,

    #[serde(default = "tables::optional_markers")]
    pub optional_markers: Vec<String>,

    #[serde(default)]
    pub extra_skills: Vec<VocabEntry>,

    #[serde(default)]
    pub extra_institutions: Vec<VocabEntry>,

    #[serde(default)]
    pub extra_companies: Vec<VocabEntry>,

    #[serde(default)]
    pub extra_courses: Vec<VocabEntry>,

    /// Additional words never accepted as part of a name.
    #[serde(default)]
    pub extra_excluded_names: Vec<String>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            optional_window: Self::default_window(),
            optional_markers: tables::optional_markers(),
            extra_skills: Vec::new(),
            extra_institutions: Vec::new(),
            extra_companies: Vec::new(),
            extra_courses: Vec::new(),
            extra_excluded_names: Vec::new(),
        }
    }
}

fn with_extra(mut base: Vec<VocabEntry>, extra: &[VocabEntry]) -> Vec<VocabEntry> {
    base.extend_from_slice(extra);
    base
}

impl InterpreterConfig {
    const fn default_window() -> usize {
        20
    }

    #[must_use]
    pub fn skill_entries(&self) -> Vec<VocabEntry> {
        with_extra(tables::skills(), &self.extra_skills)
    }

    #[must_use]
    pub fn institution_entries(&self) -> Vec<VocabEntry> {
        with_extra(tables::institutions(), &self.extra_institutions)
    }

    #[must_use]
    pub fn company_entries(&self) -> Vec<VocabEntry> {
        with_extra(tables::companies(), &self.extra_companies)
    }

    #[must_use]
    pub fn course_entries(&self) -> Vec<VocabEntry> {
        with_extra(tables::courses(), &self.extra_courses)
    }
}
