//! Data-driven `(pattern, canonical value)` rule tables.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::BuildError;

/// One vocabulary rule: a set of raw phrases, or an explicit regex, that maps
/// to a single canonical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// Value recorded in the criteria when the rule fires.
    pub canonical: String,

    /// Literal phrases, matched on word boundaries.
    #[serde(default)]
    pub phrases: Vec<String>,

    /// Explicit regex, used instead of `phrases` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl VocabEntry {
    #[must_use]
    pub fn phrases(canonical: &str, phrases: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            phrases: phrases.iter().map(|p| (*p).to_string()).collect(),
            pattern: None,
        }
    }

    #[must_use]
    pub fn pattern(canonical: &str, pattern: &str) -> Self {
        Self {
            canonical: canonical.to_string(),
            phrases: Vec::new(),
            pattern: Some(pattern.to_string()),
        }
    }

    /// Lower-cased words this entry matches on, used to keep vocabulary terms
    /// out of extracted names.
    pub fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.phrases
            .iter()
            .chain(std::iter::once(&self.canonical))
            .flat_map(|phrase| phrase.split_whitespace())
            .map(str::to_lowercase)
    }

    /// Regex source for this entry.
    ///
    /// Phrases are escaped, longest first so that `spring boot` wins over
    /// `spring`, and anchored with `\b` on whichever ends are word characters.
    #[must_use]
    pub fn regex_source(&self) -> Option<String> {
        if let Some(pattern) = &self.pattern {
            return Some(pattern.clone());
        }

        let mut phrases: Vec<&str> = self
            .phrases
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect();
        if phrases.is_empty() {
            return None;
        }
        phrases.sort_by_key(|p| std::cmp::Reverse(p.len()));

        let alternatives: Vec<String> = phrases
            .iter()
            .map(|phrase| {
                let lower = phrase.to_lowercase();
                let head = if lower.starts_with(is_word_char) { r"\b" } else { "" };
                let tail = if lower.ends_with(is_word_char) { r"\b" } else { "" };
                format!("{head}{}{tail}", regex::escape(&lower))
            })
            .collect();

        Some(format!("(?:{})", alternatives.join("|")))
    }

    fn compile(&self) -> Result<CompiledEntry, BuildError> {
        let source = self
            .regex_source()
            .ok_or_else(|| BuildError::Empty(self.canonical.clone()))?;
        let regex = Regex::new(&source).map_err(|source| BuildError::Regex {
            canonical: self.canonical.clone(),
            source,
        })?;
        Ok(CompiledEntry {
            regex,
            canonical: self.canonical.clone(),
        })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug, Clone)]
struct CompiledEntry {
    regex: Regex,
    canonical: String,
}

/// Where a vocabulary rule fired in the (lower-cased) query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabHit {
    pub canonical: String,
    pub matched: String,
    pub start: usize,
    pub end: usize,
}

/// An ordered, compiled rule table.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<CompiledEntry>,
    words: Vec<String>,
}

impl Vocabulary {
    /// Compile every entry, failing on the first invalid one.
    pub fn compile(entries: &[VocabEntry]) -> Result<Self, BuildError> {
        let compiled = entries
            .iter()
            .map(VocabEntry::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            entries: compiled,
            words: collect_words(entries),
        })
    }

    /// Compile every entry, skipping invalid ones with a warning.
    #[must_use]
    pub fn compile_lossy(entries: &[VocabEntry]) -> Self {
        let compiled = entries
            .iter()
            .filter_map(|entry| match entry.compile() {
                Ok(compiled) => Some(compiled),
                Err(e) => {
                    warn!("Skipping vocabulary entry: {e}");
                    None
                }
            })
            .collect();
        Self {
            entries: compiled,
            words: collect_words(entries),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every word the table matches on, lower-cased.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// First match of every rule, ordered by position in `text`.
    ///
    /// A canonical value is reported once even if several rules map to it.
    #[must_use]
    pub fn find_all(&self, text: &str) -> Vec<VocabHit> {
        let mut hits: Vec<VocabHit> = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry.regex.find(text).map(|m| VocabHit {
                    canonical: entry.canonical.clone(),
                    matched: m.as_str().to_string(),
                    start: m.start(),
                    end: m.end(),
                })
            })
            .collect();
        hits.sort_by_key(|hit| hit.start);

        let mut seen = std::collections::HashSet::new();
        hits.retain(|hit| seen.insert(hit.canonical.to_lowercase()));
        hits
    }

    /// Canonical values found in `text`, in order of appearance.
    #[must_use]
    pub fn canonicals(&self, text: &str) -> Vec<String> {
        self.find_all(text)
            .into_iter()
            .map(|hit| hit.canonical)
            .collect()
    }
}

fn collect_words(entries: &[VocabEntry]) -> Vec<String> {
    let mut words: Vec<String> = entries.iter().flat_map(VocabEntry::words).collect();
    words.sort();
    words.dedup();
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_respect_word_boundaries() {
        let vocab = Vocabulary::compile_lossy(&[VocabEntry::phrases("java", &["java"])]);
        assert_eq!(vocab.canonicals("senior java dev"), vec!["java"]);
        assert!(vocab.canonicals("javascript only").is_empty());
    }

    #[test]
    fn test_symbol_phrases() {
        let vocab = Vocabulary::compile_lossy(&[
            VocabEntry::phrases("c++", &["c++", "cpp"]),
            VocabEntry::phrases("nodejs", &["node.js", "nodejs"]),
        ]);
        assert_eq!(vocab.canonicals("c++ and node.js"), vec!["c++", "nodejs"]);
    }

    #[test]
    fn test_longest_phrase_wins() {
        let entry = VocabEntry::phrases("spring", &["spring", "spring boot"]);
        let vocab = Vocabulary::compile_lossy(std::slice::from_ref(&entry));
        let hits = vocab.find_all("knows spring boot well");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].matched, "spring boot");
    }

    #[test]
    fn test_hits_ordered_by_position_and_deduped() {
        let vocab = Vocabulary::compile_lossy(&[
            VocabEntry::phrases("Google", &["google"]),
            VocabEntry::phrases("Microsoft", &["microsoft"]),
            VocabEntry::pattern("Google", r"\balphabet\b"),
        ]);
        assert_eq!(
            vocab.canonicals("microsoft, alphabet or google"),
            vec!["Microsoft", "Google"]
        );
    }

    #[test]
    fn test_invalid_pattern_is_build_error() {
        let result = Vocabulary::compile(&[VocabEntry::pattern("bad", "(unclosed")]);
        assert!(matches!(result, Err(BuildError::Regex { .. })));

        let result = Vocabulary::compile(&[VocabEntry::phrases("empty", &[])]);
        assert!(matches!(result, Err(BuildError::Empty(_))));
    }

    #[test]
    fn test_lossy_compile_skips_invalid() {
        let vocab = Vocabulary::compile_lossy(&[
            VocabEntry::pattern("bad", "(unclosed"),
            VocabEntry::phrases("rust", &["rust"]),
        ]);
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.canonicals("rust"), vec!["rust"]);
    }

    #[test]
    fn test_words_include_phrases_and_canonical() {
        let vocab = Vocabulary::compile_lossy(&[VocabEntry::phrases(
            "Computer Science",
            &["cse"],
        )]);
        assert_eq!(vocab.words(), ["computer", "cse", "science"]);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_entry_deserializes_with_defaults() {
        let entry: VocabEntry =
            serde_json::from_str(r#"{"canonical":"rust","phrases":["rust","rustlang"]}"#)
                .expect("valid JSON should deserialize");
        assert_eq!(entry.pattern, None);
        assert_eq!(entry.phrases.len(), 2);
    }
}
