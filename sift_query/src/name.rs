//! Candidate name extraction.
//!
//! Two ordered patterns, `named|called X` then `candidate X`. The capture ends
//! at the first connector word and is rejected when any of its words is in the
//! exclusion vocabulary, which is what keeps phrases like "candidate java"
//! from becoming a name. The exclusion list is data and needs the same upkeep
//! as the vocabulary tables.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

const MAX_NAME_WORDS: usize = 3;

const NAME_PATTERNS: &[&str] = &[
    r"\b(?:named|called)\s+(\p{L}[\p{L}'.-]*(?:\s+\p{L}[\p{L}'.-]*)*)",
    r"\bcandidate\s+(\p{L}[\p{L}'.-]*(?:\s+\p{L}[\p{L}'.-]*)*)",
];

const CONNECTORS: &[&str] = &[
    "with", "from", "who", "and", "or", "having", "has", "in", "at", "of", "for", "that",
    "which", "whose", "knows", "knowing", "skilled", "working", "studied", "studying",
];

static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn patterns() -> &'static [Regex] {
    PATTERNS.get_or_init(|| {
        NAME_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("Static regex pattern is guaranteed to be valid"))
            .collect()
    })
}

/// A name accepted from the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameHit {
    /// Title-cased name.
    pub name: String,
    /// The lower-cased words the name was built from.
    pub matched: String,
    pub start: usize,
}

/// Extracts a candidate name, guarded by an exclusion vocabulary.
#[derive(Debug, Clone, Default)]
pub struct NameExtractor {
    excluded: HashSet<String>,
}

impl NameExtractor {
    #[must_use]
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            excluded: excluded
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn is_excluded(&self, word: &str) -> bool {
        self.excluded.contains(&word.to_lowercase())
    }

    /// Try each pattern in order; the first accepted capture wins.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<NameHit> {
        patterns().iter().find_map(|re| {
            let capture = re.captures(text)?.get(1)?;
            self.accept(capture.as_str()).map(|words| NameHit {
                name: title_case(&words),
                matched: words.join(" "),
                start: capture.start(),
            })
        })
    }

    fn accept<'a>(&self, capture: &'a str) -> Option<Vec<&'a str>> {
        let words: Vec<&str> = capture
            .split_whitespace()
            .map(|w| w.trim_end_matches(['.', '\'', '-']))
            .take_while(|w| !CONNECTORS.contains(w))
            .take(MAX_NAME_WORDS)
            .collect();

        if words.is_empty() || words.iter().any(|w| w.is_empty() || self.is_excluded(w)) {
            return None;
        }
        Some(words)
    }
}

/// Upper-case the first letter of each word and of each `'` or `-` part.
fn title_case(words: &[&str]) -> String {
    words
        .iter()
        .map(|word| {
            let mut capitalize = true;
            word.chars()
                .flat_map(|c| {
                    let upper = capitalize && c.is_alphabetic();
                    capitalize = matches!(c, '\'' | '-');
                    if upper {
                        c.to_uppercase().collect::<Vec<_>>()
                    } else {
                        vec![c]
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
