//! Experience phrasing: minimum, maximum, and range families.
//!
//! Families are applied in order. The first minimum phrase sets the lower
//! bound, the first maximum phrase sets the upper bound, and a range phrase
//! then overrides both.

use std::sync::OnceLock;

use regex::Regex;
use sift_core::ExperienceRange;

const YEARS: &str = r"\s*(?:years?|yrs?)\b";

const MIN_PATTERNS: &[&str] = &[
    r"\b(?:minimum|min|at\s+least|atleast)\s+(?:of\s+)?(\d{1,2})\s*\+?",
    r"\b(\d{1,2})\s*\+",
];

const MAX_PATTERNS: &[&str] = &[r"\b(?:maximum|max|up\s*to|at\s+most|atmost)\s+(?:of\s+)?(\d{1,2})"];

const RANGE_PATTERNS: &[&str] = &[
    r"\bbetween\s+(\d{1,2})\s+and\s+(\d{1,2})",
    r"\b(\d{1,2})\s*(?:-|–|to)\s*(\d{1,2})",
];

struct ExperienceRules {
    min: Vec<Regex>,
    max: Vec<Regex>,
    range: Vec<Regex>,
}

static RULES: OnceLock<ExperienceRules> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(&format!("{p}{YEARS}"))
                .expect("Static regex pattern is guaranteed to be valid")
        })
        .collect()
}

fn rules() -> &'static ExperienceRules {
    RULES.get_or_init(|| ExperienceRules {
        min: compile(MIN_PATTERNS),
        max: compile(MAX_PATTERNS),
        range: compile(RANGE_PATTERNS),
    })
}

/// Which phrasing family produced a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceRule {
    Minimum,
    Maximum,
    Range,
}

/// One experience phrase found in the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceHit {
    pub rule: ExperienceRule,
    pub matched: String,
    pub start: usize,
    pub end: usize,
}

fn first_capture<'t>(patterns: &[Regex], text: &'t str) -> Option<(u32, regex::Match<'t>)> {
    patterns.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let years = caps.get(1)?.as_str().parse().ok()?;
        Some((years, caps.get(0)?))
    })
}

fn first_range<'t>(patterns: &[Regex], text: &'t str) -> Option<(u32, u32, regex::Match<'t>)> {
    patterns.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let low = caps.get(1)?.as_str().parse().ok()?;
        let high = caps.get(2)?.as_str().parse().ok()?;
        Some((low, high, caps.get(0)?))
    })
}

fn hit(rule: ExperienceRule, m: &regex::Match<'_>) -> ExperienceHit {
    ExperienceHit {
        rule,
        matched: m.as_str().to_string(),
        start: m.start(),
        end: m.end(),
    }
}

/// Extract requested experience bounds from a lower-cased query.
#[must_use]
pub fn parse_experience(text: &str) -> (ExperienceRange, Vec<ExperienceHit>) {
    let rules = rules();
    let mut range = ExperienceRange::default();
    let mut hits = Vec::new();

    if let Some((years, m)) = first_capture(&rules.min, text) {
        range.min = Some(years);
        hits.push(hit(ExperienceRule::Minimum, &m));
    }

    if let Some((years, m)) = first_capture(&rules.max, text) {
        range.max = Some(years);
        hits.push(hit(ExperienceRule::Maximum, &m));
    }

    if let Some((low, high, m)) = first_range(&rules.range, text) {
        range = ExperienceRange::closed(low, high);
        hits.push(hit(ExperienceRule::Range, &m));
    }

    (range, hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(text: &str) -> ExperienceRange {
        parse_experience(text).0
    }

    #[test]
    fn test_minimum_phrasing() {
        assert_eq!(bounds("minimum 2 years experience").min, Some(2));
        assert_eq!(bounds("at least 3 yrs").min, Some(3));
        assert_eq!(bounds("min of 4 years").min, Some(4));
        assert_eq!(bounds("5+ years in java").min, Some(5));
        assert_eq!(bounds("minimum 2+ years").min, Some(2));
    }

    #[test]
    fn test_maximum_phrasing() {
        let range = bounds("up to 6 years of experience");
        assert_eq!(range, ExperienceRange::new(None, Some(6)));
        assert_eq!(bounds("maximum 3 years").max, Some(3));
        assert_eq!(bounds("upto 4 years").max, Some(4));
        assert_eq!(bounds("at most 1 year").max, Some(1));
    }

    #[test]
    fn test_range_overrides_single_sided() {
        assert_eq!(bounds("2-5 years experience"), ExperienceRange::closed(2, 5));
        assert_eq!(bounds("3 to 7 years"), ExperienceRange::closed(3, 7));
        assert_eq!(
            bounds("minimum 1 year, ideally 4-8 years"),
            ExperienceRange::closed(4, 8)
        );
        assert_eq!(
            bounds("between 2 and 6 years"),
            ExperienceRange::closed(2, 6)
        );
    }

    #[test]
    fn test_min_and_max_combine() {
        assert_eq!(
            bounds("at least 2 years and up to 9 years"),
            ExperienceRange::closed(2, 9)
        );
    }

    #[test]
    fn test_first_minimum_wins() {
        assert_eq!(bounds("minimum 2 years, minimum 4 years").min, Some(2));
    }

    #[test]
    fn test_no_experience_phrase() {
        let (range, hits) = parse_experience("python developers from iit");
        assert!(range.is_unbounded());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_bare_number_is_ignored() {
        assert!(bounds("2 years").is_unbounded());
    }

    #[test]
    fn test_hits_record_rule_family() {
        let (_, hits) = parse_experience("minimum 2 years or 3-5 years");
        let rules: Vec<ExperienceRule> = hits.iter().map(|h| h.rule).collect();
        assert_eq!(rules, vec![ExperienceRule::Minimum, ExperienceRule::Range]);
        assert_eq!(hits[1].matched, "3-5 years");
    }

    #[test]
    fn test_hit_spans_index_into_query() {
        let text = String::from("looking for at least 3 years and up to 7 years");
        let (_, hits) = parse_experience(&text);
        for hit in &hits {
            assert_eq!(&text[hit.start..hit.end], hit.matched);
        }
        assert_eq!(hits[0].matched, "at least 3 years");
        assert_eq!(hits[1].matched, "up to 7 years");
    }
}
