//! Multi-field match engine.
//!
//! Each field check is a small pure predicate. [`matches`] is their
//! short-circuiting conjunction, so reordering the checks changes cost but
//! never the result.

use rayon::prelude::*;
use tracing::debug;

use crate::candidate::Candidate;
use crate::criteria::FilterCriteria;

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn any_eq_ignore_case<'a>(mut values: impl Iterator<Item = &'a str>, wanted: &str) -> bool {
    values.any(|value| eq_ignore_case(value, wanted))
}

/// Criteria name is a case-insensitive substring of the candidate's name.
#[must_use]
pub fn matches_name(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    criteria
        .name()
        .is_none_or(|name| contains_ignore_case(&candidate.name, name))
}

/// Every required skill appears in the candidate's own skill list.
#[must_use]
pub fn matches_required_skills(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    criteria
        .skills()
        .iter()
        .all(|skill| any_eq_ignore_case(candidate.skills.iter().map(String::as_str), skill))
}

/// At least one desired skill appears among the candidate's required or
/// optional skills.
#[must_use]
pub fn matches_optional_skills(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    let wanted = criteria.optional_skills();
    wanted.is_empty()
        || wanted
            .iter()
            .any(|skill| any_eq_ignore_case(candidate.all_skills(), skill))
}

/// Candidate's institution equals one of the accepted institutions.
#[must_use]
pub fn matches_institution(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    let accepted = criteria.institutes();
    accepted.is_empty()
        || any_eq_ignore_case(accepted.iter().map(String::as_str), &candidate.institute_name)
}

/// Candidate's course equals one of the accepted courses.
#[must_use]
pub fn matches_course(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    let accepted = criteria.courses();
    accepted.is_empty() || any_eq_ignore_case(accepted.iter().map(String::as_str), &candidate.course)
}

/// Candidate's claimed range overlaps the requested bounds.
#[must_use]
pub fn matches_experience(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    candidate.experience.overlaps(&criteria.experience())
}

/// Criteria email is a case-insensitive substring of the candidate's email.
#[must_use]
pub fn matches_email(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    criteria
        .email()
        .is_none_or(|email| contains_ignore_case(&candidate.email, email))
}

/// At least one accepted employer is among the candidate's employers.
#[must_use]
pub fn matches_employer(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    let accepted = criteria.companies();
    accepted.is_empty()
        || accepted.iter().any(|company| {
            any_eq_ignore_case(candidate.company_name.iter().map(String::as_str), company)
        })
}

/// Returns `true` when the candidate satisfies every constrained field.
#[must_use]
pub fn matches(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    matches_name(candidate, criteria)
        && matches_required_skills(candidate, criteria)
        && matches_optional_skills(candidate, criteria)
        && matches_institution(candidate, criteria)
        && matches_course(candidate, criteria)
        && matches_experience(candidate, criteria)
        && matches_email(candidate, criteria)
        && matches_employer(candidate, criteria)
}

/// Returns the matching candidates in their original order.
#[must_use]
pub fn filter_candidates<'a>(
    candidates: &'a [Candidate],
    criteria: &FilterCriteria,
) -> Vec<&'a Candidate> {
    let matched: Vec<&Candidate> = candidates
        .iter()
        .filter(|candidate| matches(candidate, criteria))
        .collect();
    debug!("Matched {} of {} candidates", matched.len(), candidates.len());
    matched
}

/// Same result as [`filter_candidates`], evaluated on the rayon pool.
#[must_use]
pub fn par_filter_candidates<'a>(
    candidates: &'a [Candidate],
    criteria: &FilterCriteria,
) -> Vec<&'a Candidate> {
    let matched: Vec<&Candidate> = candidates
        .par_iter()
        .filter(|candidate| matches(candidate, criteria))
        .collect();
    debug!(
        "Matched {} of {} candidates (parallel)",
        matched.len(),
        candidates.len()
    );
    matched
}
