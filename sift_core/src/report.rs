//! Human-readable rendering of resolved filter criteria.

use crate::criteria::FilterCriteria;

/// Rendered when no field of the criteria is constrained.
pub const NO_CRITERIA: &str = "no criteria — show all";

/// Render the criteria as a `"; "`-joined summary.
///
/// Clause order is fixed: name, required skills, optional skills,
/// institutions, courses, minimum experience, maximum experience, employers.
#[must_use]
pub fn render_interpretation(criteria: &FilterCriteria) -> String {
    let mut clauses = Vec::new();

    if let Some(name) = criteria.name() {
        clauses.push(format!("Name: {name}"));
    }
    if !criteria.skills().is_empty() {
        clauses.push(format!("Must have skills: {}", criteria.skills().join(", ")));
    }
    if !criteria.optional_skills().is_empty() {
        clauses.push(format!(
            "Nice to have skills: {}",
            criteria.optional_skills().join(", ")
        ));
    }
    if !criteria.institutes().is_empty() {
        clauses.push(format!(
            "From institutions: {}",
            criteria.institutes().join(", ")
        ));
    }
    if !criteria.courses().is_empty() {
        clauses.push(format!("Courses: {}", criteria.courses().join(", ")));
    }
    let experience = criteria.experience();
    if let Some(min) = experience.min {
        clauses.push(format!("Minimum {min} years experience"));
    }
    if let Some(max) = experience.max {
        clauses.push(format!("Maximum {max} years experience"));
    }
    if !criteria.companies().is_empty() {
        clauses.push(format!("Companies: {}", criteria.companies().join(", ")));
    }

    if clauses.is_empty() {
        NO_CRITERIA.to_string()
    } else {
        clauses.join("; ")
    }
}
