//! The structured filter description consumed by the match engine.

use std::collections::HashSet;

use serde::Serialize;

use crate::experience::ExperienceRange;

/// Trim entries, drop empty ones, and collapse case-insensitive duplicates.
///
/// The first occurrence wins, keeping its position and casing.
#[must_use]
pub fn normalize_terms<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    terms
        .into_iter()
        .filter_map(|term| {
            let trimmed = term.as_ref().trim();
            if trimmed.is_empty() || !seen.insert(trimmed.to_lowercase()) {
                return None;
            }
            Some(trimmed.to_string())
        })
        .collect()
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Fully optional filter criteria.
///
/// Empty lists and `None` scalars impose no constraint. Every list is kept
/// normalized (see [`normalize_terms`]), which is why the fields are only
/// reachable through accessors and the `with_*` builders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    optional_skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    institute_name: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    course: Vec<String>,
    #[serde(skip_serializing_if = "ExperienceRange::is_unbounded")]
    experience: ExperienceRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    company_name: Vec<String>,
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        self.name = non_blank(name.as_ref());
        self
    }

    #[must_use]
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skills = normalize_terms(skills);
        self
    }

    #[must_use]
    pub fn with_optional_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.optional_skills = normalize_terms(skills);
        self
    }

    #[must_use]
    pub fn with_institutes<I, S>(mut self, institutes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.institute_name = normalize_terms(institutes);
        self
    }

    #[must_use]
    pub fn with_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.course = normalize_terms(courses);
        self
    }

    #[must_use]
    pub const fn with_experience(mut self, experience: ExperienceRange) -> Self {
        self.experience = experience;
        self
    }

    #[must_use]
    pub const fn with_min_experience(mut self, years: u32) -> Self {
        self.experience.min = Some(years);
        self
    }

    #[must_use]
    pub const fn with_max_experience(mut self, years: u32) -> Self {
        self.experience.max = Some(years);
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl AsRef<str>) -> Self {
        self.email = non_blank(email.as_ref());
        self
    }

    #[must_use]
    pub fn with_companies<I, S>(mut self, companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.company_name = normalize_terms(companies);
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    #[must_use]
    pub fn optional_skills(&self) -> &[String] {
        &self.optional_skills
    }

    #[must_use]
    pub fn institutes(&self) -> &[String] {
        &self.institute_name
    }

    #[must_use]
    pub fn courses(&self) -> &[String] {
        &self.course
    }

    #[must_use]
    pub const fn experience(&self) -> ExperienceRange {
        self.experience
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn companies(&self) -> &[String] {
        &self.company_name
    }

    /// Returns `true` when no field constrains the match.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.name.is_none()
            && self.skills.is_empty()
            && self.optional_skills.is_empty()
            && self.institute_name.is_empty()
            && self.course.is_empty()
            && self.experience.is_unbounded()
            && self.email.is_none()
            && self.company_name.is_empty()
    }
}
