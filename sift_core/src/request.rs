//! Boundary validation for caller-supplied criteria.
//!
//! The match engine trusts its input; everything a caller sends directly is
//! checked here first.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::criteria::{FilterCriteria, normalize_terms};
use crate::experience::ExperienceRange;

const MAX_NAME_LEN: usize = 100;
const MAX_PHONE_LEN: usize = 20;
const MAX_EMAIL_LEN: usize = 254;
const MIN_PHONE_DIGITS: usize = 7;

static EMAIL_PATTERN: OnceLock<regex::Regex> = OnceLock::new();
static PHONE_PATTERN: OnceLock<regex::Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn email_pattern() -> &'static regex::Regex {
    EMAIL_PATTERN.get_or_init(|| {
        regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn phone_pattern() -> &'static regex::Regex {
    PHONE_PATTERN.get_or_init(|| {
        regex::Regex::new(r"^\+?[\d\s\-()]{7,20}$")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

/// All problems found in one request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid request: {}", .errors.join("; "))]
pub struct ValidationError {
    pub errors: Vec<String>,
}

/// Direct criteria as sent by a caller. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub optional_skills: Option<Vec<String>>,
    #[serde(default)]
    pub institute_name: Option<Vec<String>>,
    #[serde(default)]
    pub course: Option<Vec<String>>,
    #[serde(default)]
    pub min_experience: Option<i64>,
    #[serde(default)]
    pub max_experience: Option<i64>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company_name: Option<Vec<String>>,
}

/// The normalized echo of a [`FilterRequest`], with every field present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFilter {
    pub name: String,
    pub skills: Vec<String>,
    pub optional_skills: Vec<String>,
    pub institute_name: Vec<String>,
    pub course: Vec<String>,
    pub experience: ExperienceRange,
    pub phone_number: String,
    pub email: String,
    pub company_name: Vec<String>,
}

fn years_in_range(label: &str, value: Option<i64>, errors: &mut Vec<String>) -> Option<u32> {
    let value = value?;
    match u32::try_from(value) {
        Ok(years) if years <= ExperienceRange::MAX_YEARS => Some(years),
        _ => {
            errors.push(format!(
                "{label} experience must be between 0 and {}",
                ExperienceRange::MAX_YEARS
            ));
            None
        }
    }
}

fn list(values: Option<&Vec<String>>) -> Vec<String> {
    values.map(normalize_terms).unwrap_or_default()
}

fn trimmed(value: Option<&String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

impl FilterRequest {
    /// Check every field, collecting all violations.
    pub fn validate(&self) -> Result<ExperienceRange, ValidationError> {
        let mut errors = Vec::new();

        if self
            .name
            .as_ref()
            .is_some_and(|name| name.chars().count() > MAX_NAME_LEN)
        {
            errors.push(format!("Name must be at most {MAX_NAME_LEN} characters"));
        }

        if let Some(email) = &self.email {
            let email = email.trim();
            if email.chars().count() > MAX_EMAIL_LEN {
                errors.push(format!("Email must be at most {MAX_EMAIL_LEN} characters"));
            } else if !email.is_empty() && !email_pattern().is_match(email) {
                errors.push("Invalid email format".to_string());
            }
        }

        if let Some(phone) = &self.phone_number {
            let phone = phone.trim();
            let digits = phone
                .chars()
                .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
                .count();
            if phone.chars().count() > MAX_PHONE_LEN {
                errors.push(format!(
                    "Phone number must be at most {MAX_PHONE_LEN} characters"
                ));
            } else if !phone.is_empty()
                && (!phone_pattern().is_match(phone) || digits < MIN_PHONE_DIGITS)
            {
                errors.push(
                    "Invalid phone number format. Use international format with 7-20 digits"
                        .to_string(),
                );
            }
        }

        let min = years_in_range("Minimum", self.min_experience, &mut errors);
        let max = years_in_range("Maximum", self.max_experience, &mut errors);
        let experience = ExperienceRange::new(min, max);
        if experience.is_inverted() {
            errors.push(
                "Maximum experience must be greater than or equal to minimum experience"
                    .to_string(),
            );
        }

        if errors.is_empty() {
            Ok(experience)
        } else {
            Err(ValidationError { errors })
        }
    }

    /// Validate and convert into criteria for the match engine.
    pub fn into_criteria(self) -> Result<FilterCriteria, ValidationError> {
        let experience = self.validate()?;
        Ok(FilterCriteria::new()
            .with_name(self.name.unwrap_or_default())
            .with_skills(self.skills.unwrap_or_default())
            .with_optional_skills(self.optional_skills.unwrap_or_default())
            .with_institutes(self.institute_name.unwrap_or_default())
            .with_courses(self.course.unwrap_or_default())
            .with_experience(experience)
            .with_email(self.email.unwrap_or_default())
            .with_companies(self.company_name.unwrap_or_default()))
    }

    /// Validate and build the normalized echo.
    pub fn into_echo(self) -> Result<CandidateFilter, ValidationError> {
        let experience = self.validate()?;
        Ok(CandidateFilter {
            name: trimmed(self.name.as_ref()),
            skills: list(self.skills.as_ref()),
            optional_skills: list(self.optional_skills.as_ref()),
            institute_name: list(self.institute_name.as_ref()),
            course: list(self.course.as_ref()),
            experience,
            phone_number: trimmed(self.phone_number.as_ref()),
            email: trimmed(self.email.as_ref()),
            company_name: list(self.company_name.as_ref()),
        })
    }
}
