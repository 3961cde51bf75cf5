use serde::{Deserialize, Serialize};

use crate::criteria::normalize_terms;
use crate::experience::ExperienceRange;

/// One profile record in the searchable dataset.
///
/// Skill and employer lists keep their original casing for display; every
/// comparison against them is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub optional_skills: Vec<String>,
    #[serde(default)]
    pub institute_name: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub experience: ExperienceRange,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company_name: Vec<String>,
}

impl Candidate {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
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
    pub fn with_institute(mut self, institute: impl Into<String>) -> Self {
        self.institute_name = institute.into();
        self
    }

    #[must_use]
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    #[must_use]
    pub const fn with_experience(mut self, min: u32, max: u32) -> Self {
        self.experience = ExperienceRange::closed(min, max);
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = phone.into();
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
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

    /// Required skills followed by optional ones.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .chain(&self.optional_skills)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_normalizes_lists() {
        let candidate = Candidate::new("Asha Rao")
            .with_skills(["Java", " java ", "", "SQL"])
            .with_companies(["TCS", "tcs"]);

        assert_eq!(candidate.skills, vec!["Java", "SQL"]);
        assert_eq!(candidate.company_name, vec!["TCS"]);
    }

    #[test]
    fn test_all_skills_chains_optional() {
        let candidate = Candidate::new("Asha Rao")
            .with_skills(["Java"])
            .with_optional_skills(["React"]);

        let skills: Vec<&str> = candidate.all_skills().collect();
        assert_eq!(skills, vec!["Java", "React"]);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_wire_names() {
        let candidate = Candidate::new("Asha Rao")
            .with_institute("IIT")
            .with_experience(1, 3);
        let value = serde_json::to_value(&candidate).expect("candidate should serialize");

        assert_eq!(value["instituteName"], "IIT");
        assert_eq!(value["experience"]["max"], 3);
        assert!(value.get("optionalSkills").is_some());
        assert!(value.get("companyName").is_some());
    }
}
