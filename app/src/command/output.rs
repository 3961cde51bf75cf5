//! Terminal rendering of search results.

use sift_core::{Candidate, ExperienceRange, SearchOutcome};

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn format_experience(range: ExperienceRange) -> String {
    match (range.min, range.max) {
        (Some(min), Some(max)) => format!("{min}-{max} yrs"),
        (Some(min), None) => format!("{min}+ yrs"),
        (None, Some(max)) => format!("up to {max} yrs"),
        (None, None) => "-".to_string(),
    }
}

fn format_candidate(index: usize, candidate: &Candidate) -> String {
    let mut line = format!(
        "{:>3}. {} | {} | {}",
        index + 1,
        candidate.name,
        candidate.skills.join(", "),
        format_experience(candidate.experience)
    );
    if !candidate.institute_name.is_empty() {
        line.push_str(&format!(" | {}", candidate.institute_name));
    }
    if !candidate.company_name.is_empty() {
        line.push_str(&format!(" | {}", candidate.company_name.join(", ")));
    }
    line
}

pub fn print_outcome(outcome: &SearchOutcome, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(outcome);
    }

    if let Some(parsed) = &outcome.parsed_query {
        println!("Interpretation: {parsed}");
    }
    println!("Matched {} candidates", outcome.total_candidates);
    for (index, candidate) in outcome.candidates.iter().enumerate() {
        println!("{}", format_candidate(index, candidate));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_experience() {
        assert_eq!(format_experience(ExperienceRange::closed(2, 5)), "2-5 yrs");
        assert_eq!(format_experience(ExperienceRange::new(Some(3), None)), "3+ yrs");
        assert_eq!(format_experience(ExperienceRange::new(None, Some(4))), "up to 4 yrs");
        assert_eq!(format_experience(ExperienceRange::default()), "-");
    }

    #[test]
    fn test_format_candidate_skips_empty_columns() {
        let candidate = Candidate::new("Ana")
            .with_skills(["Rust", "Go"])
            .with_experience(1, 2);
        assert_eq!(format_candidate(0, &candidate), "  1. Ana | Rust, Go | 1-2 yrs");

        let candidate = candidate.with_institute("CMU").with_companies(["IBM"]);
        assert_eq!(
            format_candidate(9, &candidate),
            " 10. Ana | Rust, Go | 1-2 yrs | CMU | IBM"
        );
    }
}
