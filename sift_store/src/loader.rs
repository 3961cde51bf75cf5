//! Record loading from CSV and JSON files.
//!
//! Malformed rows never fail a load. They are skipped, logged, and listed in
//! the [`LoadReport`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sift_core::{Candidate, ExperienceRange, normalize_terms};
use tracing::{info, warn};

use crate::error::{Result, StoreError};

/// Supported data file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Json,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(StoreError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// A record that was left out of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based position of the record in the file, header excluded.
    pub record: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    fn skip(&mut self, record: usize, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("Skipping record {record}: {reason}");
        self.skipped.push(SkippedRow { record, reason });
    }
}

/// One CSV row as written on disk, before any validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    skills: String,
    #[serde(default)]
    optional_skills: String,
    #[serde(default)]
    institute_name: String,
    #[serde(default)]
    course: String,
    #[serde(default)]
    min_experience: String,
    #[serde(default)]
    max_experience: String,
    #[serde(default)]
    phone_number: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    company_name: String,
}

fn split_list(value: &str, delimiter: char) -> Vec<String> {
    normalize_terms(value.split(delimiter))
}

fn parse_years(value: &str, column: &str) -> std::result::Result<u32, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("missing {column}"));
    }
    value
        .parse()
        .map_err(|_| format!("unparseable {column} '{value}'"))
}

impl CsvRow {
    fn into_candidate(self, delimiter: char) -> std::result::Result<Candidate, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("blank name".to_string());
        }

        let min = parse_years(&self.min_experience, "minExperience")?;
        let max = parse_years(&self.max_experience, "maxExperience")?;
        if max < min {
            return Err(format!("inverted experience range {min}-{max}"));
        }

        Ok(Candidate {
            name: name.to_string(),
            skills: split_list(&self.skills, delimiter),
            optional_skills: split_list(&self.optional_skills, delimiter),
            institute_name: self.institute_name.trim().to_string(),
            course: self.course.trim().to_string(),
            experience: ExperienceRange::closed(min, max),
            phone_number: self.phone_number.trim().to_string(),
            email: self.email.trim().to_string(),
            company_name: split_list(&self.company_name, delimiter),
        })
    }
}

/// Read candidates from CSV with a header row.
pub fn read_csv<R: Read>(reader: R, list_delimiter: char) -> Result<(Vec<Candidate>, LoadReport)> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut candidates = Vec::new();
    let mut report = LoadReport::default();

    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let record = index + 1;
        let row = match row {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                report.skip(record, e.to_string());
                continue;
            }
        };
        match row.into_candidate(list_delimiter) {
            Ok(candidate) => candidates.push(candidate),
            Err(reason) => report.skip(record, reason),
        }
    }

    report.loaded = candidates.len();
    Ok((candidates, report))
}

/// Read candidates from a JSON array of candidate objects.
///
/// Missing experience bounds are kept open; blank names and inverted ranges
/// are skipped as in CSV.
pub fn read_json<R: Read>(reader: R) -> Result<(Vec<Candidate>, LoadReport)> {
    let records: Vec<Candidate> = serde_json::from_reader(reader)?;

    let mut report = LoadReport::default();
    let candidates: Vec<Candidate> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, mut candidate)| {
            let record = index + 1;
            candidate.name = candidate.name.trim().to_string();
            if candidate.name.is_empty() {
                report.skip(record, "blank name");
                return None;
            }
            if candidate.experience.is_inverted() {
                report.skip(record, "inverted experience range");
                return None;
            }
            candidate.skills = normalize_terms(&candidate.skills);
            candidate.optional_skills = normalize_terms(&candidate.optional_skills);
            candidate.company_name = normalize_terms(&candidate.company_name);
            Some(candidate)
        })
        .collect();

    report.loaded = candidates.len();
    Ok((candidates, report))
}

/// Load a data file, picking the format from its extension.
pub fn load_path(path: &Path, list_delimiter: char) -> Result<(Vec<Candidate>, LoadReport)> {
    let format = DataFormat::from_path(path)?;
    if !path.exists() {
        return Err(StoreError::NotFound(path.display().to_string()));
    }

    let reader = BufReader::new(File::open(path)?);
    let (candidates, report) = match format {
        DataFormat::Csv => read_csv(reader, list_delimiter)?,
        DataFormat::Json => read_json(reader)?,
    };

    info!(
        "Loaded {} candidates from {} ({} skipped)",
        report.loaded,
        path.display(),
        report.skipped.len()
    );
    Ok((candidates, report))
}
