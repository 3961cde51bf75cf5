#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Candidate data model, filter criteria, and the match engine.

pub mod candidate;
pub mod criteria;
pub mod experience;
pub mod matcher;
pub mod outcome;
pub mod report;
pub mod request;

pub use candidate::Candidate;
pub use criteria::{FilterCriteria, normalize_terms};
pub use experience::ExperienceRange;
pub use matcher::{filter_candidates, matches, par_filter_candidates};
pub use outcome::SearchOutcome;
pub use report::{NO_CRITERIA, render_interpretation};
pub use request::{CandidateFilter, FilterRequest, ValidationError};
