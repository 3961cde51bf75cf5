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

//! Rule-based interpretation of free-text candidate queries.
//!
//! A query is lower-cased once and run through ordered vocabulary tables
//! (skills, institutions, courses, employers), the experience phrase
//! families, and the name patterns. The result is a
//! [`FilterCriteria`](sift_core::FilterCriteria) plus a trace of which
//! rules fired.

pub mod config;
pub mod error;
pub mod experience;
pub mod interpreter;
pub mod name;
pub mod tables;
pub mod vocabulary;

pub use config::InterpreterConfig;
pub use error::BuildError;
pub use experience::{ExperienceHit, ExperienceRule, parse_experience};
pub use interpreter::{Field, Interpretation, QueryInterpreter, RuleHit};
pub use name::{NameExtractor, NameHit};
pub use vocabulary::{VocabEntry, VocabHit, Vocabulary};
