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

//! Candidate record store: loads CSV or JSON once, then answers searches
//! against the immutable set.

pub mod error;
pub mod loader;
pub mod store;

pub use error::{Result, StoreError};
pub use loader::{DataFormat, LoadReport, SkippedRow, load_path, read_csv, read_json};
pub use store::CandidateStore;
