use thiserror::Error;

/// Failure to compile a user-supplied vocabulary entry.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid pattern for '{canonical}': {source}")]
    Regex {
        canonical: String,
        #[source]
        source: regex::Error,
    },

    #[error("vocabulary entry '{0}' has neither a pattern nor phrases")]
    Empty(String),
}
