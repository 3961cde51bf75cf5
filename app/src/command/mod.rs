//! Static strategy pattern for CLI commands.
//!
//! Each command is its own strategy type with its own input, dispatched
//! statically from `main`.

use std::path::PathBuf;

use anyhow::Context;
use sift_config::Config;
use sift_query::QueryInterpreter;
use sift_store::CandidateStore;
use tracing::info;

mod filter;
mod info;
mod init;
mod interpret;
mod output;
mod search;
mod serve;
mod version;

pub use filter::{FilterInput, FilterStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use interpret::{InterpretInput, InterpretStrategy};
pub use search::{SearchInput, SearchStrategy};
pub use serve::{ServeInput, ServeStrategy};
pub use version::VersionStrategy;

/// Contract shared by every command strategy.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Flags accepted by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub data: Option<PathBuf>,
    pub json: bool,
}

impl GlobalOptions {
    /// Load the config file, then apply command-line overrides.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(data) = &self.data {
            config.data.path.clone_from(data);
        }
        Ok(config)
    }
}

fn build_interpreter(config: &Config) -> anyhow::Result<QueryInterpreter> {
    QueryInterpreter::new(&config.interpreter).context("Invalid interpreter vocabulary in config")
}

fn open_store(config: &Config) -> anyhow::Result<CandidateStore> {
    let path = &config.data.path;
    let (store, report) = CandidateStore::open(path, config.data.list_delimiter)
        .with_context(|| format!("Failed to load candidates from {}", path.display()))?;
    info!(
        "Store ready: {} candidates, {} records skipped",
        report.loaded,
        report.skipped.len()
    );
    Ok(store)
}
