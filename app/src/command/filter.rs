use sift_core::FilterRequest;

use super::output::print_outcome;
use super::{GlobalOptions, open_store};

/// Structured criteria taken from command-line flags.
#[derive(Debug, Clone)]
pub struct FilterInput {
    pub request: FilterRequest,
    pub options: GlobalOptions,
}

#[derive(Debug, Clone, Copy)]
pub struct FilterStrategy;

impl super::CommandStrategy for FilterStrategy {
    type Input = FilterInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let criteria = input.request.into_criteria()?;
        let config = input.options.load_config()?;
        let store = open_store(&config)?;

        print_outcome(&store.search(criteria), input.options.json)
    }
}
