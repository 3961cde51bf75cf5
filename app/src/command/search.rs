use super::output::print_outcome;
use super::{GlobalOptions, build_interpreter, open_store};

#[derive(Debug, Clone)]
pub struct SearchInput {
    pub query: String,
    pub options: GlobalOptions,
}

/// Interprets free text and searches the data file with the result.
#[derive(Debug, Clone, Copy)]
pub struct SearchStrategy;

impl super::CommandStrategy for SearchStrategy {
    type Input = SearchInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = input.options.load_config()?;
        let interpreter = build_interpreter(&config)?;
        let store = open_store(&config)?;

        let outcome = store.search_text(&interpreter, &input.query);
        print_outcome(&outcome, input.options.json)
    }
}
