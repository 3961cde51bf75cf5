use super::output::print_json;
use super::{GlobalOptions, build_interpreter};

#[derive(Debug, Clone)]
pub struct InterpretInput {
    pub query: String,
    pub options: GlobalOptions,
}

/// Shows what a query is understood as, without touching any data.
#[derive(Debug, Clone, Copy)]
pub struct InterpretStrategy;

impl super::CommandStrategy for InterpretStrategy {
    type Input = InterpretInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = input.options.load_config()?;
        let interpretation = build_interpreter(&config)?.interpret(&input.query);

        if input.options.json {
            return print_json(&interpretation);
        }

        println!("Query: {}", interpretation.query);
        println!("Interpretation: {}", interpretation.summary());
        if !interpretation.hits.is_empty() {
            println!("Rules:");
            for hit in &interpretation.hits {
                println!(
                    "  {:<16} {:<20} <- {:?} @{}",
                    hit.field.as_str(),
                    hit.value,
                    hit.matched,
                    hit.start
                );
            }
        }
        println!("Criteria: {}", serde_json::to_string(&interpretation.criteria)?);
        Ok(())
    }
}
