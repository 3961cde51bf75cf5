use sift_config::Config;

/// Writes the default configuration to `~/sift/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::create_config()?;

        println!("Created config file at: {}", path.display());
        println!();
        println!("Next steps:");
        println!("   1. Point data.path at your candidate CSV or JSON file");
        println!("   2. Add extra_skills / extra_companies under interpreter if needed");
        println!("   3. Run 'sift search \"python developers with 2+ years\"'");
        println!();
        Ok(())
    }
}
