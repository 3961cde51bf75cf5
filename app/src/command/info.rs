use sift_store::{DataFormat, load_path};

use super::GlobalOptions;

/// Prints the effective configuration and the state of the data file.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = GlobalOptions;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = input.load_config()?;
        if input.json {
            println!("{}", config.to_pretty_json()?);
            return Ok(());
        }

        println!("=== sift Configuration ===\n");
        match &input.config {
            Some(path) => println!("Config file: {}", path.display()),
            None => println!("Config file: ~/sift/config.json (defaults if absent)"),
        }
        println!();

        println!("Data:");
        let path = &config.data.path;
        println!("  Path: {}", path.display());
        println!("  List delimiter: {:?}", config.data.list_delimiter);
        match DataFormat::from_path(path) {
            Ok(format) => println!("  Format: {format:?}"),
            Err(e) => println!("  Format: {e}"),
        }
        match load_path(path, config.data.list_delimiter) {
            Ok((_, report)) => {
                println!("  Status: {} candidates loaded", report.loaded);
                for skipped in &report.skipped {
                    println!("    skipped record {}: {}", skipped.record, skipped.reason);
                }
            }
            Err(e) => println!("  Status: {e}"),
        }
        println!();

        println!("Server:");
        println!("  Address: {}", config.server.addr());
        println!();

        println!("Interpreter:");
        let interpreter = &config.interpreter;
        println!("  Optional window: {} chars", interpreter.optional_window);
        println!("  Optional markers: {}", interpreter.optional_markers.join(", "));
        println!(
            "  Vocabulary: {} skills, {} institutions, {} companies, {} courses",
            interpreter.skill_entries().len(),
            interpreter.institution_entries().len(),
            interpreter.company_entries().len(),
            interpreter.course_entries().len()
        );
        if !interpreter.extra_excluded_names.is_empty() {
            println!(
                "  Extra excluded names: {}",
                interpreter.extra_excluded_names.join(", ")
            );
        }
        Ok(())
    }
}
