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

mod command;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use command::{
    CommandStrategy, FilterInput, FilterStrategy, GlobalOptions, InfoStrategy, InitStrategy,
    InterpretInput, InterpretStrategy, SearchInput, SearchStrategy, ServeInput, ServeStrategy,
    VersionStrategy,
};
use sift_core::FilterRequest;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Candidate search over structured and free-text queries", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/sift/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Candidate data file (.csv or .json), overrides the config
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search with a free-text query
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Search with explicit criteria
    Filter(FilterArgs),
    /// Show how a free-text query is interpreted
    Interpret {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

#[derive(Args)]
struct FilterArgs {
    /// Substring of the candidate name
    #[arg(long)]
    name: Option<String>,

    /// Required skill (repeatable, all must match)
    #[arg(long = "skill")]
    skills: Vec<String>,

    /// Desired skill (repeatable, any may match)
    #[arg(long = "optional-skill")]
    optional_skills: Vec<String>,

    /// Accepted institution (repeatable)
    #[arg(long = "institute")]
    institutes: Vec<String>,

    /// Accepted course (repeatable)
    #[arg(long = "course")]
    courses: Vec<String>,

    #[arg(long, allow_negative_numbers = true)]
    min_exp: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    max_exp: Option<i64>,

    /// Substring of the candidate email
    #[arg(long)]
    email: Option<String>,

    /// Accepted employer (repeatable)
    #[arg(long = "company")]
    companies: Vec<String>,
}

impl From<FilterArgs> for FilterRequest {
    fn from(args: FilterArgs) -> Self {
        let list = |values: Vec<String>| (!values.is_empty()).then_some(values);
        Self {
            name: args.name,
            skills: list(args.skills),
            optional_skills: list(args.optional_skills),
            institute_name: list(args.institutes),
            course: list(args.courses),
            min_experience: args.min_exp,
            max_experience: args.max_exp,
            phone_number: None,
            email: args.email,
            company_name: list(args.companies),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let options = GlobalOptions {
        config: cli.config,
        data: cli.data,
        json: cli.json,
    };

    match cli.command {
        Commands::Search { query } => {
            let input = SearchInput {
                query: query.join(" "),
                options,
            };
            SearchStrategy.execute(input).await?;
        }
        Commands::Filter(args) => {
            let input = FilterInput {
                request: args.into(),
                options,
            };
            FilterStrategy.execute(input).await?;
        }
        Commands::Interpret { query } => {
            let input = InterpretInput {
                query: query.join(" "),
                options,
            };
            InterpretStrategy.execute(input).await?;
        }
        Commands::Serve { host, port } => {
            ServeStrategy
                .execute(ServeInput {
                    host,
                    port,
                    options,
                })
                .await?;
        }
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Info => InfoStrategy.execute(options).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_filter_flags_become_request() {
        let cli = Cli::try_parse_from([
            "sift", "filter", "--skill", "java", "--skill", "sql", "--min-exp", "2",
            "--company", "TCS", "--json",
        ])
        .expect("flags should parse");
        assert!(cli.json);

        let Commands::Filter(args) = cli.command else {
            panic!("expected the filter subcommand");
        };
        let request = FilterRequest::from(args);
        assert_eq!(
            request.skills,
            Some(vec!["java".to_string(), "sql".to_string()])
        );
        assert_eq!(request.min_experience, Some(2));
        assert_eq!(request.company_name, Some(vec!["TCS".to_string()]));
        assert_eq!(request.institute_name, None);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_search_words_are_joined() {
        let cli = Cli::try_parse_from(["sift", "--data", "people.json", "search", "java", "from", "iit"])
            .expect("search should parse");
        assert_eq!(cli.data, Some(PathBuf::from("people.json")));
        let Commands::Search { query } = cli.command else {
            panic!("expected the search subcommand");
        };
        assert_eq!(query.join(" "), "java from iit");
    }
}
