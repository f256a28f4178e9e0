//! blogquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "blogquiz", version, about = "Blog search, quiz, and AI summaries")]
struct Cli {
    /// Use the built-in sample posts instead of fetching from WordPress
    #[arg(long, global = true)]
    sample: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// WordPress posts endpoint (overrides config)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search posts by keyword
    Search {
        /// Search query
        query: String,
    },

    /// Show autocomplete suggestions for a partial query
    Suggest {
        /// Partial query (at least two characters)
        query: String,
    },

    /// List all post categories
    Categories,

    /// Search, then take an interactive quiz on the results
    Quiz {
        /// Search query
        query: String,
    },

    /// Search, then generate an AI summary of the top results
    Summarize {
        /// Search query
        query: String,
    },
}

#[tokio::main]
async fn main() {
    // One directive per crate; the library targets use underscores.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("blogquiz=info".parse().unwrap())
                .add_directive("blogquiz_core=info".parse().unwrap())
                .add_directive("blogquiz_data=info".parse().unwrap())
                .add_directive("blogquiz_summary=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = load_and_dispatch(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn load_and_dispatch(cli: Cli) -> anyhow::Result<()> {
    let mut config = config::load_config_from(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }

    match cli.command {
        Commands::Search { query } => {
            let store = commands::load_store(cli.sample, &config).await;
            commands::search::execute(&store, &query)
        }
        Commands::Suggest { query } => {
            let store = commands::load_store(cli.sample, &config).await;
            commands::suggest::execute(&store, &query)
        }
        Commands::Categories => {
            let store = commands::load_store(cli.sample, &config).await;
            commands::categories::execute(&store)
        }
        Commands::Quiz { query } => {
            let store = commands::load_store(cli.sample, &config).await;
            commands::quiz::execute(&store, &query)
        }
        Commands::Summarize { query } => {
            let store = commands::load_store(cli.sample, &config).await;
            commands::summarize::execute(&store, &query, &config).await
        }
    }
}
