//! Graphnode CLI - query the node dataset or serve it over HTTP

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, config as config_cmd, nodes, serve};
use config::{default_config_path, Config};
use graphnode_core::Store;
use graphnode_query::AllowList;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "graphnode")]
#[command(author, version, about = "Read-only graph node query API")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true, env = "GRAPHNODE_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON fixture to serve instead of the built-in seed dataset
    #[arg(long, global = true, env = "GRAPHNODE_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Output format: json, table
    #[arg(short, long, default_value = "json", global = true)]
    pub format: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log errors only and hide status messages (results are still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_config_path)
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from(self.format.as_str())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API
    Serve(serve::ServeArgs),
    /// Find nodes whose field matches a value
    Query(nodes::QueryArgs),
    /// Show a single node by id
    Get(nodes::GetArgs),
    /// List every node
    List,
    /// Manage the config file
    Config(config_cmd::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context: configuration plus the loaded, immutable store
pub struct AppContext {
    pub config: Config,
    pub store: Arc<Store>,
    pub allow_list: AllowList,
}

impl AppContext {
    pub async fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config = Config::load_from(&cli.config_path())?;
        let allow_list = config.allow_list()?;

        let fixture = cli.fixture.as_deref().or(config.store.fixture.as_deref());
        let source = graphnode_storage::source_for(fixture);
        tracing::debug!("Loading store from {}", source.describe());
        let store = source.load().await?;

        Ok(Self {
            config,
            store: Arc::new(store),
            allow_list,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting graphnode CLI");

    match &cli.command {
        Commands::Config(args) => config_cmd::run(args, &cli)?,
        Commands::Completions(args) => completions::run(args)?,
        Commands::Serve(args) => {
            let ctx = AppContext::new(&cli).await?;
            serve::run(args, ctx).await?
        }
        Commands::Query(args) => nodes::run_query(args, &cli, &AppContext::new(&cli).await?)?,
        Commands::Get(args) => nodes::run_get(args, &cli, &AppContext::new(&cli).await?)?,
        Commands::List => nodes::run_list(&cli, &AppContext::new(&cli).await?)?,
    }

    Ok(())
}
