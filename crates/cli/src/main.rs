use anyhow::{Context, Result};
use cardex_protocol::SearchCategory;
use cardex_search::{SearchConfig, SearchOrchestrator};
use cardex_store::MemoryStore;
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "cardex")]
#[command(about = "Universal search over a sports-card catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// Free-text query (card number, player, "108 bieber", "rookie trout", ...)
    query: String,

    /// JSON catalog file to search
    #[arg(long, default_value = "catalog.json")]
    catalog: PathBuf,

    /// Maximum number of results
    #[arg(short, long, default_value_t = 50)]
    limit: usize,

    /// Restrict results to one entity type: all|cards|players|teams|series
    #[arg(short, long, default_value = "all")]
    category: SearchCategory,

    /// Optional TOML file with search tuning overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON response
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = fs::read_to_string(&cli.catalog)
        .with_context(|| format!("reading catalog {}", cli.catalog.display()))?;
    let store = MemoryStore::from_json(&json)
        .with_context(|| format!("parsing catalog {}", cli.catalog.display()))?;

    let config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SearchConfig::from_toml_str(&text)?
        }
        None => SearchConfig::default(),
    };

    let engine = SearchOrchestrator::with_config(Arc::new(store), config);
    let response = engine.search(&cli.query, cli.limit, cli.category).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        cardex_protocol::serialize_json(&response)?
    };
    print_stdout(&output)
}
