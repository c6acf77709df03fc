use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "pubmed-lookup",
    about = "Citation and URL lookup for PubMed publications",
    long_about = "Look up a publication by PubMed ID or PubMed URL and print a \
                  citation or its resolved article URL"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Email for NCBI requests (recommended by the API usage policy)
    #[arg(short, long, env = "NCBI_EMAIL", global = true)]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "pubmed-lookup", global = true)]
    tool: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a citation for a publication
    Citation(commands::citation::Citation),
    /// Print the article URL for a publication
    Url(commands::url::Url),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays a single machine-consumable line
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let email = cli.email.as_deref();
    let tool = &cli.tool;

    match &cli.command {
        Commands::Citation(cmd) => cmd.execute_with_config(email, tool).await,
        Commands::Url(cmd) => cmd.execute_with_config(email, tool).await,
    }
}
