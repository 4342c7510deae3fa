//! CLI command definitions, routing, and tracing setup.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use gasket_docs_core::{generate_content, generate_index};
use gasket_docs_shared::load_config_set;
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// gasket-docs: render the docs index for a gasket app.
#[derive(Parser)]
#[command(
    name = "gasket-docs",
    version,
    about = "Render the top-level README.md index for a documented gasket app.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Generate `<docsRoot>/README.md` from a config set file.
    Index {
        /// Config set file (`.json` or `.toml`).
        #[arg(short, long, env = "GASKET_DOCS_CONFIG")]
        config: PathBuf,

        /// Override the docs root from the config set.
        #[arg(long)]
        docs_root: Option<PathBuf>,

        /// Print the index to stdout instead of writing it.
        #[arg(long)]
        print: bool,
    },
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "gasket_docs=info",
        1 => "gasket_docs=debug",
        _ => "gasket_docs=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so `--print` output stays clean.
    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Index {
            config,
            docs_root,
            print,
        } => cmd_index(config, docs_root, print).await,
    }
}

async fn cmd_index(config_path: PathBuf, docs_root: Option<PathBuf>, print: bool) -> Result<()> {
    let mut config = load_config_set(&config_path)
        .wrap_err_with(|| format!("loading config set from {}", config_path.display()))?;

    if let Some(root) = docs_root {
        config.docs_root = root;
    }

    info!(
        app = %config.app.name,
        docs_root = %config.docs_root.display(),
        "generating docs index"
    );

    if print {
        let content = generate_content(&config);
        std::io::stdout().lock().write_all(content.as_bytes())?;
        return Ok(());
    }

    let path = generate_index(&config).await?;
    println!("Docs index written to: {}", path.display());
    Ok(())
}
