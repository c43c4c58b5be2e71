//! # Placard CLI
//!
//! Command-line interface for exhibition label sheets.
//!
//! ## Usage
//!
//! ```bash
//! # Serve the web form
//! placard serve --listen 0.0.0.0:8080
//!
//! # Render one or more delimited files straight to a PDF
//! placard render works.csv loans.tsv --output cards.pdf
//!
//! # Also write the HTML snapshot, with a custom logo
//! placard render works.csv --output cards.pdf --html cards.html --logo logo.png
//!
//! # List built-in logos
//! placard logos
//! ```
//!
//! Logging is controlled with `RUST_LOG` (default `placard=info,tower_http=info`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use placard::{
    LabelError,
    catalog::Catalog,
    logos, preview,
    server::{self, ServerConfig},
};

/// Placard - Exhibition label sheet composer
#[derive(Parser, Debug)]
#[command(name = "placard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web interface
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Logo key (see `placard logos`) or image file path
        #[arg(long, default_value = logos::DEFAULT_KEY)]
        logo: String,
    },

    /// Import delimited files and write the label sheet PDF
    Render {
        /// Input files (header row required; # lines are comments)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// PDF output path
        #[arg(long, short, default_value = "cards.pdf")]
        output: PathBuf,

        /// Also write the HTML snapshot here
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        /// Logo key (see `placard logos`) or image file path
        #[arg(long, default_value = logos::DEFAULT_KEY)]
        logo: String,
    },

    /// List built-in logos
    Logos,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("placard=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LabelError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen, logo } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(ServerConfig {
                listen_addr: listen,
                logo,
            }))?;
        }
        Commands::Render {
            inputs,
            output,
            html,
            logo,
        } => {
            let mut catalog = Catalog::new(logos::resolve(&logo)?);
            for input in &inputs {
                let bytes = std::fs::read(input)?;
                catalog.import(&bytes).map_err(|e| match e {
                    LabelError::Parse(msg) => {
                        LabelError::Parse(format!("{}: {}", input.display(), msg))
                    }
                    other => other,
                })?;
            }

            std::fs::write(&output, catalog.export()?)?;
            info!(path = %output.display(), cards = catalog.snapshot().len(), "wrote PDF");

            if let Some(html_path) = html {
                let snapshot = catalog.snapshot();
                std::fs::write(&html_path, preview::snapshot_document(snapshot.records()))?;
                info!(path = %html_path.display(), "wrote HTML snapshot");
            }
        }
        Commands::Logos => {
            println!("Available logos:");
            for logo in logos::all() {
                println!("  {:<8} {}", logo.key, logo.name);
            }
        }
    }

    Ok(())
}
