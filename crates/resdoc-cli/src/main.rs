use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process;

use resdoc_core::render::{self, Format, RenderOptions};

/// resdoc — normalize infrastructure resource listings
///
/// Sort resources, resolve display versions, and derive documentation URLs.
#[derive(Parser)]
#[command(name = "resdoc", version, about, long_about = None)]
struct Cli {
    /// Suppress output on success
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the resource listing
    List {
        /// Path to a JSON file of resource records
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Keep input order instead of sorting by full type
        #[arg(long)]
        no_sort: bool,
    },

    /// Compute the SHA-256 fingerprint of the Markdown listing
    Hash {
        /// Path to a JSON file of resource records
        file: PathBuf,
        /// Keep input order instead of sorting by full type
        #[arg(long)]
        no_sort: bool,
    },

    /// Resolve version constraint clauses to a display version
    Resolve {
        /// Constraint clauses, e.g. "= 1.2.3" or ">= 1.0" "< 2.0"
        constraints: Vec<String>,
    },

    /// Print the documentation URL of each resource
    Url {
        /// Path to a JSON file of resource records
        file: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let exit_code = match run(cli.command, cli.quiet) {
        Ok(()) => 0,
        Err(msg) => {
            eprintln!("{} {}", "error:".red().bold(), msg);
            2
        }
    };

    process::exit(exit_code);
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn)
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands, quiet: bool) -> Result<(), String> {
    match command {
        Commands::List {
            file,
            json,
            no_sort,
        } => {
            let options = RenderOptions {
                format: if json { Format::Json } else { Format::Markdown },
                sort: !no_sort,
            };
            let input = read_input(&file)?;
            let listing = render::normalize(&input, &options).map_err(|e| e.to_string())?;
            if !quiet {
                print!("{}", listing);
            }
        }
        Commands::Hash { file, no_sort } => {
            let options = RenderOptions {
                format: Format::Markdown,
                sort: !no_sort,
            };
            let input = read_input(&file)?;
            let listing = render::normalize(&input, &options).map_err(|e| e.to_string())?;
            if !quiet {
                println!("{}", render::fingerprint(&listing));
            }
        }
        Commands::Resolve { constraints } => {
            let version = resdoc_core::resolve_version(&constraints);
            if !quiet {
                println!("{}", version);
            }
        }
        Commands::Url { file } => {
            let resources = resdoc_core::loader::parse_resources(&read_input(&file)?)
                .map_err(|e| e.to_string())?;
            let resources = resdoc_core::sort_resources(resources);
            if !quiet {
                for resource in &resources {
                    let url = resource.url();
                    let url = if url.is_empty() { "-" } else { url.as_str() };
                    println!("{} {}", resource.full_type(), url);
                }
            }
        }
        Commands::Version => {
            if !quiet {
                println!(
                    "resdoc {} (resdoc-core {})",
                    env!("CARGO_PKG_VERSION"),
                    resdoc_core::VERSION
                );
            }
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String, String> {
    tracing::debug!(path = %path.display(), "reading resource records");
    std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))
}
