use clap::{Parser, Subcommand};
use tracing::{error, info};

use nist_control_viewer::config::Config;
use nist_control_viewer::constants::ALL_CATEGORIES;
use nist_control_viewer::error::Result;
use nist_control_viewer::export::export_csv;
use nist_control_viewer::fetch::CatalogFetcher;
use nist_control_viewer::logging;
use nist_control_viewer::normalize::normalize;
use nist_control_viewer::query::filter_controls;
use nist_control_viewer::types::CatalogSnapshot;

#[derive(Parser)]
#[command(name = "nist_control_viewer")]
#[command(about = "NIST SP 800-53 control catalog viewer")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the catalog and print a load summary
    Fetch,
    /// List controls, optionally filtered
    List {
        /// Case-insensitive substring match on control titles
        #[arg(long, default_value = "")]
        search: String,
        /// Exact category label to restrict to
        #[arg(long)]
        category: Option<String>,
    },
    /// List the discovered category labels
    Categories,
    /// Show the full details of one control
    Show {
        /// Control id, e.g. "ac-2"
        id: String,
    },
    /// Export controls to a CSV file, optionally filtered
    Export {
        /// Destination file path
        output: String,
        /// Case-insensitive substring match on control titles
        #[arg(long, default_value = "")]
        search: String,
        /// Exact category label to restrict to
        #[arg(long)]
        category: Option<String>,
    },
}

/// One-shot load: fetch the remote document and flatten it. The snapshot
/// is immutable after this point; every command derives views from it.
async fn load_snapshot() -> Result<CatalogSnapshot> {
    let config = Config::load()?;
    let fetcher = CatalogFetcher::from_config(&config)?;
    let raw = fetcher.fetch().await?;
    let snapshot = normalize(&raw)?;
    info!(controls = snapshot.controls.len(), "catalog loaded");
    Ok(snapshot)
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let cli = Cli::parse();

    let snapshot = match load_snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("catalog load failed: {}", e);
            eprintln!("⚠️  Failed to load NIST controls: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Fetch => {
            println!("📊 Catalog loaded:");
            println!("   Controls: {}", snapshot.controls.len());
            println!("   Categories: {}", snapshot.categories.len());
        }
        Commands::List { search, category } => {
            let category = category.unwrap_or_else(|| ALL_CATEGORIES.to_string());
            let filtered = filter_controls(&snapshot.controls, &search, &category);
            for record in &filtered {
                println!("{}", record.list_entry());
            }
            println!("\n📊 {} of {} controls", filtered.len(), snapshot.controls.len());
        }
        Commands::Categories => {
            println!("{ALL_CATEGORIES}");
            for category in &snapshot.categories {
                println!("{category}");
            }
        }
        Commands::Show { id } => match snapshot.find(&id) {
            Some(record) => println!("{}", record.detail()),
            None => {
                eprintln!("⚠️  No control with id '{id}'");
                std::process::exit(1);
            }
        },
        Commands::Export {
            output,
            search,
            category,
        } => {
            let category = category.unwrap_or_else(|| ALL_CATEGORIES.to_string());
            let filtered = filter_controls(&snapshot.controls, &search, &category);
            match export_csv(&output, &filtered) {
                Ok(()) => println!("📊 Exported {} controls to {}", filtered.len(), output),
                Err(e) => {
                    error!("export failed: {}", e);
                    eprintln!("⚠️  Export failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
