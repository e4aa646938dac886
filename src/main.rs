// src/main.rs

//! bookscrape: books.toscrape.com catalogue extractor CLI.

use clap::{Parser, Subcommand};

use bookscrape::error::{AppError, Result};
use bookscrape::models::{CategoryEntry, Config};
use bookscrape::pipeline::{run_all, run_category, run_probe};
use bookscrape::services::CategoryDirectory;
use bookscrape::storage::LocalStorage;
use bookscrape::utils::http::create_client;

#[derive(Parser, Debug)]
#[command(
    name = "bookscrape",
    version,
    about = "Extracts the books.toscrape.com catalogue to CSV files and cover images"
)]

/// CLI Arguments
struct Cli {
    /// Configuration file; built-in defaults apply when absent
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

/// CLI Commands
#[derive(Subcommand, Debug)]
enum Command {
    /// List the categories discovered on the home page
    Categories,
    /// Extract one category, or the whole catalogue
    Scrape {
        /// Category to scrape, by id or name; all categories when omitted
        #[arg(short = 'C', long, conflicts_with = "all")]
        category: Option<String>,
        /// Scrape every category
        #[arg(long)]
        all: bool,
        /// Output directory root
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Extract a single product page and print its fields
    Probe {
        /// Product page URL
        url: String,
    },
}

/// Find a category entry by numeric id or (case-insensitive) name.
fn find_entry<'a>(entries: &'a [CategoryEntry], wanted: &str) -> Option<&'a CategoryEntry> {
    if let Ok(id) = wanted.parse::<u32>() {
        return entries.iter().find(|e| e.id == id);
    }
    entries.iter().find(|e| e.name.eq_ignore_ascii_case(wanted))
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = Config::load_or_default(&cli.config);
    config.validate()?;

    let client = create_client(&config.scraper)?;

    match cli.command {
        Command::Categories => {
            let entries = CategoryDirectory::new(&client, &config.site)
                .list_categories()
                .await?;
            for entry in &entries {
                println!("{:>3}  {}  {}", entry.id, entry.name, entry.url);
            }
        }
        Command::Scrape {
            category,
            all: _,
            output,
        } => {
            if let Some(dir) = output {
                config.output.root_dir = dir;
            }
            let storage = LocalStorage::new(&config.output.root_dir);
            let entries = CategoryDirectory::new(&client, &config.site)
                .list_categories()
                .await?;

            match category {
                // Selecting the catch-all entry means the same as no selection.
                Some(wanted) => {
                    let entry = find_entry(&entries, &wanted)
                        .ok_or_else(|| AppError::config(format!("no such category: {wanted}")))?;
                    if entry.is_catch_all() {
                        run_all(&client, &config, &storage, &entries).await?;
                    } else {
                        run_category(&client, &config, &storage, entry).await?;
                    }
                }
                None => {
                    run_all(&client, &config, &storage, &entries).await?;
                }
            }
        }
        Command::Probe { url } => run_probe(&client, &config, &url).await?,
    }

    Ok(())
}
