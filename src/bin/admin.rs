//! CLI administration tool for url-mapper.
//!
//! Works against the same store as the server (selected by `STORE_BACKEND`),
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create (or look up) a mapping
//! cargo run --bin admin -- mapping create https://www.imdb.com
//!
//! # Show a mapping and its access statistics
//! cargo run --bin admin -- mapping show 3f1c2a9b
//!
//! # Delete a mapping
//! cargo run --bin admin -- mapping delete 3f1c2a9b
//!
//! # Count mappings
//! cargo run --bin admin -- stats
//!
//! # Check store connectivity
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `url_mapper::config`.

use url_mapper::application::services::MappingService;
use url_mapper::config;
use url_mapper::domain::errors::MappingError;
use url_mapper::domain::repositories::UrlRecordRepository;
use url_mapper::server::connect_store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

type Service = MappingService<dyn UrlRecordRepository>;

/// CLI tool for managing url-mapper.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage URL mappings
    Mapping {
        #[command(subcommand)]
        action: MappingAction,
    },

    /// Show statistics
    Stats,

    /// Store operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping management subcommands.
#[derive(Subcommand)]
enum MappingAction {
    /// Create a mapping, or show the existing one for an equivalent URL
    Create {
        /// URL to shorten (http or https)
        url: String,
    },

    /// Show a mapping by short code
    Show {
        /// Short code
        code: String,
    },

    /// Delete a mapping by short code
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Store operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let repository = connect_store(&config).await?;
    let service = MappingService::new(repository, config.base_url.clone());

    match cli.command {
        Commands::Mapping { action } => handle_mapping_action(action, &service).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

/// Dispatches mapping management commands.
async fn handle_mapping_action(action: MappingAction, service: &Service) -> Result<()> {
    match action {
        MappingAction::Create { url } => create_mapping(service, &url).await,
        MappingAction::Show { code } => show_mapping(service, &code).await,
        MappingAction::Delete { code, yes } => delete_mapping(service, &code, yes).await,
    }
}

async fn create_mapping(service: &Service, url: &str) -> Result<()> {
    println!("{}", "🔗 Create Mapping".bright_blue().bold());
    println!();

    let mapping = match service.create_or_get(url).await {
        Ok(mapping) => mapping,
        Err(MappingError::InvalidUrlFormat(_)) => {
            println!("{}", format!("❌ '{}' is not a valid URL", url).red());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to create mapping: {}", e)),
    };

    println!("  Short URL:    {}", mapping.short_url.bright_yellow().bold());
    println!("  Original URL: {}", mapping.record.original_url.cyan());
    if mapping.record.original_url != url {
        println!(
            "{}",
            "⚠️  An equivalent URL was already mapped; the stored spelling is kept".yellow()
        );
    }
    println!();

    Ok(())
}

/// Prints a mapping with its access statistics.
///
/// # Output Format
///
/// ```text
/// 📋 Mapping 3f1c2a9b
///
///   Short URL:     http://localhost:8080/3f1c2a9b
///   Original URL:  https://www.imdb.com
///   Views:         12
///   Last access:   2024-06-01 12:00:00 UTC
/// ```
async fn show_mapping(service: &Service, code: &str) -> Result<()> {
    println!("{}", format!("📋 Mapping {}", code).bright_blue().bold());
    println!();

    let record = match service.get(code).await {
        Ok(record) => record,
        Err(MappingError::MappingNotFound(_)) => {
            println!("{}", "  Mapping not found".yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Store error: {}", e)),
    };

    println!(
        "  Short URL:     {}",
        service.short_url(&record.short_code).bright_yellow()
    );
    println!("  Original URL:  {}", record.original_url.cyan());
    println!(
        "  Views:         {}",
        record.view_count.to_string().bright_green().bold()
    );
    match record.last_accessed {
        Some(at) => println!(
            "  Last access:   {}",
            at.format("%Y-%m-%d %H:%M:%S UTC").to_string().bright_black()
        ),
        None => println!("  Last access:   {}", "never".bright_black()),
    }
    println!();

    Ok(())
}

/// Deletes a mapping after confirmation (default: No).
async fn delete_mapping(service: &Service, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Mapping".bright_blue().bold());
    println!();

    let record = match service.get(code).await {
        Ok(record) => record,
        Err(MappingError::MappingNotFound(_)) => {
            println!("{}", "⚠️  Mapping not found".yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Store error: {}", e)),
    };

    println!("  Code:         {}", record.short_code.cyan());
    println!("  Original URL: {}", record.original_url.bright_black());
    if record.was_accessed() {
        println!(
            "{}",
            format!(
                "⚠️  This link has been followed {} time(s); deleting it breaks existing short URLs",
                record.view_count
            )
            .yellow()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .remove(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete mapping: {}", e))?;

    println!();
    println!("{}", "✅ Mapping deleted".green().bold());
    println!();

    Ok(())
}

/// Displays the number of stored mappings.
async fn handle_stats(service: &Service) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let mappings = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!(
        "  Mappings: {}",
        mappings.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles store diagnostic commands.
async fn handle_db_action(action: DbAction, service: &Service) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking store connection...".bright_blue());

            if service.store_healthy().await {
                println!("{}", "✅ Store connection OK".green().bold());
            } else {
                anyhow::bail!("Store is unreachable");
            }
        }
    }

    Ok(())
}
