//! Wordbook CLI
//!
//! Local execution entry point for word lookups.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use wordbook::{
    error::Result,
    models::Config,
    pipeline::LookupService,
    services::ScraperRegistry,
    storage::{LocalStore, WordStore},
};

/// Wordbook - Vocabulary lookup backed by Wiktionary
#[derive(Parser, Debug)]
#[command(
    name = "wordbook",
    version,
    about = "Look up vocabulary words locally or on Wiktionary"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "wordbook.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a word, fetching it when not stored
    Search {
        text: String,
        #[arg(short, long, default_value = "en")]
        lang: String,
    },

    /// List recently updated words
    Recent {
        #[arg(short, long, default_value = "en")]
        lang: String,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Resolve synonyms and antonyms of a stored word
    Related { id: String },

    /// Prefix completions from the store and the live site
    Autocomplete {
        prefix: String,
        #[arg(short, long, default_value = "en")]
        lang: String,
    },

    /// Suggestions from the store, or the live site when the store has none
    Suggest {
        prefix: String,
        #[arg(short, long, default_value = "en")]
        lang: String,
    },

    /// Fill missing fields of a stored word
    Enrich {
        text: String,
        #[arg(short, long, default_value = "en")]
        lang: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    if let Command::Validate = cli.command {
        log::info!("Validating configuration...");
        if let Err(e) = config.validate() {
            log::error!("Config validation failed: {}", e);
            return Err(e);
        }
        log::info!("✓ Config OK ({} languages)", config.languages.len());
        return Ok(());
    }

    let store: Arc<dyn WordStore> = Arc::new(LocalStore::new(&config.storage.path));
    let registry = Arc::new(ScraperRegistry::from_config(&config)?);
    let service = LookupService::new(store, registry, config.lookup.clone());

    let cancel = CancellationToken::new();
    let token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupted, cancelling...");
            token.cancel();
        }
    });

    match cli.command {
        Command::Search { text, lang } => {
            print_json(&service.search(&text, &lang, &cancel).await?)?;
        }
        Command::Recent { lang, limit } => {
            print_json(&service.get_recent(&lang, limit).await?)?;
        }
        Command::Related { id } => {
            print_json(&service.get_related(&id, &cancel).await?)?;
        }
        Command::Autocomplete { prefix, lang } => {
            print_json(&service.autocomplete(&prefix, &lang, &cancel).await?)?;
        }
        Command::Suggest { prefix, lang } => {
            print_json(&service.get_suggestions(&prefix, &lang, &cancel).await?)?;
        }
        Command::Enrich { text, lang } => {
            print_json(&service.enrich(&text, &lang, &cancel).await?)?;
        }
        Command::Validate => {}
    }

    Ok(())
}
