//! Travel Safe CLI
//!
//! Scrapes city pages and the country directory and prints the JSON
//! envelope to stdout.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use travelsafe::{
    error::Result,
    models::Config,
    pipeline::{Envelope, Payload, SafetyScraper},
};

/// travelsafe - Travel safety page scraper
#[derive(Parser, Debug)]
#[command(
    name = "travelsafe",
    version,
    about = "Scrape city safety pages and the country directory"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "travelsafe.toml")]
    config: PathBuf,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Scrape(ScrapeCommand),

    /// Validate the configuration file
    Validate,
}

/// Commands that produce an envelope.
#[derive(Subcommand, Debug)]
enum ScrapeCommand {
    /// Scrape a single city page
    City {
        /// City page URL
        #[arg(long)]
        url: String,
    },

    /// Scrape the country directory
    Directory {
        /// Only return the country with this name
        #[arg(long)]
        country: Option<String>,
    },

    /// Scrape several city pages
    Cities {
        /// City page URLs
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Extract a city page from a local HTML file
    ParseCity {
        #[arg(long)]
        file: PathBuf,

        /// URL the page was fetched from
        #[arg(long)]
        url: String,
    },

    /// Extract the directory from a local HTML file
    ParseDirectory {
        #[arg(long)]
        file: PathBuf,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

async fn run(command: ScrapeCommand, scraper: &SafetyScraper) -> Result<Payload> {
    let payload = match command {
        ScrapeCommand::City { url } => Payload::City(scraper.city(&url).await?),
        ScrapeCommand::Directory { country: None } => {
            Payload::Countries(scraper.directory().await?)
        }
        ScrapeCommand::Directory {
            country: Some(name),
        } => Payload::Country(scraper.country(&name).await?),
        ScrapeCommand::Cities { urls } => Payload::Cities(scraper.cities(urls).await),
        ScrapeCommand::ParseCity { file, url } => {
            let html = tokio::fs::read_to_string(&file).await?;
            Payload::City(scraper.parse_city(&html, &url)?)
        }
        ScrapeCommand::ParseDirectory { file } => {
            let html = tokio::fs::read_to_string(&file).await?;
            Payload::Countries(scraper.parse_directory(&html)?)
        }
    };
    Ok(payload)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return ExitCode::FAILURE;
    }

    let command = match cli.command {
        Command::Scrape(command) => command,
        Command::Validate => {
            log::info!("Config OK ({})", cli.config.display());
            return ExitCode::SUCCESS;
        }
    };

    let pretty = cli.pretty || config.output.pretty;
    let config = Arc::new(config);
    let scraper = match SafetyScraper::from_config(Arc::clone(&config)) {
        Ok(scraper) => scraper,
        Err(e) => {
            log::error!("Failed to build scraper: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(command, &scraper).await;
    let envelope = Envelope::from_result(scraper.source(), result);

    match envelope.to_json(pretty) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize response: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if envelope.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
