//! Command-line driver for the News API extension.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use log::{debug, info};
use newsapi_rs::config::SettingsLoadOptions;
use newsapi_rs::protocol::{EventMsg, EventPayload};
use newsapi_rs::{EventSink, Extension, NewsApiClient, NewsApiSettings, ToolContext, ToolServices};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line options for the extension driver.
#[derive(Parser)]
#[command(name = "newsapi", version, about = "Search the latest news through newsapi.org")]
struct Cli {
    /// Optional path to a newsapi.json5 settings file, applied last
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run search_news and print the answer and attached media
    Search {
        /// Keywords to search for
        #[arg(required = true)]
        keywords: Vec<String>,
        /// Comma-separated domains to restrict the search to
        #[arg(long)]
        domains: Option<String>,
        /// Comma-separated domains to remove from the results
        #[arg(long)]
        exclude_domains: Option<String>,
    },
    /// Print the extension manifest as JSON
    Manifest,
}

/// Prints media attachments as they are delivered.
struct StdoutMediaSink;

impl EventSink for StdoutMediaSink {
    fn emit(&self, event: EventMsg) {
        if let EventPayload::MediasSent { medias, .. } = event.payload {
            for media in medias {
                println!("{media}");
            }
        }
    }
}

fn load_settings(config: Option<&PathBuf>) -> anyhow::Result<NewsApiSettings> {
    let cwd = std::env::current_dir().context("failed to resolve current working directory")?;
    let mut options = SettingsLoadOptions::new(&cwd);
    if let Some(path) = config {
        info!("loading settings from path: {}", path.display());
        options = options.with_runtime_path(path);
    }
    let layered = NewsApiSettings::load_layered_with_options(options)
        .context("failed to load settings")?;
    debug!("layered settings loaded (layers={})", layered.layers.len());
    Ok(layered.settings)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    newsapi_rs::init_logging();
    let cli = Cli::parse();
    let extension = Extension::news_api();

    match cli.command {
        Command::Manifest => {
            let manifest = serde_json::to_string_pretty(&extension.manifest())
                .context("failed to encode manifest")?;
            println!("{manifest}");
        }
        Command::Search {
            keywords,
            domains,
            exclude_domains,
        } => {
            let mut settings = load_settings(cli.config.as_ref())?;
            if domains.is_some() {
                settings.domains = domains;
            }
            if exclude_domains.is_some() {
                settings.exclude_domains = exclude_domains;
            }
            let settings = settings.normalized();

            let client = NewsApiClient::from_settings(&settings);
            let mut ctx = ToolContext::new(ToolServices {
                settings,
                news: Some(Arc::new(client)),
                event_sink: Some(Arc::new(StdoutMediaSink)),
            });
            let keywords = keywords.join(" ");
            let result = extension
                .call(&mut ctx, "search_news", json!({ "keywords": keywords }))
                .await
                .context("search_news failed")?;
            let Some(answer) = result.as_str() else {
                bail!("search_news returned a non-text result: {result}");
            };
            println!("{answer}");
        }
    }
    Ok(())
}
