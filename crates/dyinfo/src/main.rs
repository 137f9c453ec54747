#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::io::Read;

use dycore::core::{config, init_logger, log_startup_configuration};
use dycore::{extract_douyin_url, AppError, DouyinClient};

mod cli;

use cli::{Cli, Commands};

/// Entry point for the dyinfo command-line tool
///
/// Results go to stdout; logs go to stderr and the log file.
///
/// # Errors
/// Returns an error if initialization fails or the share link cannot be resolved.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load .env before any config static is read
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH, *config::LOG_LEVEL)?;
    log_startup_configuration();

    match cli.command {
        Commands::Info { compact, text } => {
            let text = input_text(text)?;
            let client = DouyinClient::new()?;
            let record = client.get_video_info(&text).await.map_err(report)?;
            let json = if compact {
                serde_json::to_string(&record)?
            } else {
                serde_json::to_string_pretty(&record)?
            };
            println!("{}", json);
        }
        Commands::Id { text } => {
            let text = input_text(text)?;
            let client = DouyinClient::new()?;
            println!("{}", client.get_video_id(&text).await.map_err(report)?);
        }
        Commands::Url { text } => {
            let text = input_text(text)?;
            let client = DouyinClient::new()?;
            println!("{}", client.get_video_url(&text).await.map_err(report)?);
        }
        Commands::Link { text } => {
            let text = input_text(text)?;
            let url = extract_douyin_url(&text).ok_or(AppError::LinkNotFound)?;
            println!("{}", url);
        }
    }

    Ok(())
}

/// Joins the positional words, or reads stdin when none were given.
fn input_text(words: Vec<String>) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read share text from stdin")?;
    Ok(buffer)
}

fn report(err: AppError) -> anyhow::Error {
    log::error!("Request failed ({}): {}", err.category(), err);
    err.into()
}
