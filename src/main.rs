mod backend;
mod cli_messages;
mod commands;
mod config;
mod consts;
mod controller;
mod error_classifier;
mod events;
mod logging;
mod progress;
mod session;
mod ui;
mod workers;

use crate::backend::BackendClient;
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::polling;
use crate::logging::{LogTarget, init_logger};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Email queue dashboard: upload CSV batches and watch the backend drain them
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the live dashboard
    Start {
        /// Backend base URL, e.g. http://localhost:8080
        #[arg(long, value_name = "URL")]
        backend_url: Option<String>,

        /// Status poll interval in milliseconds
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,

        /// CSV file to upload as soon as the dashboard starts
        #[arg(long, value_name = "CSV")]
        file: Option<PathBuf>,

        /// Print updates to the console instead of drawing the TUI
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Paint a dark background behind the TUI
        #[arg(long = "with-background", default_value_t = false)]
        with_background: bool,

        /// Write diagnostic logs to this file (TUI mode)
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,
    },
    /// Upload one CSV batch and print the result
    Upload {
        /// CSV file with one email address per row, header first
        #[arg(value_name = "CSV")]
        file: PathBuf,

        #[arg(long, value_name = "URL")]
        backend_url: Option<String>,
    },
    /// Print queue length, counters and the head of the queue once
    Status {
        #[arg(long, value_name = "URL")]
        backend_url: Option<String>,
    },
    /// Save the backend URL (and optionally the poll interval) to the config file
    SetBackend {
        #[arg(value_name = "URL")]
        url: String,

        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,
    },
    /// Delete the config file
    ResetConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    match args.command {
        Command::Start {
            backend_url,
            interval_ms,
            file,
            headless,
            with_background,
            log_file,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let backend_url = config.resolve_backend_url(backend_url);
            let interval = polling::clamp_interval(interval_ms.unwrap_or(config.poll_interval_ms));

            match (headless, log_file.as_deref()) {
                (true, _) => init_logger(LogTarget::Terminal)?,
                (false, Some(path)) => init_logger(LogTarget::File(path))?,
                (false, None) => init_logger(LogTarget::Off)?,
            }

            let session = setup_session(backend_url, interval, file).await?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Upload { file, backend_url } => {
            init_logger(LogTarget::Terminal)?;
            let config = Config::load_or_default(&config_path)?;
            let client = BackendClient::new(config.resolve_backend_url(backend_url))?;

            let (result, lines) = commands::upload_once(Arc::new(client), &file).await;
            for line in lines {
                println!("{}", line);
            }
            match result {
                Ok(Some(outcome)) => {
                    print_cmd_success!(
                        "Batch accepted.",
                        "Tracking {} emails (sent {}, failed {})",
                        outcome.total_emails(),
                        outcome.stats.sent,
                        outcome.stats.failed
                    );
                    Ok(())
                }
                Ok(None) => Ok(()),
                Err(e) => {
                    print_cmd_error!("Upload failed.", &e.to_string());
                    Err(e.into())
                }
            }
        }
        Command::Status { backend_url } => {
            init_logger(LogTarget::Terminal)?;
            let config = Config::load_or_default(&config_path)?;
            let client = BackendClient::new(config.resolve_backend_url(backend_url))?;

            match commands::fetch_status(&client).await {
                Ok((queue, stats)) => {
                    for line in commands::format_status(&queue, &stats) {
                        println!("{}", line);
                    }
                    Ok(())
                }
                Err(e) => {
                    print_cmd_error!("Failed to fetch status.", &e.to_string());
                    Err(e.into())
                }
            }
        }
        Command::SetBackend { url, interval_ms } => {
            let mut config = match Config::load_or_default(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    print_cmd_warn!("Ignoring unreadable config.", "{}", e);
                    Config::default()
                }
            };
            config.backend_url = url;
            if let Some(ms) = interval_ms {
                config.poll_interval_ms = ms;
            }
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "Backend saved.",
                "{} (poll every {}ms)",
                config.backend_url,
                config.poll_interval_ms
            );
            Ok(())
        }
        Command::ResetConfig => {
            print_cmd_info!("Clearing configuration...", "{}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
