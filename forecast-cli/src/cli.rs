use anyhow::Context;
use clap::{Parser, Subcommand};
use forecast_core::{Config, backend_from_config};
use inquire::{Password, Text};
use tracing_subscriber::EnvFilter;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "forecast.io day-by-day weather")]
pub struct Cli {
    /// Log raw requests and responses.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the forecast.io API key and language.
    Configure,

    /// Show the forecast for a location.
    Show {
        /// Location as `latitude,longitude`, e.g. `40.748,-73.985`.
        #[arg(allow_hyphen_values = true)]
        location: String,

        /// Number of days to show; defaults to the configured value.
        #[arg(long, short)]
        days: Option<usize>,

        /// Language of the textual summaries.
        #[arg(long)]
        lang: Option<String>,

        /// API key to use instead of the configured one.
        #[arg(long, env = "FORECAST_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        init_tracing(self.debug || config.debug);

        match self.command {
            Command::Configure => configure(config),
            Command::Show {
                location,
                days,
                lang,
                api_key,
                json,
            } => {
                if let Some(key) = api_key {
                    config.set_api_key(key);
                }
                if let Some(lang) = lang {
                    config.lang = lang;
                }
                let days = days.unwrap_or(config.days);

                let backend = backend_from_config(&config)?;
                let data = backend
                    .fetch(&location, days)
                    .await
                    .with_context(|| format!("Failed to fetch weather data for {location}"))?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&data)?);
                } else {
                    print!("{}", render::render(&data));
                }
                Ok(())
            }
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("forecast.io API key:")
        .without_confirmation()
        .with_help_message("Register for one at https://developer.forecast.io/register")
        .prompt()?;
    let lang = Text::new("Language:")
        .with_default(&config.lang)
        .prompt()?;

    config.set_api_key(api_key);
    config.lang = lang;
    config.save()?;

    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}

fn init_tracing(debug: bool) {
    let default = if debug { "forecast_core=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
