use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use skycast_core::{API_KEY_ENV, Config, WeatherClient, WeatherDisplay};

const EMPTY_CITY_PROMPT: &str = "Please enter a city name.";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key used for requests.
    Configure {
        /// API key; prompted for interactively when omitted.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "London" or "San Francisco".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure { api_key } => configure(api_key),
            Command::Show { city } => show(&city).await,
        }
    }
}

async fn show(city: &str) -> Result<()> {
    let Some(city) = normalized_city(city) else {
        println!("{EMPTY_CITY_PROMPT}");
        return Ok(());
    };

    let config = Config::load()?;
    let Some(api_key) = config.resolve_api_key() else {
        bail!(
            "No API key configured.\n\
             Hint: run `skycast configure` or set {API_KEY_ENV}."
        );
    };

    let client = WeatherClient::new(api_key)?;
    let body = match client.fetch_current(city).await {
        Ok(raw) => {
            tracing::debug!("request for {city} completed with HTTP {}", raw.status);
            raw.body
        }
        // Transport failures surface as display text, like every other
        // failure on this path.
        Err(err) => format!("Error fetching weather: {err}"),
    };

    let display = WeatherDisplay::from_body(&body);
    println!("{}", display.detail_text);
    if !display.temp_label.is_empty() {
        println!();
        println!("{}", display.temp_label);
    }

    Ok(())
}

fn configure(api_key: Option<String>) -> Result<()> {
    let api_key = match api_key {
        Some(key) => key,
        None => inquire::Password::new("OpenWeather API key:")
            .without_confirmation()
            .prompt()
            .context("Failed to read the API key")?,
    };

    let api_key = api_key.trim().to_owned();
    if api_key.is_empty() {
        bail!("API key must not be empty.");
    }

    let mut config = Config::load()?;
    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

/// The city as queried, or `None` for blank input, which must short-circuit
/// before any network client exists.
fn normalized_city(city: &str) -> Option<&str> {
    let city = city.trim();
    if city.is_empty() { None } else { Some(city) }
}
