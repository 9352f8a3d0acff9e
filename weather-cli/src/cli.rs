use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::Text;
use serde_json::Number;
use tracing::info;
use weather_core::{Config, Coordinates, WeatherProvider, WeatherSummary};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather by coordinates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set or clear the endpoint override in the config file.
    ///
    /// The API key is always read from OPENWEATHER_API_KEY on each request.
    Configure,

    /// Show current weather at a coordinate.
    Show {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Position accuracy in meters (accepted, not sent).
        #[arg(long)]
        accuracy: Option<f64>,

        /// Print the normalized summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the config file location.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { lat, lon, accuracy, json } => {
                let coordinates = Coordinates { latitude: lat, longitude: lon, accuracy };
                show(&coordinates, json).await?;
            }
            Command::ConfigPath => println!("{}", Config::config_file_path()?.display()),
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let current = cfg.endpoint.clone().unwrap_or_default();
    let endpoint = Text::new("OpenWeather endpoint (empty for default):")
        .with_initial_value(&current)
        .prompt()
        .context("Failed to read endpoint")?;

    cfg.set_endpoint(Some(endpoint));
    cfg.save()?;

    info!(path = %Config::config_file_path()?.display(), "saved configuration");
    match &cfg.endpoint {
        Some(endpoint) => println!("Endpoint set to {endpoint}."),
        None => println!("Using the default endpoint."),
    }
    Ok(())
}

async fn show(coordinates: &Coordinates, json: bool) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let provider = cfg.provider();

    let summary = provider.get_weather(coordinates).await.with_context(|| {
        format!(
            "Weather lookup failed for {}, {}",
            coordinates.latitude, coordinates.longitude
        )
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render(&summary));
        println!("Fetched:    {}", Local::now().format("%Y-%m-%d %H:%M"));
    }

    Ok(())
}

fn celsius(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

fn render(summary: &WeatherSummary) -> String {
    let d = &summary.data;
    format!(
        "{} (id {})\n\
         Temp:       {:.1} °C\n\
         Feels like: {:.1} °C\n\
         Min / max:  {:.1} / {:.1} °C\n",
        summary.title,
        summary.id,
        celsius(&d.temp),
        celsius(&d.feels_like),
        celsius(&d.temp_min),
        celsius(&d.temp_max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use weather_core::MainReadings;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["weather", "show", "--lat", "-33.87", "--lon", "-151.2"])
            .unwrap();

        match cli.command {
            Command::Show { lat, lon, accuracy, json } => {
                assert_eq!(lat, -33.87);
                assert_eq!(lon, -151.2);
                assert_eq!(accuracy, None);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_requires_both_coordinates() {
        assert!(Cli::try_parse_from(["weather", "show", "--lat", "1"]).is_err());
    }

    #[test]
    fn render_lists_temperatures() {
        let summary = WeatherSummary {
            title: "Springfield".into(),
            data: MainReadings {
                feels_like: Number::from_f64(21.5).unwrap(),
                temp: Number::from(20),
                temp_max: Number::from(22),
                temp_min: Number::from_f64(18.0).unwrap(),
                extra: Default::default(),
            },
            id: 42,
        };

        let out = render(&summary);
        assert!(out.starts_with("Springfield (id 42)\n"));
        assert!(out.contains("Temp:       20.0 °C"));
        assert!(out.contains("Feels like: 21.5 °C"));
        assert!(out.contains("Min / max:  18.0 / 22.0 °C"));
    }
}
