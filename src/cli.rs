#![allow(clippy::missing_errors_doc)]

use clap::{Parser, ValueEnum};

use crate::domain::weather::Units;

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_GEO_URL: &str = "https://api.openweathermap.org/geo/1.0";

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

impl From<UnitsArg> for Units {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Metric => Units::Metric,
            UnitsArg::Imperial => Units::Imperial,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,
    Ascii,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-lookup",
    version,
    about = "City weather lookup with a 5-day forecast"
)]
pub struct Cli {
    /// City to look up on start, e.g. "Lisbon" or "Lisbon,PT"
    pub city: Option<String>,

    /// Display units
    #[arg(long, value_enum, default_value_t = UnitsArg::Metric)]
    pub units: UnitsArg,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Weather API base URL
    #[arg(long, default_value = DEFAULT_WEATHER_URL)]
    pub weather_url: String,

    /// Geocoding API base URL
    #[arg(long, default_value = DEFAULT_GEO_URL)]
    pub geo_url: String,

    /// Force ASCII icons
    #[arg(long)]
    pub ascii_icons: bool,

    /// Serve canned data instead of calling the provider
    #[arg(long)]
    pub demo: bool,

    /// Print one report to stdout and exit (requires a city)
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.one_shot && self.city_query().is_none() {
            anyhow::bail!("--one-shot requires a city");
        }
        Ok(())
    }

    /// The startup city, trimmed. Blank counts as absent.
    #[must_use]
    pub fn city_query(&self) -> Option<&str> {
        self.city.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    /// Demo data is served when asked for or when no usable key is set.
    #[must_use]
    pub fn demo_mode(&self) -> bool {
        self.demo || self.api_key.as_deref().is_none_or(|k| k.trim().is_empty())
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else {
            IconMode::Emoji
        }
    }
}
