pub mod demo;
pub mod geocode;
pub mod openweather;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::{
    cli::Cli,
    domain::weather::{CitySuggestion, WeatherReport},
};
use geocode::GeocodeClient;
use openweather::WeatherClient;

/// Minimum trimmed query length before autocomplete asks anyone.
pub const MIN_SUGGESTION_CHARS: usize = 2;

/// Lookup failures as shown to the user. `Unspecified` keeps the underlying
/// cause for logs only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("City not found. Try a different spelling.")]
    NotFound,
    #[error("Invalid API key. Check your OpenWeatherMap key.")]
    Unauthorized,
    #[error("Something went wrong. Please try again.")]
    Unspecified(String),
}

impl LookupError {
    pub(crate) fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            other => Self::Unspecified(format!("provider returned {other}")),
        }
    }
}

/// Where lookups and suggestions come from.
#[derive(Debug, Clone)]
pub enum Provider {
    Live {
        weather: WeatherClient,
        geocode: GeocodeClient,
    },
    Demo,
}

impl Provider {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.demo_mode() {
            debug!("no api key configured, serving demo data");
            return Self::Demo;
        }
        let key = cli.api_key.clone().unwrap_or_default();
        Self::Live {
            weather: WeatherClient::with_base_url(&cli.weather_url, key.clone()),
            geocode: GeocodeClient::with_base_url(&cli.geo_url, key),
        }
    }

    pub async fn lookup(&self, query: &str) -> Result<WeatherReport, LookupError> {
        match self {
            Self::Live { weather, .. } => weather.lookup(query).await,
            Self::Demo => Ok(demo::demo_report(query)),
        }
    }

    pub async fn suggest(&self, query: &str) -> Vec<CitySuggestion> {
        let query = query.trim();
        if query.chars().count() < MIN_SUGGESTION_CHARS {
            return Vec::new();
        }
        match self {
            Self::Live { geocode, .. } => geocode.suggest(query).await,
            Self::Demo => demo::demo_suggestions(query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_lookup_errors() {
        assert_eq!(
            LookupError::from_status(StatusCode::NOT_FOUND),
            LookupError::NotFound
        );
        assert_eq!(
            LookupError::from_status(StatusCode::UNAUTHORIZED),
            LookupError::Unauthorized
        );
        assert!(matches!(
            LookupError::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            LookupError::Unspecified(_)
        ));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            LookupError::NotFound.to_string(),
            "City not found. Try a different spelling."
        );
        assert_eq!(
            LookupError::Unspecified("socket closed".to_string()).to_string(),
            "Something went wrong. Please try again."
        );
    }

    #[tokio::test]
    async fn short_queries_get_no_suggestions() {
        assert!(Provider::Demo.suggest("L").await.is_empty());
        assert!(Provider::Demo.suggest("  L ").await.is_empty());
        assert!(!Provider::Demo.suggest("Lo").await.is_empty());
    }

    #[tokio::test]
    async fn demo_lookup_names_the_queried_city() {
        let report = Provider::Demo.lookup("Porto,PT").await.expect("demo report");
        assert_eq!(report.current.name, "Porto");
        assert_eq!(report.days.len(), 5);
    }
}
