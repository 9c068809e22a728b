use std::{collections::HashSet, time::Duration};

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::weather::CitySuggestion;

const SUGGESTION_LIMIT: &str = "6";

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeocodeClient {
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(8))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Autocomplete candidates. Failures are logged and yield no suggestions.
    pub async fn suggest(&self, query: &str) -> Vec<CitySuggestion> {
        match self.fetch_candidates(query).await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(error = %format!("{err:#}"), query, "city suggestions unavailable");
                Vec::new()
            }
        }
    }

    pub async fn fetch_candidates(&self, query: &str) -> Result<Vec<CitySuggestion>> {
        let response = self
            .client
            .get(format!("{}/direct", self.base_url))
            .query(&[
                ("q", query),
                ("limit", SUGGESTION_LIMIT),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("geocoding request failed")?
            .error_for_status()
            .context("geocoding request returned non-success status")?;

        let payload: Vec<GeocodeResult> = response
            .json()
            .await
            .context("failed to decode geocoding response")?;

        let suggestions = dedupe_cities(payload);
        debug!(query, count = suggestions.len(), "city suggestions fetched");
        Ok(suggestions)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    #[serde(default)]
    country: String,
    state: Option<String>,
}

/// Keeps the first entry of every (name, country) pair, in provider order.
fn dedupe_cities(results: Vec<GeocodeResult>) -> Vec<CitySuggestion> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|entry| seen.insert((entry.name.clone(), entry.country.clone())))
        .map(|entry| CitySuggestion {
            name: entry.name,
            country: entry.country,
            state: entry.state,
        })
        .collect()
}
