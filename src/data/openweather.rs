use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, info, instrument, warn};

use crate::{
    data::LookupError,
    domain::{
        forecast::group_by_day,
        weather::{ConditionTag, CurrentConditions, RawSample, WeatherReport},
    },
};

/// 40 samples at 3-hour spacing is the provider's full 5-day window.
const FORECAST_SAMPLE_COUNT: &str = "40";

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Current conditions and forecast, requested together. Either failing
    /// fails the lookup; nothing partial is returned.
    #[instrument(skip(self))]
    pub async fn lookup(&self, query: &str) -> Result<WeatherReport, LookupError> {
        let (current, forecast) = futures::future::try_join(
            self.get_json::<CurrentResponse>("weather", query, &[]),
            self.get_json::<ForecastResponse>(
                "forecast",
                query,
                &[("cnt", FORECAST_SAMPLE_COUNT)],
            ),
        )
        .await
        .inspect_err(|err| warn!(error = ?err, "weather lookup failed"))?;

        let offset = utc_offset(
            forecast
                .city
                .as_ref()
                .and_then(|c| c.timezone)
                .or(current.timezone),
        );
        let samples = parse_samples(forecast.list);
        let days = group_by_day(&samples, offset);
        info!(
            city = %current.name,
            samples = samples.len(),
            days = days.len(),
            "weather lookup complete"
        );

        Ok(WeatherReport {
            current: parse_current(current),
            days,
            utc_offset: offset,
            fetched_at: Utc::now(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &str,
        extra: &[(&str, &str)],
    ) -> Result<T, LookupError> {
        let url = format!("{}/{endpoint}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .query(extra)
            .send()
            .await
            .map_err(|err| {
                LookupError::Unspecified(format!("{endpoint} request failed: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, endpoint, "provider rejected request");
            return Err(LookupError::from_status(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| {
                LookupError::Unspecified(format!("malformed {endpoint} payload: {err}"))
            })
    }
}

fn utc_offset(seconds: Option<i32>) -> FixedOffset {
    seconds
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

fn parse_current(payload: CurrentResponse) -> CurrentConditions {
    let wind = payload.wind.unwrap_or_default();
    CurrentConditions {
        name: payload.name,
        country: payload.sys.country,
        temperature_c: payload.main.temp,
        feels_like_c: payload.main.feels_like,
        temp_min_c: payload.main.temp_min.unwrap_or(payload.main.temp),
        temp_max_c: payload.main.temp_max.unwrap_or(payload.main.temp),
        humidity: payload.main.humidity,
        pressure_hpa: payload.main.pressure,
        visibility_m: payload.visibility,
        cloud_cover: payload.clouds.and_then(|c| c.all).unwrap_or(0.0),
        wind_speed: wind.speed.unwrap_or(0.0),
        wind_direction: wind.deg.unwrap_or(0.0),
        wind_gust: wind.gust,
        condition: condition_tag(payload.weather).unwrap_or_default(),
        sunrise: payload.sys.sunrise,
        sunset: payload.sys.sunset,
    }
}

fn parse_samples(list: Vec<ForecastEntry>) -> Vec<RawSample> {
    list.into_iter()
        .map(|entry| {
            let wind = entry.wind.unwrap_or_default();
            RawSample {
                timestamp: entry.dt,
                temperature_c: entry.main.temp,
                feels_like_c: entry.main.feels_like,
                humidity: entry.main.humidity,
                pressure_hpa: entry.main.pressure,
                wind_speed: wind.speed,
                wind_direction: wind.deg,
                visibility_m: entry.visibility,
                cloud_cover: entry.clouds.and_then(|c| c.all),
                precipitation_probability: entry.pop,
                condition: condition_tag(entry.weather),
            }
        })
        .collect()
}

fn condition_tag(weather: Vec<ConditionBlock>) -> Option<ConditionTag> {
    weather.into_iter().next().map(|w| ConditionTag {
        main: w.main,
        description: w.description,
        icon: w.icon,
    })
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    #[serde(default)]
    sys: SysBlock,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    wind: Option<WindBlock>,
    visibility: Option<f32>,
    clouds: Option<CloudsBlock>,
    timezone: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
struct SysBlock {
    country: Option<String>,
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f32,
    feels_like: f32,
    humidity: f32,
    pressure: f32,
    temp_min: Option<f32>,
    temp_max: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Default, Deserialize)]
struct WindBlock {
    speed: Option<f32>,
    deg: Option<f32>,
    gust: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct CloudsBlock {
    all: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastEntry>,
    city: Option<CityBlock>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt: i64,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    wind: Option<WindBlock>,
    visibility: Option<f32>,
    clouds: Option<CloudsBlock>,
    pop: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct CityBlock {
    timezone: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_entries_tolerate_missing_optional_blocks() {
        let payload: ForecastResponse = serde_json::from_str(
            r#"{
              "list": [
                {"dt": 1770890400, "main": {"temp": 4.5, "feels_like": 2.0, "humidity": 81, "pressure": 1009}},
                {"dt": 1770901200, "main": {"temp": 5.5, "feels_like": 3.1, "humidity": 77, "pressure": 1010},
                 "weather": [{"main": "Rain", "description": "light rain", "icon": "10d"}],
                 "wind": {"speed": 4.1, "deg": 200}, "clouds": {"all": 90}, "pop": 0.45, "visibility": 8000}
              ]
            }"#,
        )
        .expect("payload");

        let samples = parse_samples(payload.list);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].wind_speed, None);
        assert!(samples[0].condition.is_none());
        assert_eq!(samples[1].precipitation_probability, Some(0.45));
        assert_eq!(samples[1].cloud_cover, Some(90.0));
        assert_eq!(samples[1].condition.as_ref().map(|c| c.icon.as_str()), Some("10d"));
    }

    #[test]
    fn offset_falls_back_to_utc() {
        assert_eq!(utc_offset(None).local_minus_utc(), 0);
        assert_eq!(utc_offset(Some(7_200)).local_minus_utc(), 7_200);
        assert_eq!(utc_offset(Some(999_999)).local_minus_utc(), 0);
    }
}
