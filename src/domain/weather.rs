use chrono::{DateTime, FixedOffset, Utc};

mod conditions;
mod conversions;

pub use conditions::{Condition, icon_for_code};
pub use conversions::{
    compass_point, convert_temp, convert_wind, display_temp, format_clock, format_date,
    format_weekday, local_time, round_half_up, unit_symbol, visibility_km, wind_unit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }
}

/// Provider condition triple: `main` group, free-text description, icon code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConditionTag {
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl ConditionTag {
    pub fn condition(&self) -> Condition {
        Condition::from_main(&self.main)
    }
}

/// One 3-hour forecast entry. All temperatures are Celsius.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSample {
    pub timestamp: i64,
    pub temperature_c: f32,
    pub feels_like_c: f32,
    pub humidity: f32,
    pub pressure_hpa: f32,
    pub wind_speed: Option<f32>,
    pub wind_direction: Option<f32>,
    pub visibility_m: Option<f32>,
    pub cloud_cover: Option<f32>,
    pub precipitation_probability: Option<f32>,
    pub condition: Option<ConditionTag>,
}

#[derive(Debug, Clone)]
pub struct CurrentConditions {
    pub name: String,
    pub country: Option<String>,
    pub temperature_c: f32,
    pub feels_like_c: f32,
    pub temp_min_c: f32,
    pub temp_max_c: f32,
    pub humidity: f32,
    pub pressure_hpa: f32,
    pub visibility_m: Option<f32>,
    pub cloud_cover: f32,
    pub wind_speed: f32,
    pub wind_direction: f32,
    pub wind_gust: Option<f32>,
    pub condition: ConditionTag,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

impl CurrentConditions {
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

/// Result of one completed lookup: current conditions plus the grouped days.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub days: Vec<crate::domain::forecast::DaySummary>,
    pub utc_offset: FixedOffset,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CitySuggestion {
    pub name: String,
    pub country: String,
    pub state: Option<String>,
}

impl CitySuggestion {
    /// Query string handed to the weather endpoints.
    pub fn lookup_query(&self) -> String {
        format!("{},{}", self.name, self.country)
    }

    pub fn display_name(&self) -> String {
        match self.state.as_deref().filter(|s| !s.is_empty()) {
            Some(state) => format!("{}, {}, {}", self.name, state, self.country),
            None => format!("{}, {}", self.name, self.country),
        }
    }
}
