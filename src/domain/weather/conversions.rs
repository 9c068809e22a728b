use chrono::{DateTime, FixedOffset};

use super::Units;

const COMPASS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

#[must_use]
pub fn convert_temp(celsius: f32, units: Units) -> f32 {
    match units {
        Units::Metric => celsius,
        Units::Imperial => celsius * 9.0 / 5.0 + 32.0,
    }
}

/// Nearest integer with ties rounded toward positive infinity, so `-2.5`
/// becomes `-2`.
#[must_use]
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Rounded display value. Non-finite input displays as 0.
#[must_use]
pub fn display_temp(celsius: f32, units: Units) -> i32 {
    let value = convert_temp(celsius, units);
    if value.is_finite() {
        round_half_up(value) as i32
    } else {
        0
    }
}

#[must_use]
pub fn unit_symbol(units: Units) -> &'static str {
    match units {
        Units::Metric => "°C",
        Units::Imperial => "°F",
    }
}

/// Provider wind speeds are m/s; imperial display uses mph.
#[must_use]
pub fn convert_wind(meters_per_second: f32, units: Units) -> f32 {
    match units {
        Units::Metric => meters_per_second,
        Units::Imperial => meters_per_second * 2.236_936,
    }
}

#[must_use]
pub fn wind_unit(units: Units) -> &'static str {
    match units {
        Units::Metric => "m/s",
        Units::Imperial => "mph",
    }
}

#[must_use]
pub fn compass_point(degrees: f32) -> &'static str {
    if !degrees.is_finite() {
        return COMPASS[0];
    }
    let sector = (degrees / 45.0).round() as i64;
    COMPASS[sector.rem_euclid(8) as usize]
}

/// Meters to kilometers, one decimal.
#[must_use]
pub fn visibility_km(meters: f32) -> f32 {
    round_half_up(meters / 100.0) / 10.0
}

#[must_use]
pub fn local_time(timestamp: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&offset))
}

#[must_use]
pub fn format_clock(timestamp: i64, offset: FixedOffset) -> String {
    local_time(timestamp, offset).map_or_else(
        || "--:--".to_string(),
        |t| t.format("%H:%M").to_string(),
    )
}

#[must_use]
pub fn format_weekday(timestamp: i64, offset: FixedOffset) -> String {
    local_time(timestamp, offset).map_or_else(|| "---".to_string(), |t| t.format("%a").to_string())
}

#[must_use]
pub fn format_date(timestamp: i64, offset: FixedOffset) -> String {
    local_time(timestamp, offset).map_or_else(String::new, |t| t.format("%b %-d").to_string())
}
