//! Canned provider used when no API key is configured.

use chrono::{Offset, Utc};

use crate::domain::{
    forecast::{DaySummary, DayTemperatures, FORECAST_DAYS},
    weather::{CitySuggestion, ConditionTag, CurrentConditions, WeatherReport, local_time},
};

const ONE_DAY: i64 = 86_400;
const SUGGESTION_LIMIT: usize = 6;

struct DemoDay {
    main: &'static str,
    description: &'static str,
    icon: &'static str,
    high: f32,
    low: f32,
    humidity: i32,
    wind: f32,
    pop: u8,
}

#[rustfmt::skip]
const DEMO_DAYS: [DemoDay; FORECAST_DAYS] = [
    DemoDay { main: "Clear", description: "clear sky", icon: "01d", high: 21.6, low: 14.2, humidity: 62, wind: 3.1, pop: 5 },
    DemoDay { main: "Clouds", description: "partly cloudy", icon: "02d", high: 19.1, low: 12.5, humidity: 74, wind: 5.8, pop: 20 },
    DemoDay { main: "Rain", description: "light rain", icon: "10d", high: 15.3, low: 10.1, humidity: 88, wind: 7.3, pop: 80 },
    DemoDay { main: "Clouds", description: "overcast", icon: "04d", high: 17.8, low: 11.9, humidity: 74, wind: 4.9, pop: 35 },
    DemoDay { main: "Clear", description: "sunny", icon: "01d", high: 22.4, low: 15.0, humidity: 58, wind: 3.1, pop: 5 },
];

const DEMO_CITIES: [(&str, &str, &str); 22] = [
    ("London", "GB", "England"),
    ("Los Angeles", "US", "California"),
    ("Lima", "PE", "Lima"),
    ("Lisbon", "PT", "Lisbon"),
    ("Lyon", "FR", "Auvergne"),
    ("Lagos", "NG", "Lagos"),
    ("Tokyo", "JP", "Tokyo"),
    ("Toronto", "CA", "Ontario"),
    ("Taipei", "TW", "Taipei"),
    ("New York", "US", "New York"),
    ("New Delhi", "IN", "Delhi"),
    ("Sydney", "AU", "New South Wales"),
    ("Singapore", "SG", ""),
    ("Seoul", "KR", "Seoul"),
    ("Paris", "FR", "Île-de-France"),
    ("Prague", "CZ", "Bohemia"),
    ("Dubai", "AE", "Dubai"),
    ("Berlin", "DE", "Berlin"),
    ("Barcelona", "ES", "Catalonia"),
    ("Mumbai", "IN", "Maharashtra"),
    ("Chicago", "US", "Illinois"),
    ("Cairo", "EG", "Cairo"),
];

/// A fixed report named after the first comma-separated part of `query`.
pub fn demo_report(query: &str) -> WeatherReport {
    let now = Utc::now();
    let offset = Utc.fix();
    let name = query.split(',').next().unwrap_or(query).trim().to_string();

    let current = CurrentConditions {
        name,
        country: Some("US".to_string()),
        temperature_c: 18.4,
        feels_like_c: 17.1,
        temp_min_c: 14.2,
        temp_max_c: 21.6,
        humidity: 72.0,
        pressure_hpa: 1015.0,
        visibility_m: Some(10_000.0),
        cloud_cover: 78.0,
        wind_speed: 4.2,
        wind_direction: 230.0,
        wind_gust: Some(6.1),
        condition: ConditionTag {
            main: "Clouds".to_string(),
            description: "overcast clouds".to_string(),
            icon: "04d".to_string(),
        },
        sunrise: Some(1_708_340_000),
        sunset: Some(1_708_382_000),
    };

    let days = DEMO_DAYS
        .iter()
        .zip(0_i32..)
        .filter_map(|(day, idx)| {
            let timestamp = now.timestamp() + ONE_DAY * i64::from(idx + 1);
            let date = local_time(timestamp, offset)?.date_naive();
            let mid = (day.high + day.low) / 2.0;
            Some(DaySummary {
                timestamp,
                date,
                temperature: DayTemperatures::from_extremes(day.high, day.low, mid),
                humidity: day.humidity,
                wind_speed: day.wind,
                wind_direction: (180 + idx * 30) as f32,
                pressure_hpa: 1013 + idx * 2,
                visibility_m: (10_000 - idx * 500) as f32,
                cloud_cover: (idx * 15) as f32,
                precipitation_chance: day.pop,
                feels_like_c: mid - 1.0,
                condition: Some(ConditionTag {
                    main: day.main.to_string(),
                    description: day.description.to_string(),
                    icon: day.icon.to_string(),
                }),
            })
        })
        .collect();

    WeatherReport {
        current,
        days,
        utc_offset: offset,
        fetched_at: now,
    }
}

/// Case-insensitive prefix matches over a fixed city list.
pub fn demo_suggestions(query: &str) -> Vec<CitySuggestion> {
    let needle = query.trim().to_lowercase();
    DEMO_CITIES
        .iter()
        .filter(|(name, _, _)| name.to_lowercase().starts_with(&needle))
        .take(SUGGESTION_LIMIT)
        .map(|(name, country, state)| CitySuggestion {
            name: (*name).to_string(),
            country: (*country).to_string(),
            state: (!state.is_empty()).then(|| (*state).to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_match_prefix_case_insensitively() {
        let names: Vec<String> = demo_suggestions("lo")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["London", "Los Angeles"]);
    }

    #[test]
    fn suggestions_are_capped() {
        assert_eq!(demo_suggestions("l").len(), 6);
        assert!(demo_suggestions("zz").is_empty());
    }

    #[test]
    fn empty_state_is_omitted() {
        let singapore = demo_suggestions("sing");
        assert_eq!(singapore.len(), 1);
        assert_eq!(singapore[0].state, None);
    }

    #[test]
    fn report_follows_fixed_offsets() {
        let report = demo_report("Lisbon, PT");
        assert_eq!(report.current.name, "Lisbon");
        assert_eq!(report.days.len(), 5);
        let first = &report.days[0];
        assert!((first.temperature.night - 15.2).abs() < 1e-4);
        assert!((first.temperature.evening - 20.6).abs() < 1e-4);
        assert!(report.days.windows(2).all(|w| w[0].date < w[1].date));
    }
}
