#![allow(clippy::cast_precision_loss)]
#![allow(dead_code)]

use serde_json::{Value, json};
use weather_lookup::domain::weather::{ConditionTag, RawSample};

/// 2026-02-12T21:00:00Z
pub const FEB_12_21H: i64 = 1_770_930_000;
pub const THREE_HOURS: i64 = 10_800;

pub fn current_payload(name: &str, timezone: i32) -> Value {
    json!({
        "name": name,
        "timezone": timezone,
        "sys": { "country": "NO", "sunrise": 1_770_880_000, "sunset": 1_770_912_000 },
        "main": {
            "temp": 3.4, "feels_like": 0.9, "temp_min": 1.2, "temp_max": 5.0,
            "humidity": 81, "pressure": 1008
        },
        "weather": [{ "main": "Snow", "description": "light snow", "icon": "13d" }],
        "wind": { "speed": 5.2, "deg": 310, "gust": 9.4 },
        "visibility": 7000,
        "clouds": { "all": 90 }
    })
}

/// `count` entries, 3 hours apart, starting at `start`.
pub fn forecast_payload(start: i64, count: usize, timezone: i32) -> Value {
    let list: Vec<Value> = (0..count)
        .map(|idx| {
            let temp = 1.0 + (idx % 8) as f64;
            json!({
                "dt": start + THREE_HOURS * idx as i64,
                "main": {
                    "temp": temp, "feels_like": temp - 2.0, "humidity": 75, "pressure": 1010
                },
                "weather": [{ "main": "Clouds", "description": "broken clouds", "icon": "04d" }],
                "wind": { "speed": 4.0, "deg": 270 },
                "visibility": 10000,
                "clouds": { "all": 60 },
                "pop": 0.3
            })
        })
        .collect();
    json!({ "list": list, "city": { "timezone": timezone } })
}

pub fn raw_sample(timestamp: i64, temperature_c: f32, pop: Option<f32>) -> RawSample {
    RawSample {
        timestamp,
        temperature_c,
        feels_like_c: temperature_c,
        humidity: 60.0,
        pressure_hpa: 1013.0,
        precipitation_probability: pop,
        condition: Some(ConditionTag {
            main: "Clear".to_string(),
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
        }),
        ..RawSample::default()
    }
}
