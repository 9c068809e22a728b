//! Forecast aggregation: 3-hour provider samples grouped into daily summaries.
//!
//! Days are keyed by the calendar date of each sample in the city's UTC
//! offset. The first day seen is treated as the partial current day and
//! dropped, so the output is the "next days" forecast.

use std::{collections::HashMap, f32::consts::PI};

use chrono::{FixedOffset, NaiveDate};

use crate::domain::weather::{
    ConditionTag, RawSample, Units, display_temp, local_time, round_half_up,
};

pub const FORECAST_DAYS: usize = 5;

const DEFAULT_VISIBILITY_M: f32 = 10_000.0;
const MIN_BAR_WIDTH_PCT: f32 = 6.0;
const CURVE_HOURS: [u32; 9] = [0, 2, 5, 8, 11, 14, 17, 20, 23];

/// Temperature readings for one day, Celsius.
///
/// Only `max`, `min` and `day` come from samples. The other three are fixed
/// offsets from the extremes and are not clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTemperatures {
    pub max: f32,
    pub min: f32,
    pub day: f32,
    pub night: f32,
    pub evening: f32,
    pub morning: f32,
}

impl DayTemperatures {
    #[must_use]
    pub fn from_extremes(max: f32, min: f32, day: f32) -> Self {
        Self {
            max,
            min,
            day,
            night: min + 1.0,
            evening: max - 1.0,
            morning: min + 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub timestamp: i64,
    pub date: NaiveDate,
    pub temperature: DayTemperatures,
    pub humidity: i32,
    pub wind_speed: f32,
    pub wind_direction: f32,
    pub pressure_hpa: i32,
    pub visibility_m: f32,
    pub cloud_cover: f32,
    pub precipitation_chance: u8,
    pub feels_like_c: f32,
    pub condition: Option<ConditionTag>,
}

#[derive(Debug)]
struct DayGroup<'a> {
    date: NaiveDate,
    samples: Vec<&'a RawSample>,
}

/// Groups samples by local calendar day and summarizes up to
/// [`FORECAST_DAYS`] days after the first one.
#[must_use]
pub fn group_by_day(samples: &[RawSample], offset: FixedOffset) -> Vec<DaySummary> {
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut groups: Vec<DayGroup<'_>> = Vec::new();

    for sample in samples {
        let Some(local) = local_time(sample.timestamp, offset) else {
            continue;
        };
        let date = local.date_naive();
        let slot = *index.entry(date).or_insert_with(|| {
            groups.push(DayGroup {
                date,
                samples: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].samples.push(sample);
    }

    groups
        .iter()
        .skip(1)
        .take(FORECAST_DAYS)
        .filter_map(summarize_day)
        .collect()
}

fn summarize_day(group: &DayGroup<'_>) -> Option<DaySummary> {
    let samples = &group.samples;
    let first = *samples.first()?;
    let middle = samples.get(samples.len() / 2).copied().unwrap_or(first);

    let max = samples
        .iter()
        .map(|s| s.temperature_c)
        .fold(f32::NEG_INFINITY, f32::max);
    let min = samples
        .iter()
        .map(|s| s.temperature_c)
        .fold(f32::INFINITY, f32::min);
    let max_pop = samples
        .iter()
        .map(|s| s.precipitation_probability.unwrap_or(0.0))
        .fold(0.0_f32, f32::max);

    Some(DaySummary {
        timestamp: first.timestamp,
        date: group.date,
        temperature: DayTemperatures::from_extremes(max, min, middle.temperature_c),
        humidity: round_half_up(mean(samples, |s| s.humidity)) as i32,
        wind_speed: round_tenths(mean(samples, |s| s.wind_speed.unwrap_or(0.0))),
        wind_direction: middle.wind_direction.unwrap_or(0.0),
        pressure_hpa: round_half_up(mean(samples, |s| s.pressure_hpa)) as i32,
        visibility_m: middle.visibility_m.unwrap_or(DEFAULT_VISIBILITY_M),
        cloud_cover: middle.cloud_cover.unwrap_or(0.0),
        precipitation_chance: round_half_up(max_pop * 100.0).clamp(0.0, 100.0) as u8,
        feels_like_c: round_half_up(mean(samples, |s| s.feels_like_c)),
        condition: first.condition.clone(),
    })
}

fn mean(samples: &[&RawSample], field: impl Fn(&RawSample) -> f32) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let total: f32 = samples.iter().map(|s| field(s)).sum();
    total / samples.len() as f32
}

fn round_tenths(value: f32) -> f32 {
    round_half_up(value * 10.0) / 10.0
}

/// Lowest displayed min and highest displayed max across the days.
/// Falls back to `(0, 40)` when there are no days.
#[must_use]
pub fn week_range(days: &[DaySummary], units: Units) -> (i32, i32) {
    if days.is_empty() {
        return (0, 40);
    }
    let low = days
        .iter()
        .map(|d| display_temp(d.temperature.min, units))
        .min()
        .unwrap_or(0);
    let high = days
        .iter()
        .map(|d| display_temp(d.temperature.max, units))
        .max()
        .unwrap_or(40);
    (low, high)
}

/// Placement of one day's range inside the week's range, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpan {
    pub left_pct: f32,
    pub width_pct: f32,
}

#[must_use]
pub fn range_span(day_min: f32, day_max: f32, week_min: f32, week_max: f32) -> RangeSpan {
    let week = week_max - week_min;
    let week = if week == 0.0 { 1.0 } else { week };
    RangeSpan {
        left_pct: (day_min - week_min) / week * 100.0,
        width_pct: ((day_max - day_min) / week * 100.0).max(MIN_BAR_WIDTH_PCT),
    }
}

/// Converts a span into `(start, end)` cell indices, `start <= end <= width`.
#[must_use]
pub fn bar_cells(span: RangeSpan, width: usize) -> (usize, usize) {
    let cells = width as f32;
    let start = (span.left_pct / 100.0 * cells).round().clamp(0.0, cells) as usize;
    let end = ((span.left_pct + span.width_pct) / 100.0 * cells)
        .round()
        .clamp(0.0, cells) as usize;
    (start, end.max(start))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub hour: u32,
    pub value: f32,
}

/// Synthetic diurnal curve between `min` and `max`: lowest near 05:00,
/// highest near 17:00. Values carry one decimal.
#[must_use]
pub fn diurnal_curve(min: f32, max: f32) -> Vec<CurvePoint> {
    CURVE_HOURS
        .iter()
        .map(|&hour| {
            let phase = ((hour as f32 - 5.0) / 24.0) * PI * 2.0 - PI / 2.0;
            let normalized = (phase.sin() + 1.0) / 2.0;
            CurvePoint {
                hour,
                value: round_tenths(min + (max - min) * normalized),
            }
        })
        .collect()
}
