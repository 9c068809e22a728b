use chrono::{Days, FixedOffset, Utc};

use crate::{
    cli::IconMode,
    domain::{
        forecast::{DaySummary, range_span, week_range},
        weather::{
            Units, WeatherReport, compass_point, convert_wind, display_temp, format_date,
            format_weekday, icon_for_code, local_time, unit_symbol, visibility_km, wind_unit,
        },
    },
};

use super::{BAR_WIDTH, bar_line};

pub(super) fn daily_lines(
    report: &WeatherReport,
    units: Units,
    icons: IconMode,
    expanded: Option<usize>,
) -> Vec<String> {
    if report.days.is_empty() {
        return vec!["No forecast days available.".to_string()];
    }

    let (week_min, week_max) = week_range(&report.days, units);
    let symbol = unit_symbol(units);
    let tomorrow = tomorrow_in(report.utc_offset);

    let mut lines = vec!["Next days".to_string()];
    for (idx, day) in report.days.iter().enumerate() {
        let low = display_temp(day.temperature.min, units);
        let high = display_temp(day.temperature.max, units);
        let span = range_span(low as f32, high as f32, week_min as f32, week_max as f32);
        let label = if Some(day.date) == tomorrow {
            "Tomorrow".to_string()
        } else {
            format_weekday(day.timestamp, report.utc_offset)
        };
        lines.push(format!(
            "{}. {label:<8} {:<6} {}  {} {low:>3}{symbol} {high:>3}{symbol}",
            idx + 1,
            format_date(day.timestamp, report.utc_offset),
            day_icon(day, icons),
            bar_line(span, BAR_WIDTH, icons),
        ));
        if expanded == Some(idx) {
            lines.extend(detail_lines(day, units));
        }
    }
    lines
}

fn tomorrow_in(offset: FixedOffset) -> Option<chrono::NaiveDate> {
    local_time(Utc::now().timestamp(), offset)?
        .date_naive()
        .checked_add_days(Days::new(1))
}

fn day_icon(day: &DaySummary, icons: IconMode) -> &'static str {
    day.condition
        .as_ref()
        .map_or("  ", |tag| icon_for_code(&tag.icon, icons))
}

fn detail_lines(day: &DaySummary, units: Units) -> Vec<String> {
    let symbol = unit_symbol(units);
    let t = &day.temperature;
    let temp = |celsius: f32| format!("{}{symbol}", display_temp(celsius, units));
    let mut lines = Vec::with_capacity(4);
    if let Some(tag) = day.condition.as_ref().filter(|tag| !tag.description.is_empty()) {
        lines.push(format!("     {}", tag.description));
    }
    lines.push(format!(
        "     day {} · night {} · morning {} · evening {} · feels like {}",
        temp(t.day),
        temp(t.night),
        temp(t.morning),
        temp(t.evening),
        temp(day.feels_like_c),
    ));
    lines.push(format!(
        "     humidity {}% · wind {:.1} {} {} · pressure {} hPa",
        day.humidity,
        convert_wind(day.wind_speed, units),
        wind_unit(units),
        compass_point(day.wind_direction),
        day.pressure_hpa,
    ));
    lines.push(format!(
        "     rain {}% · clouds {:.0}% · visibility {:.1} km",
        day.precipitation_chance,
        day.cloud_cover,
        visibility_km(day.visibility_m),
    ));
    lines
}
