use crate::{
    cli::IconMode,
    domain::{
        forecast::diurnal_curve,
        weather::{
            CurrentConditions, Units, WeatherReport, compass_point, convert_temp, convert_wind,
            display_temp, format_clock, icon_for_code, unit_symbol, visibility_km, wind_unit,
        },
    },
    ui::shared::sparkline,
};

pub(super) fn current_lines(report: &WeatherReport, units: Units, icons: IconMode) -> Vec<String> {
    let current = &report.current;
    let symbol = unit_symbol(units);
    let condition = current.condition.condition();

    let mut lines = vec![
        format!("{}  [{}]", current.display_name(), condition.label()),
        format!(
            "{}  {}{symbol}  feels like {}{symbol}",
            condition_icon(current, icons),
            display_temp(current.temperature_c, units),
            display_temp(current.feels_like_c, units),
        ),
    ];
    if !current.condition.description.is_empty() {
        lines.push(current.condition.description.clone());
    }
    lines.push(today_line(current, units, icons));
    lines.push(format!(
        "sunrise {}  sunset {}",
        clock(current.sunrise, report),
        clock(current.sunset, report),
    ));
    lines.push(metric_tiles(current));
    lines.push(wind_line(current, units));
    lines.push(format!(
        "updated {}",
        format_clock(report.fetched_at.timestamp(), report.utc_offset)
    ));
    lines
}

fn condition_icon(current: &CurrentConditions, icons: IconMode) -> &'static str {
    if current.condition.icon.is_empty() {
        current.condition.condition().icon(icons)
    } else {
        icon_for_code(&current.condition.icon, icons)
    }
}

fn today_line(current: &CurrentConditions, units: Units, icons: IconMode) -> String {
    let curve: Vec<f32> = diurnal_curve(current.temp_min_c, current.temp_max_c)
        .iter()
        .map(|point| convert_temp(point.value, units))
        .collect();
    let symbol = unit_symbol(units);
    format!(
        "today {}  {}{symbol} to {}{symbol}",
        sparkline(&curve, icons),
        display_temp(current.temp_min_c, units),
        display_temp(current.temp_max_c, units),
    )
}

fn clock(timestamp: Option<i64>, report: &WeatherReport) -> String {
    timestamp.map_or_else(
        || "--:--".to_string(),
        |ts| format_clock(ts, report.utc_offset),
    )
}

fn metric_tiles(current: &CurrentConditions) -> String {
    let visibility = current
        .visibility_m
        .map_or_else(|| "--".to_string(), |m| format!("{:.1} km", visibility_km(m)));
    format!(
        "humidity {:.0}%  ·  pressure {:.0} hPa  ·  visibility {visibility}  ·  clouds {:.0}%",
        current.humidity, current.pressure_hpa, current.cloud_cover,
    )
}

fn wind_line(current: &CurrentConditions, units: Units) -> String {
    let unit = wind_unit(units);
    let mut line = format!(
        "wind {:.1} {unit} {}",
        convert_wind(current.wind_speed, units),
        compass_point(current.wind_direction),
    );
    if let Some(gust) = current.wind_gust {
        line.push_str(&format!("  ·  gusts up to {:.1} {unit}", convert_wind(gust, units)));
    }
    line
}
