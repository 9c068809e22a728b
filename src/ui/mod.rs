//! Plain-text rendering of the app state. Every function returns the full
//! screen as a string; the caller decides where to print it.

mod current;
mod daily;
mod shared;

use crate::{
    app::state::AppState,
    cli::IconMode,
    domain::{
        forecast::{RangeSpan, bar_cells},
        weather::{Units, WeatherReport},
    },
};

pub const BAR_WIDTH: usize = 20;

pub const HELP: &str = "\
Commands
  <city>      look up current weather and the next days
  ?<text>     suggest matching cities
  <n>         pick suggestion n, or expand forecast row n
  :u          toggle °C / °F
  :c  :f      switch to metric / imperial
  :help       show this help
  :q          quit";

pub fn render(state: &AppState) -> String {
    let mut lines: Vec<String> = Vec::new();

    if state.show_help {
        lines.extend(HELP.lines().map(str::to_string));
        lines.push(String::new());
    }

    if state.is_loading() {
        lines.push("Fetching weather...".to_string());
    }
    if let Some(error) = &state.last_error {
        lines.push(format!("{}{error}", shared::warning_prefix(state.icon_mode)));
    }

    if !state.suggestions.is_empty() {
        lines.push("Suggestions".to_string());
        lines.extend(
            state
                .suggestions
                .iter()
                .enumerate()
                .map(|(idx, city)| format!("{}. {}", idx + 1, city.display_name())),
        );
        lines.push(String::new());
    }

    match &state.report {
        Some(report) => {
            lines.push(render_report(
                report,
                state.units,
                state.icon_mode,
                state.expanded_day,
            ));
        }
        None if !state.is_loading() && state.last_error.is_none() => {
            lines.push("Type a city name and press Enter. :help lists commands.".to_string());
            if state.demo {
                lines.push("Demo mode: no API key set, showing sample data.".to_string());
            }
        }
        None => {}
    }

    lines.join("\n")
}

/// Current conditions followed by the daily rows. `expanded` is a 0-based
/// row index.
pub fn render_report(
    report: &WeatherReport,
    units: Units,
    icons: IconMode,
    expanded: Option<usize>,
) -> String {
    let mut lines = current::current_lines(report, units, icons);
    lines.push(String::new());
    lines.extend(daily::daily_lines(report, units, icons, expanded));
    lines.join("\n")
}

pub fn bar_line(span: RangeSpan, width: usize, icons: IconMode) -> String {
    let (track, fill) = match icons {
        IconMode::Emoji => ('─', '█'),
        IconMode::Ascii => ('-', '#'),
    };
    let (start, end) = bar_cells(span, width);
    (0..width)
        .map(|cell| if (start..end).contains(&cell) { fill } else { track })
        .collect()
}
