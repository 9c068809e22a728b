use crate::domain::weather::Units;

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lookup(String),
    Search(String),
    Select(usize),
    ToggleUnits,
    SetUnits(Units),
    Help,
    Quit,
    Empty,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    if let Some(rest) = line.strip_prefix('?') {
        return Command::Search(rest.trim().to_string());
    }
    if let Some(rest) = line.strip_prefix(':') {
        return match rest.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" => Command::Quit,
            "u" | "units" => Command::ToggleUnits,
            "c" | "metric" => Command::SetUnits(Units::Metric),
            "f" | "imperial" => Command::SetUnits(Units::Imperial),
            _ => Command::Help,
        };
    }
    if let Ok(n) = line.parse::<usize>() {
        return Command::Select(n);
    }
    Command::Lookup(line.to_string())
}
