use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, info};

use crate::{
    app::events::{AppEvent, SUGGESTION_DEBOUNCE, spawn_lookup, spawn_suggestion_search},
    cli::{Cli, IconMode},
    data::{LookupError, Provider},
    domain::weather::{CitySuggestion, Units, WeatherReport},
};

mod input;
mod methods_fetch;

pub use input::{Command, parse_command};

/// Latest autocomplete request. Superseding it aborts the running task and
/// moves the generation on so late results are ignored.
#[derive(Debug, Default)]
pub struct SuggestionSearch {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl SuggestionSearch {
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn supersede(&mut self) -> u64 {
        self.cancel();
        self.generation
    }

    pub fn attach(&mut self, task: JoinHandle<()>) {
        self.task = Some(task);
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub struct AppState {
    pub running: bool,
    pub query: String,
    pub suggestions: Vec<CitySuggestion>,
    pub report: Option<WeatherReport>,
    pub last_error: Option<String>,
    pub units: Units,
    pub icon_mode: IconMode,
    pub expanded_day: Option<usize>,
    pub lookups_in_flight: usize,
    pub show_help: bool,
    pub demo: bool,
    provider: Provider,
    search: SuggestionSearch,
    debounce: Duration,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        Self::with_provider(cli, Provider::from_cli(cli))
    }

    pub fn with_provider(cli: &Cli, provider: Provider) -> Self {
        Self {
            running: true,
            query: String::new(),
            suggestions: Vec::new(),
            report: None,
            last_error: None,
            units: cli.units.into(),
            icon_mode: cli.icon_mode(),
            expanded_day: None,
            lookups_in_flight: 0,
            show_help: false,
            demo: matches!(provider, Provider::Demo),
            provider,
            search: SuggestionSearch::default(),
            debounce: SUGGESTION_DEBOUNCE,
        }
    }

    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn is_loading(&self) -> bool {
        self.lookups_in_flight > 0
    }

    pub fn search_generation(&self) -> u64 {
        self.search.generation()
    }

    pub fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) {
        match event {
            AppEvent::Command(command) => self.handle_command(command, tx),
            AppEvent::LookupFinished { query, result } => {
                self.handle_lookup_finished(&query, result);
            }
            AppEvent::SuggestionsReady {
                generation,
                suggestions,
            } => self.handle_suggestions(generation, suggestions),
        }
    }

    fn handle_command(&mut self, command: Command, tx: &mpsc::Sender<AppEvent>) {
        self.show_help = false;
        match command {
            Command::Lookup(text) => self.submit(&text, tx),
            Command::Search(text) => self.search(&text, tx),
            Command::Select(n) => self.select(n, tx),
            Command::ToggleUnits => self.units = self.units.toggled(),
            Command::SetUnits(units) => self.units = units,
            Command::Help => self.show_help = true,
            Command::Quit => {
                self.search.cancel();
                self.running = false;
            }
            Command::Empty => {}
        }
    }

    /// Every completed lookup is applied; the last one to finish wins.
    pub(crate) fn handle_lookup_finished(
        &mut self,
        query: &str,
        result: Result<WeatherReport, LookupError>,
    ) {
        self.lookups_in_flight = self.lookups_in_flight.saturating_sub(1);
        match result {
            Ok(report) => {
                info!(query, days = report.days.len(), "lookup applied");
                self.report = Some(report);
                self.expanded_day = None;
                self.last_error = None;
            }
            Err(err) => {
                debug!(query, error = ?err, "lookup failed, clearing report");
                self.report = None;
                self.expanded_day = None;
                self.last_error = Some(err.to_string());
            }
        }
    }

    pub(crate) fn handle_suggestions(&mut self, generation: u64, suggestions: Vec<CitySuggestion>) {
        if !self.search.is_current(generation) {
            debug!(generation, "dropping superseded suggestions");
            return;
        }
        self.suggestions = suggestions;
    }

    /// Opens detail row `n` (1-based), or closes it when already open.
    pub fn toggle_day(&mut self, n: usize) {
        let Some(days) = self.report.as_ref().map(|r| r.days.len()) else {
            return;
        };
        let Some(idx) = n.checked_sub(1).filter(|idx| *idx < days) else {
            return;
        };
        self.expanded_day = if self.expanded_day == Some(idx) {
            None
        } else {
            Some(idx)
        };
    }
}
