use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle, time::sleep};
use tracing::debug;

use crate::{
    app::state::Command,
    data::{LookupError, Provider},
    domain::weather::{CitySuggestion, WeatherReport},
};

/// Quiet period between the last keystroke and the suggestion request.
pub const SUGGESTION_DEBOUNCE: Duration = Duration::from_millis(220);

#[derive(Debug)]
pub enum AppEvent {
    Command(Command),
    LookupFinished {
        query: String,
        result: Result<WeatherReport, LookupError>,
    },
    SuggestionsReady {
        generation: u64,
        suggestions: Vec<CitySuggestion>,
    },
}

/// Fire-and-forget lookup. The result always comes back as an event.
pub fn spawn_lookup(tx: mpsc::Sender<AppEvent>, provider: Provider, query: String) {
    tokio::spawn(async move {
        let result = provider.lookup(&query).await;
        let _ = tx.send(AppEvent::LookupFinished { query, result }).await;
    });
}

/// Debounced suggestion search tagged with `generation`; abort the handle to
/// drop it before it reports.
pub fn spawn_suggestion_search(
    tx: mpsc::Sender<AppEvent>,
    provider: Provider,
    query: String,
    generation: u64,
    debounce: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        sleep(debounce).await;
        let suggestions = provider.suggest(&query).await;
        debug!(generation, count = suggestions.len(), "suggestion search finished");
        let _ = tx
            .send(AppEvent::SuggestionsReady {
                generation,
                suggestions,
            })
            .await;
    })
}
