use super::*;

impl AppState {
    /// Starts a lookup for `text`. Clears the previous error, suggestion
    /// list and open detail row; the previous report stays until a result
    /// arrives.
    pub(crate) fn submit(&mut self, text: &str, tx: &mpsc::Sender<AppEvent>) {
        let query = text.trim();
        if query.is_empty() {
            return;
        }
        self.query = query.to_string();
        self.last_error = None;
        self.expanded_day = None;
        self.clear_suggestions();
        self.lookups_in_flight += 1;
        info!(query, "lookup started");
        spawn_lookup(tx.clone(), self.provider.clone(), query.to_string());
    }

    /// Schedules a debounced suggestion search, superseding any earlier one.
    pub(crate) fn search(&mut self, text: &str, tx: &mpsc::Sender<AppEvent>) {
        self.query = text.to_string();
        let generation = self.search.supersede();
        let task = spawn_suggestion_search(
            tx.clone(),
            self.provider.clone(),
            text.to_string(),
            generation,
            self.debounce,
        );
        self.search.attach(task);
    }

    /// Picks a suggestion when the list is showing, otherwise toggles the
    /// matching forecast row.
    pub(crate) fn select(&mut self, n: usize, tx: &mpsc::Sender<AppEvent>) {
        if self.suggestions.is_empty() {
            self.toggle_day(n);
            return;
        }
        let Some(city) = n
            .checked_sub(1)
            .and_then(|idx| self.suggestions.get(idx))
            .cloned()
        else {
            return;
        };
        self.submit(&city.lookup_query(), tx);
        self.query = city.name;
    }

    fn clear_suggestions(&mut self) {
        self.search.cancel();
        self.suggestions.clear();
    }
}
