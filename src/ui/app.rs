use crate::api::{ApiError, Pokemon};
use crate::ui::mvi::Reducer;
use crate::ui::presenter::record_card;
use crate::ui::results::{ResultsIntent, ResultsReducer, ResultsState};
use crate::ui::search::{SearchIntent, SearchMode, SearchReducer, SearchResult, SearchState};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Form,
    Results,
}

/// Fetch work requested by the UI; executed off the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    SearchByName { request_id: u64, name: String },
    SearchByType { request_id: u64, category: String },
    LoadDetail { request_id: u64, name: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Search form state (MVI pattern).
    search: SearchState,
    /// Reference table and detail sub-machine (MVI pattern).
    results: ResultsState,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
    /// Why the UI stopped on its own, reported once the terminal is restored.
    exit_error: Option<String>,
    animation_tick: u8,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Form,
            search: SearchState::default(),
            results: ResultsState::default(),
            command_sender: None,
            last_command_error: None,
            exit_error: None,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Quit because the UI can no longer run.
    pub fn abort(&mut self, reason: String) {
        self.exit_error = Some(reason);
        self.should_quit = true;
    }

    pub fn exit_error(&self) -> Option<&str> {
        self.exit_error.as_deref()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Results only take focus while a table or a record is on screen.
    pub fn toggle_focus(&mut self) {
        let has_results = self.search.references().is_some() || self.search.record().is_some();
        self.focus = match self.focus {
            Focus::Form if has_results => Focus::Results,
            _ => Focus::Form,
        };
    }

    /// The record card in the results area, if one is showing, and whether
    /// it sits under a reference table.
    pub fn visible_record(&self) -> Option<(&Pokemon, bool)> {
        match self.search.record() {
            Some(record) => Some((record, false)),
            None => self.results.record().map(|record| (record, true)),
        }
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn results(&self) -> &ResultsState {
        &self.results
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn on_tick(&mut self) {
        if self.search.is_loading() || self.results.is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    // ========================================================================
    // Search form (MVI pattern)
    // ========================================================================

    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
    }

    pub fn switch_mode(&mut self) {
        self.dispatch_search(SearchIntent::SwitchMode);
        self.dispatch_results(ResultsIntent::Reset);
        self.focus = Focus::Form;
        tracing::debug!(mode = ?self.search.mode, "Search mode switched");
    }

    /// Validate the form and, if a new request came out of it, issue
    /// exactly one fetch for it.
    pub fn submit(&mut self) {
        let before = self.search.in_flight().map(|r| r.id);
        self.dispatch_search(SearchIntent::Submit);

        let Some(request) = self.search.in_flight().cloned() else {
            return;
        };
        if Some(request.id) == before {
            return;
        }

        self.dispatch_results(ResultsIntent::Reset);
        tracing::info!(
            request_id = request.id,
            mode = ?request.mode,
            query = %request.query,
            "Search submitted"
        );
        let command = match request.mode {
            SearchMode::Name => UiCommand::SearchByName {
                request_id: request.id,
                name: request.query,
            },
            SearchMode::Type => UiCommand::SearchByType {
                request_id: request.id,
                category: request.query,
            },
        };
        if !self.send_command(command) {
            self.dispatch_search(SearchIntent::Rejected {
                request_id: request.id,
            });
        }
    }

    pub fn on_search_resolved(&mut self, request_id: u64, outcome: Result<SearchResult, ApiError>) {
        if self.search.in_flight().map(|r| r.id) != Some(request_id) {
            tracing::debug!(request_id, ok = outcome.is_ok(), "Dropped stale search outcome");
            return;
        }
        match outcome {
            Ok(result) => {
                let is_list = matches!(result, SearchResult::References(_));
                self.dispatch_search(SearchIntent::Resolved { request_id, result });
                self.dispatch_results(ResultsIntent::Reset);
                self.focus = if is_list { Focus::Results } else { Focus::Form };
            }
            Err(err) => {
                tracing::warn!(request_id, kind = err.kind(), error = %err, "Search failed");
                self.dispatch_search(SearchIntent::Rejected { request_id });
            }
        }
    }

    // ========================================================================
    // Reference table and detail view (MVI pattern)
    // ========================================================================

    pub fn dispatch_results(&mut self, intent: ResultsIntent) {
        dispatch_mvi!(self, results, ResultsReducer, intent);
    }

    /// Move the table cursor, or scroll the record card when one is shown.
    pub fn move_selection(&mut self, direction: i32) {
        if self.visible_record().is_some() {
            self.scroll_record(direction);
            return;
        }
        let len = self.search.references().map_or(0, <[_]>::len);
        let intent = if direction.is_negative() {
            ResultsIntent::MoveUp { len }
        } else {
            ResultsIntent::MoveDown { len }
        };
        self.dispatch_results(intent);
    }

    pub fn scroll_record(&mut self, delta: i32) {
        let Some((record, with_back)) = self.visible_record() else {
            return;
        };
        let lines = record_card(record, with_back).len();
        let max = u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX);
        self.dispatch_results(ResultsIntent::Scroll { delta, max });
    }

    /// Open the row under the cursor with a detail fetch.
    pub fn open_selected(&mut self) {
        let Some(name) = self
            .search
            .references()
            .and_then(|refs| refs.get(self.results.cursor))
            .map(|reference| reference.name.clone())
        else {
            return;
        };

        let before = self.results.in_flight().map(|r| r.id);
        self.dispatch_results(ResultsIntent::Select { name });
        let Some(request) = self.results.in_flight().cloned() else {
            return;
        };
        if Some(request.id) == before {
            return;
        }

        tracing::info!(request_id = request.id, name = %request.name, "Detail requested");
        let sent = self.send_command(UiCommand::LoadDetail {
            request_id: request.id,
            name: request.name,
        });
        if !sent {
            self.dispatch_results(ResultsIntent::Failed {
                request_id: request.id,
            });
        }
    }

    pub fn on_detail_resolved(&mut self, request_id: u64, outcome: Result<Pokemon, ApiError>) {
        if self.results.in_flight().map(|r| r.id) != Some(request_id) {
            tracing::debug!(request_id, ok = outcome.is_ok(), "Dropped stale detail outcome");
            return;
        }
        match outcome {
            Ok(record) => self.dispatch_results(ResultsIntent::Loaded {
                request_id,
                record: Box::new(record),
            }),
            Err(err) => {
                tracing::warn!(request_id, kind = err.kind(), error = %err, "Detail fetch failed");
                self.dispatch_results(ResultsIntent::Failed { request_id });
            }
        }
    }

    /// Leave the detail view; the table comes back as it was. A record
    /// from a name search has no table behind it, so focus returns to the
    /// form instead.
    pub fn back_to_list(&mut self) {
        if self.search.record().is_some() {
            self.focus = Focus::Form;
            return;
        }
        self.dispatch_results(ResultsIntent::Back);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            self.last_command_error = Some("Fetch worker is not running".to_string());
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to queue fetch");
                self.last_command_error = Some(format!("Fetch queue error: {}", err));
                false
            }
        }
    }
}
