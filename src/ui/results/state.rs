use crate::api::Pokemon;
use crate::ui::mvi::UiState;

/// Detail fetch for one selected row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailPhase {
    /// Table is showing.
    #[default]
    Idle,
    /// Table is showing with a spinner below it.
    Loading { request: DetailRequest },
    /// Record replaces the table; a back control is offered.
    Success { record: Box<Pokemon> },
    /// Table is showing with an inline failure note.
    Failed { name: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsState {
    /// Highlighted row in the reference table.
    pub cursor: usize,
    pub detail: DetailPhase,
    pub last_request_id: u64,
    /// First visible line of whichever record card is on screen.
    pub scroll: u16,
}

impl UiState for ResultsState {}

impl ResultsState {
    pub fn in_flight(&self) -> Option<&DetailRequest> {
        match &self.detail {
            DetailPhase::Loading { request } => Some(request),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight().is_some()
    }

    pub fn record(&self) -> Option<&Pokemon> {
        match &self.detail {
            DetailPhase::Success { record } => Some(record),
            _ => None,
        }
    }

    /// True while the record view (and its back control) replaces the table.
    pub fn shows_detail(&self) -> bool {
        self.record().is_some()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.detail {
            DetailPhase::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Inline note for a failed detail fetch.
pub(crate) fn detail_failure_message(name: &str) -> String {
    format!("Could not load details for {}.", name)
}
