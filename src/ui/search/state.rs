use crate::api::{CategoryReference, Pokemon};
use crate::ui::mvi::UiState;
use crate::ui::search::categories::CATEGORIES;

/// Which lookup the form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Name,
    Type,
}

impl SearchMode {
    pub fn toggled(self) -> Self {
        match self {
            SearchMode::Name => SearchMode::Type,
            SearchMode::Type => SearchMode::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Name => "Search by Name",
            SearchMode::Type => "Search by Type",
        }
    }

    /// Field-level message shown when submitting an empty query.
    pub fn required_message(self) -> &'static str {
        match self {
            SearchMode::Name => "Name is required",
            SearchMode::Type => "Type is required",
        }
    }

    /// Banner text for a failed lookup. Every failure cause gets the same
    /// wording; the real cause only goes to the log.
    pub fn failure_message(self, query: &str) -> String {
        match self {
            SearchMode::Name => {
                "Pokemon not found. Please check the name and try again.".to_string()
            }
            SearchMode::Type => format!("No Pokemon found for type: {}", query),
        }
    }
}

/// A validated submission waiting for its fetch to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Monotonic per form; outcomes carrying any other id are stale.
    pub id: u64,
    pub mode: SearchMode,
    /// Lower-cased and trimmed.
    pub query: String,
}

/// Payload of a successful lookup. One variant per mode, so a record and a
/// reference list can never be shown together.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Record(Box<Pokemon>),
    References(Vec<CategoryReference>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading {
        request: SearchRequest,
    },
    Success {
        result: SearchResult,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub mode: SearchMode,
    /// Name field contents, as typed.
    pub query: String,
    /// Index into [`CATEGORIES`]; `None` until the user picks one.
    pub category: Option<usize>,
    /// Inline message under the field after an empty submit.
    pub validation: Option<String>,
    pub phase: SearchPhase,
    /// Id of the most recent request issued from this form.
    pub last_request_id: u64,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading { .. })
    }

    pub fn in_flight(&self) -> Option<&SearchRequest> {
        match &self.phase {
            SearchPhase::Loading { request } => Some(request),
            _ => None,
        }
    }

    pub fn selected_category(&self) -> Option<&'static str> {
        self.category.and_then(|idx| CATEGORIES.get(idx).copied())
    }

    /// The query as it would be sent, or `None` if the field is empty.
    pub fn normalized_query(&self) -> Option<String> {
        match self.mode {
            SearchMode::Name => {
                let query = self.query.trim().to_lowercase();
                (!query.is_empty()).then_some(query)
            }
            SearchMode::Type => self.selected_category().map(str::to_string),
        }
    }

    pub fn record(&self) -> Option<&Pokemon> {
        match &self.phase {
            SearchPhase::Success {
                result: SearchResult::Record(record),
            } => Some(record),
            _ => None,
        }
    }

    pub fn references(&self) -> Option<&[CategoryReference]> {
        match &self.phase {
            SearchPhase::Success {
                result: SearchResult::References(references),
            } => Some(references),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Failed { message } => Some(message),
            _ => None,
        }
    }
}
