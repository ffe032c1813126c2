use crate::ui::mvi::Reducer;
use crate::ui::search::categories::CATEGORIES;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::{SearchMode, SearchPhase, SearchRequest, SearchState};

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::SwitchMode => SearchState {
                mode: state.mode.toggled(),
                // Keep the counter so an outcome from the old mode stays stale.
                last_request_id: state.last_request_id,
                ..SearchState::default()
            },
            SearchIntent::Input { ch } => match state.mode {
                SearchMode::Name if !ch.is_control() => {
                    let mut query = state.query;
                    query.push(ch);
                    SearchState {
                        query,
                        validation: None,
                        ..state
                    }
                }
                _ => state,
            },
            SearchIntent::Backspace => match state.mode {
                SearchMode::Name => {
                    let mut query = state.query;
                    query.pop();
                    SearchState {
                        query,
                        validation: None,
                        ..state
                    }
                }
                SearchMode::Type => state,
            },
            SearchIntent::Clear => match state.mode {
                SearchMode::Name => SearchState {
                    query: String::new(),
                    validation: None,
                    ..state
                },
                SearchMode::Type => state,
            },
            SearchIntent::NextCategory => match state.mode {
                SearchMode::Type => {
                    let next = match state.category {
                        Some(idx) if idx + 1 < CATEGORIES.len() => idx + 1,
                        _ => 0,
                    };
                    SearchState {
                        category: Some(next),
                        validation: None,
                        ..state
                    }
                }
                SearchMode::Name => state,
            },
            SearchIntent::PreviousCategory => match state.mode {
                SearchMode::Type => {
                    let previous = match state.category {
                        Some(idx) if idx > 0 => idx - 1,
                        _ => CATEGORIES.len() - 1,
                    };
                    SearchState {
                        category: Some(previous),
                        validation: None,
                        ..state
                    }
                }
                SearchMode::Name => state,
            },
            SearchIntent::Submit => {
                // Submit is disabled while a request is outstanding.
                if state.is_loading() {
                    return state;
                }
                match state.normalized_query() {
                    None => SearchState {
                        validation: Some(state.mode.required_message().to_string()),
                        ..state
                    },
                    Some(query) => {
                        let id = state.last_request_id + 1;
                        SearchState {
                            validation: None,
                            phase: SearchPhase::Loading {
                                request: SearchRequest {
                                    id,
                                    mode: state.mode,
                                    query,
                                },
                            },
                            last_request_id: id,
                            ..state
                        }
                    }
                }
            }
            SearchIntent::Resolved { request_id, result } => {
                if state.in_flight().map(|r| r.id) != Some(request_id) {
                    return state;
                }
                SearchState {
                    phase: SearchPhase::Success { result },
                    ..state
                }
            }
            SearchIntent::Rejected { request_id } => {
                let message = match &state.phase {
                    SearchPhase::Loading { request } if request.id == request_id => {
                        request.mode.failure_message(&request.query)
                    }
                    _ => return state,
                };
                SearchState {
                    phase: SearchPhase::Failed { message },
                    ..state
                }
            }
        }
    }
}
