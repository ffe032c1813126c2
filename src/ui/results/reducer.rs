use crate::ui::mvi::Reducer;
use crate::ui::results::intent::ResultsIntent;
use crate::ui::results::state::{detail_failure_message, DetailPhase, DetailRequest, ResultsState};

pub struct ResultsReducer;

impl Reducer for ResultsReducer {
    type State = ResultsState;
    type Intent = ResultsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResultsIntent::MoveUp { len } => {
                if state.shows_detail() || len == 0 {
                    return state;
                }
                let cursor = if state.cursor == 0 || state.cursor >= len {
                    len - 1
                } else {
                    state.cursor - 1
                };
                ResultsState { cursor, ..state }
            }
            ResultsIntent::MoveDown { len } => {
                if state.shows_detail() || len == 0 {
                    return state;
                }
                let cursor = if state.cursor + 1 >= len {
                    0
                } else {
                    state.cursor + 1
                };
                ResultsState { cursor, ..state }
            }
            ResultsIntent::Select { name } => match state.detail {
                // One detail fetch at a time; the table is hidden on success.
                DetailPhase::Loading { .. } | DetailPhase::Success { .. } => state,
                DetailPhase::Idle | DetailPhase::Failed { .. } => {
                    let id = state.last_request_id + 1;
                    ResultsState {
                        detail: DetailPhase::Loading {
                            request: DetailRequest { id, name },
                        },
                        last_request_id: id,
                        ..state
                    }
                }
            },
            ResultsIntent::Loaded { request_id, record } => {
                if state.in_flight().map(|r| r.id) != Some(request_id) {
                    return state;
                }
                ResultsState {
                    detail: DetailPhase::Success { record },
                    scroll: 0,
                    ..state
                }
            }
            ResultsIntent::Failed { request_id } => {
                let name = match &state.detail {
                    DetailPhase::Loading { request } if request.id == request_id => {
                        request.name.clone()
                    }
                    _ => return state,
                };
                ResultsState {
                    detail: DetailPhase::Failed {
                        message: detail_failure_message(&name),
                        name,
                    },
                    ..state
                }
            }
            ResultsIntent::Scroll { delta, max } => {
                let scroll = (i64::from(state.scroll) + i64::from(delta)).clamp(0, i64::from(max));
                ResultsState {
                    scroll: scroll as u16,
                    ..state
                }
            }
            ResultsIntent::Back => match state.detail {
                DetailPhase::Success { .. } | DetailPhase::Failed { .. } => ResultsState {
                    detail: DetailPhase::Idle,
                    scroll: 0,
                    ..state
                },
                DetailPhase::Idle | DetailPhase::Loading { .. } => state,
            },
            ResultsIntent::Reset => ResultsState {
                last_request_id: state.last_request_id,
                ..ResultsState::default()
            },
        }
    }
}
