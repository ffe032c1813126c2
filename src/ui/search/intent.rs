use crate::ui::mvi::Intent;
use crate::ui::search::state::SearchResult;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Flip between name and type search. Resets everything else.
    SwitchMode,
    /// Append a character to the name field.
    Input { ch: char },
    Backspace,
    /// Empty the name field.
    Clear,
    /// Step the category selector forward, wrapping.
    NextCategory,
    /// Step the category selector backward, wrapping.
    PreviousCategory,
    /// Validate and, if the query is non-empty, start loading.
    Submit,
    /// Fetch for `request_id` succeeded.
    Resolved {
        request_id: u64,
        result: SearchResult,
    },
    /// Fetch for `request_id` failed.
    Rejected { request_id: u64 },
}

impl Intent for SearchIntent {}
