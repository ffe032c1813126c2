use crate::api::Pokemon;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ResultsIntent {
    /// Move the table cursor up, wrapping over `len` rows.
    MoveUp { len: usize },
    /// Move the table cursor down, wrapping over `len` rows.
    MoveDown { len: usize },
    /// Open the row named `name`: starts exactly one detail fetch.
    Select { name: String },
    Loaded {
        request_id: u64,
        record: Box<Pokemon>,
    },
    Failed { request_id: u64 },
    /// Scroll the record card by `delta` lines, clamped to `0..=max`.
    Scroll { delta: i32, max: u16 },
    /// Leave the record view and show the table again. No refetch.
    Back,
    /// A new list arrived or the mode changed.
    Reset,
}

impl Intent for ResultsIntent {}
