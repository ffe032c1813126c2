//! Search form controller: mode toggle, query field, category selector
//! and the `Idle → Loading → Success | Failed` request machine.

mod categories;
mod intent;
mod reducer;
mod state;

pub use categories::{category_label, CATEGORIES};
pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{SearchMode, SearchPhase, SearchRequest, SearchResult, SearchState};
