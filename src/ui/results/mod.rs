//! Reference-list view: table cursor plus the detail fetch sub-machine
//! started by selecting a row.

mod intent;
mod reducer;
mod state;

pub use intent::ResultsIntent;
pub use reducer::ResultsReducer;
pub use state::{DetailPhase, DetailRequest, ResultsState};
