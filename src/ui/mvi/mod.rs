//! Model-View-Intent primitives for the search screen.
//!
//! ```text
//! key press / fetch outcome ──→ Intent ──→ Reducer ──→ State ──→ draw
//!            ↑                                                   │
//!            └───────────────────────────────────────────────────┘
//! ```
//!
//! Reducers never touch the network. The [`App`](crate::ui::app::App)
//! inspects the state a reducer produced and issues fetch commands itself.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
