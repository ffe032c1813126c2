//! Terminal rendition of the search page: a form, an error banner and the
//! result views, wired together with MVI reducers.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod presenter;
pub mod render;
pub mod results;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod text;
pub mod theme;
