use crate::ui::app::{App, Focus};
use crate::ui::search::{SearchIntent, SearchMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved by PgUp/PgDn on a record card.
const RECORD_PAGE: i32 = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.switch_mode();
        return;
    }
    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Form => handle_form_key(app, key),
        Focus::Results => handle_results_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.dispatch_search(SearchIntent::Clear);
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.dispatch_search(SearchIntent::Backspace),
        KeyCode::Right | KeyCode::Down if app.search().mode == SearchMode::Type => {
            app.dispatch_search(SearchIntent::NextCategory);
        }
        KeyCode::Left | KeyCode::Up if app.search().mode == SearchMode::Type => {
            app.dispatch_search(SearchIntent::PreviousCategory);
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_search(SearchIntent::Input { ch });
        }
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.scroll_record(-RECORD_PAGE),
        KeyCode::PageDown => app.scroll_record(RECORD_PAGE),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Backspace | KeyCode::Esc | KeyCode::Left => app.back_to_list(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
