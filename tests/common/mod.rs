//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;
pub mod mock_upstream;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use pokesearch::api::{CategoryReference, Pokemon};
use pokesearch::ui::app::App;
use pokesearch::ui::events::AppEvent;
use pokesearch::ui::runtime::apply_event;

pub const PIKACHU_JSON: &str = include_str!("../fixtures/pikachu.json");
pub const CHARMANDER_JSON: &str = include_str!("../fixtures/charmander.json");
pub const TYPE_FIRE_JSON: &str = include_str!("../fixtures/type_fire.json");

pub fn pikachu() -> Pokemon {
    serde_json::from_str(PIKACHU_JSON).expect("pikachu fixture")
}

pub fn charmander() -> Pokemon {
    serde_json::from_str(CHARMANDER_JSON).expect("charmander fixture")
}

/// The fire type's member list, flattened the way the client returns it.
pub fn fire_references() -> Vec<CategoryReference> {
    let body: serde_json::Value = serde_json::from_str(TYPE_FIRE_JSON).expect("fire fixture");
    body["pokemon"]
        .as_array()
        .expect("pokemon array")
        .iter()
        .map(|member| CategoryReference {
            name: member["pokemon"]["name"].as_str().unwrap().to_string(),
            url: member["pokemon"]["url"].as_str().unwrap().to_string(),
        })
        .collect()
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..press(KeyCode::Char(ch))
    }
}

/// Feed key presses through the same path the terminal loop uses.
pub fn keys(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        apply_event(app, AppEvent::Key(press(*code)));
    }
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        apply_event(app, AppEvent::Key(press(KeyCode::Char(ch))));
    }
}
