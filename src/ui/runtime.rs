use crate::api::PokemonApi;
use crate::config::UiConfig;
use crate::fetch::{spawn_fetch_worker, COMMAND_QUEUE_DEPTH};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Apply one event to the app. Split out of the loop so flows can be driven
/// without a terminal.
pub fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        // The next draw picks up the new size
        AppEvent::Resize(_, _) => {}
        // No key can arrive after this
        AppEvent::InputFailed { message } => {
            tracing::error!(%message, "Input stopped, shutting down");
            app.abort(message);
        }
        AppEvent::SearchResolved {
            request_id,
            outcome,
        } => app.on_search_resolved(request_id, outcome),
        AppEvent::DetailResolved {
            request_id,
            outcome,
        } => app.on_detail_resolved(request_id, outcome),
    }
}

/// Run the search screen until the user quits. Blocks the calling thread;
/// fetches run on `runtime`.
pub fn run(ui_config: &UiConfig, api: Arc<dyn PokemonApi>, runtime: &Handle) -> io::Result<()> {
    let tick_rate = Duration::from_millis(ui_config.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    let worker = spawn_fetch_worker(runtime, api, command_rx, events.sender());

    let mut app = App::new();
    app.set_command_sender(command_tx);
    tracing::info!("Search UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app closes the command channel; in-flight fetches are
    // abandoned rather than awaited.
    let exit_error = app.exit_error().map(str::to_string);
    drop(app);
    worker.abort();
    drop(guard);
    tracing::info!("Search UI stopped");
    match exit_error {
        Some(message) => Err(io::Error::other(message)),
        None => Ok(()),
    }
}
