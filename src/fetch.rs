//! Fetch worker: turns [`UiCommand`]s into calls on the shared client and
//! posts the outcomes back to the UI loop.
//!
//! Every command runs as its own task, so a slow lookup never blocks the
//! next one. Nothing here orders or cancels requests; the reducers drop
//! outcomes whose request id is no longer current.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::PokemonApi;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;
use crate::ui::search::SearchResult;

/// Queue depth between the UI and the worker. The UI issues at most one
/// command per control, so this is never close to full.
pub const COMMAND_QUEUE_DEPTH: usize = 16;

/// Run one command against the client and wrap the outcome as an event.
pub async fn execute(api: &dyn PokemonApi, command: UiCommand) -> AppEvent {
    match command {
        UiCommand::SearchByName { request_id, name } => AppEvent::SearchResolved {
            request_id,
            outcome: api
                .fetch_by_name(&name)
                .await
                .map(|record| SearchResult::Record(Box::new(record))),
        },
        UiCommand::SearchByType {
            request_id,
            category,
        } => AppEvent::SearchResolved {
            request_id,
            outcome: api
                .fetch_by_type(&category)
                .await
                .map(SearchResult::References),
        },
        UiCommand::LoadDetail { request_id, name } => AppEvent::DetailResolved {
            request_id,
            outcome: api.fetch_by_name(&name).await,
        },
    }
}

/// Spawn the worker loop on `runtime`. It exits when every command sender
/// is dropped.
pub fn spawn_fetch_worker(
    runtime: &Handle,
    api: Arc<dyn PokemonApi>,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        while let Some(command) = commands.recv().await {
            let api = Arc::clone(&api);
            let events = events.clone();
            tokio::spawn(async move {
                let event = execute(api.as_ref(), command).await;
                if events.send(event).is_err() {
                    tracing::trace!("Fetch outcome dropped (UI loop gone)");
                }
            });
        }
        tracing::debug!("Fetch worker stopped");
    })
}
