//! Background worker thread for store access.

use crate::backend::{CoreCmd, CoreErrorSource, CoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use entryadmin_core::{config::env_flag_enabled, AppError, EntryStore};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{error, info};

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<CoreCmd>,
    pub evt_rx: Receiver<CoreEvent>,
}

impl BackendHandle {
    /// Build a handle from caller-owned channels.
    ///
    /// Tests keep the other ends to observe commands and inject events.
    pub fn from_test_channels(cmd_tx: Sender<CoreCmd>, evt_rx: Receiver<CoreEvent>) -> Self {
        Self { cmd_tx, evt_rx }
    }
}

fn command_name(cmd: &CoreCmd) -> &'static str {
    match cmd {
        CoreCmd::FetchPage { .. } => "fetch_page",
        CoreCmd::FetchEntry { .. } => "fetch_entry",
        CoreCmd::CreateEntry { .. } => "create_entry",
        CoreCmd::UpdateEntry { .. } => "update_entry",
        CoreCmd::DeleteAll => "delete_all",
        CoreCmd::Populate { .. } => "populate",
        CoreCmd::CheckTextExists { .. } => "check_text_exists",
    }
}

fn failure(source: CoreErrorSource, err: AppError) -> CoreEvent {
    error!("backend {:?} failed: {}", source, err);
    CoreEvent::Error {
        source,
        message: err.to_string(),
    }
}

fn execute(store: &dyn EntryStore, cmd: CoreCmd) -> CoreEvent {
    match cmd {
        CoreCmd::FetchPage { seq, request } => match store.fetch_page(&request) {
            Ok(page) => CoreEvent::PageLoaded { seq, page },
            Err(err) => failure(CoreErrorSource::FetchPage { seq }, err),
        },
        CoreCmd::FetchEntry { id } => match store.fetch_one(id) {
            Ok(entry) => CoreEvent::EntryLoaded { entry },
            Err(err) => failure(CoreErrorSource::FetchEntry { id }, err),
        },
        CoreCmd::CreateEntry { text } => match store.create_one(&text) {
            Ok(entry) => CoreEvent::EntryCreated { entry },
            Err(err) => failure(CoreErrorSource::Create, err),
        },
        CoreCmd::UpdateEntry { entry, origin } => match store.update_one(&entry) {
            Ok(entry) => CoreEvent::EntryUpdated { entry, origin },
            Err(err) => failure(
                CoreErrorSource::Update {
                    id: entry.id,
                    origin,
                },
                err,
            ),
        },
        CoreCmd::DeleteAll => match store.delete_all() {
            Ok(removed) => CoreEvent::AllDeleted { removed },
            Err(err) => failure(CoreErrorSource::DeleteAll, err),
        },
        CoreCmd::Populate { count } => match store.populate(count) {
            Ok(count) => CoreEvent::Populated { count },
            Err(err) => failure(CoreErrorSource::Populate, err),
        },
        CoreCmd::CheckTextExists { seq, text } => match store.text_exists(&text) {
            Ok(exists) => CoreEvent::TextExists { seq, exists },
            Err(err) => failure(CoreErrorSource::ExistsCheck { seq }, err),
        },
    }
}

/// Spawn the backend worker thread that performs blocking store access.
///
/// Commands are executed strictly in order. If the thread cannot be spawned
/// the command channel is closed, so every send from a controller fails and
/// is reported through its normal failure path.
///
/// # Returns
/// A [`BackendHandle`] containing the command sender and event receiver.
pub fn spawn_backend(store: Arc<dyn EntryStore>) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded::<CoreCmd>();
    let (evt_tx, evt_rx) = unbounded();

    let spawned = thread::Builder::new()
        .name("entryadmin-backend".to_string())
        .spawn(move || {
            let perf_log_enabled = env_flag_enabled("ENTRYADMIN_BACKEND_PERF_LOG");
            for cmd in cmd_rx.iter() {
                let op = command_name(&cmd);
                let started = Instant::now();
                let event = execute(store.as_ref(), cmd);
                if perf_log_enabled {
                    info!(
                        target: "entryadmin_admin::backend_perf",
                        op = op,
                        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
                        "backend command perf"
                    );
                }
                if evt_tx.send(event).is_err() {
                    break;
                }
            }
        });
    if let Err(err) = spawned {
        error!("failed to spawn backend worker: {}", err);
    }

    BackendHandle { cmd_tx, evt_rx }
}
