//! Controller tests driven through injected channels and a manual clock.

use super::*;
use crate::backend::{BackendHandle, CoreCmd, CoreErrorSource, CoreEvent, UpdateOrigin};
use chrono::{TimeZone, Utc};
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use entryadmin_core::models::{Entry, EntryId, Page, PageRequest};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

mod toggle_and_bulk;

struct ListHarness {
    app: AdminListController,
    clock: Arc<ManualClock>,
    cmd_rx: Receiver<CoreCmd>,
    evt_tx: Sender<CoreEvent>,
    confirm_answer: Arc<AtomicBool>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ListHarness {
    /// Send `event` to the controller and run one update.
    fn deliver(&mut self, event: CoreEvent) {
        self.evt_tx.send(event).expect("send event");
        self.app.update();
    }

    fn advance(&mut self, by: Duration) {
        self.clock.advance(by);
        self.app.update();
    }

    fn expect_fetch(&self) -> (u64, PageRequest) {
        match recv_cmd(&self.cmd_rx) {
            CoreCmd::FetchPage { seq, request } => (seq, request),
            other => panic!("expected page fetch, got {:?}", other),
        }
    }

    fn assert_no_cmd(&self) {
        assert_no_cmd(&self.cmd_rx);
    }
}

fn recv_cmd(rx: &Receiver<CoreCmd>) -> CoreCmd {
    rx.try_recv().expect("expected a command")
}

fn assert_no_cmd(rx: &Receiver<CoreCmd>) {
    match rx.try_recv() {
        Err(TryRecvError::Empty) => {}
        other => panic!("expected no command, got {:?}", other),
    }
}

fn test_entry(id: EntryId, published: bool) -> Entry {
    let created = Utc
        .with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    Entry {
        id,
        text: format!("Pregunta número {}", id),
        created_at: created,
        modified_at: created + chrono::Duration::hours(id),
        published,
    }
}

fn test_page(content: Vec<Entry>, page_index: usize, total_pages: usize) -> Page<Entry> {
    let page_size = 5;
    Page {
        total_elements: if total_pages == 0 {
            0
        } else {
            (total_pages - 1) * page_size + content.len().max(1)
        },
        content,
        page_index,
        page_size,
        total_pages,
    }
}

/// Controller with its initial fetch still unanswered.
fn make_list_pending() -> ListHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();
    let clock = Arc::new(ManualClock::new());
    let confirm_answer = Arc::new(AtomicBool::new(true));
    let prompts = Arc::new(Mutex::new(Vec::new()));
    let gate = {
        let answer = confirm_answer.clone();
        let prompts = prompts.clone();
        move |prompt: &str| {
            prompts.lock().expect("prompts lock").push(prompt.to_string());
            answer.load(Ordering::SeqCst)
        }
    };
    let app = AdminListController::new(
        BackendHandle::from_test_channels(cmd_tx, evt_rx),
        clock.clone(),
        Box::new(gate),
        ControllerSettings::default(),
    );
    ListHarness {
        app,
        clock,
        cmd_rx,
        evt_tx,
        confirm_answer,
        prompts,
    }
}

/// Controller showing entries 1..=3 (only 2 published) on a single page.
fn make_list() -> ListHarness {
    let mut harness = make_list_pending();
    let (seq, _) = harness.expect_fetch();
    harness.deliver(CoreEvent::PageLoaded {
        seq,
        page: test_page(
            vec![test_entry(1, false), test_entry(2, true), test_entry(3, false)],
            0,
            1,
        ),
    });
    harness.assert_no_cmd();
    harness
}

fn published_flags(app: &AdminListController) -> Vec<(EntryId, bool)> {
    app.entries()
        .iter()
        .map(|entry| (entry.id, entry.published))
        .collect()
}

fn toast_text(toast: Option<&Toast>) -> Option<(&str, ToastKind)> {
    toast.map(|toast| (toast.message.as_str(), toast.kind))
}

struct EditHarness {
    app: AdminEditController,
    cmd_rx: Receiver<CoreCmd>,
    evt_tx: Sender<CoreEvent>,
    routes: Arc<Mutex<Vec<Route>>>,
}

impl EditHarness {
    fn deliver(&mut self, event: CoreEvent) {
        self.evt_tx.send(event).expect("send event");
        self.app.update();
    }

    fn routes(&self) -> Vec<Route> {
        self.routes.lock().expect("routes lock").clone()
    }
}

fn make_edit(route_id: Option<&str>) -> EditHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();
    let routes = Arc::new(Mutex::new(Vec::new()));
    let navigator = {
        let routes = routes.clone();
        move |route: Route| routes.lock().expect("routes lock").push(route)
    };
    let app = AdminEditController::open(
        BackendHandle::from_test_channels(cmd_tx, evt_rx),
        Box::new(navigator),
        route_id,
    );
    EditHarness {
        app,
        cmd_rx,
        evt_tx,
        routes,
    }
}

struct SubmissionHarness {
    app: SubmissionController,
    clock: Arc<ManualClock>,
    cmd_rx: Receiver<CoreCmd>,
    evt_tx: Sender<CoreEvent>,
    dismissals: Arc<AtomicUsize>,
    routes: Arc<Mutex<Vec<Route>>>,
}

impl SubmissionHarness {
    fn deliver(&mut self, event: CoreEvent) {
        self.evt_tx.send(event).expect("send event");
        self.app.update();
    }

    fn advance(&mut self, by: Duration) {
        self.clock.advance(by);
        self.app.update();
    }

    fn expect_exists_check(&self) -> (u64, String) {
        match recv_cmd(&self.cmd_rx) {
            CoreCmd::CheckTextExists { seq, text } => (seq, text),
            other => panic!("expected duplicate check, got {:?}", other),
        }
    }

    fn routes(&self) -> Vec<Route> {
        self.routes.lock().expect("routes lock").clone()
    }
}

fn make_submission() -> SubmissionHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();
    let clock = Arc::new(ManualClock::new());
    let dismissals = Arc::new(AtomicUsize::new(0));
    let routes = Arc::new(Mutex::new(Vec::new()));
    let dialog = {
        let dismissals = dismissals.clone();
        move || {
            dismissals.fetch_add(1, Ordering::SeqCst);
        }
    };
    let navigator = {
        let routes = routes.clone();
        move |route: Route| routes.lock().expect("routes lock").push(route)
    };
    let app = SubmissionController::new(
        BackendHandle::from_test_channels(cmd_tx, evt_rx),
        clock.clone(),
        Box::new(dialog),
        Box::new(navigator),
        ControllerSettings::default(),
    );
    SubmissionHarness {
        app,
        clock,
        cmd_rx,
        evt_tx,
        dismissals,
        routes,
    }
}
