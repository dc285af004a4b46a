//! Console driver for the entry admin controllers over an in-memory store.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use entryadmin_admin::app::{
    AdminEditController, AdminListController, ControllerSettings, EditPhase, Route,
    SubmissionController, SystemClock, Toast,
};
use entryadmin_admin::spawn_backend;
use entryadmin_core::models::{PublicationFilter, SortField};
use entryadmin_core::pagination::PageLink;
use entryadmin_core::{Config, EntryStore, MemoryStore};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DRIVE_TIMEOUT: Duration = Duration::from_secs(10);
const IDLE_POLL: Duration = Duration::from_millis(10);

#[derive(Parser)]
#[command(name = "entryadmin", about = "Entry admin console", version)]
struct Cli {
    /// Fake entries generated before running the command.
    #[arg(long, global = true, env = "ENTRYADMIN_POPULATE_COUNT")]
    populate: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of the admin list, optionally after some actions.
    List {
        #[arg(long)]
        page_size: Option<usize>,
        /// Sort column; repeat to flip the direction.
        #[arg(long)]
        sort: Vec<SortField>,
        #[arg(long)]
        search: Option<String>,
        /// all | published | pending
        #[arg(long, default_value = "all")]
        filter: PublicationFilter,
        /// Zero-based page index.
        #[arg(long, default_value_t = 0)]
        page: usize,
        /// Toggle publication of an entry on the shown page.
        #[arg(long)]
        toggle: Vec<i64>,
        /// Delete every entry first.
        #[arg(long)]
        clear: bool,
        /// Answer yes to the clear-all confirmation.
        #[arg(long)]
        yes: bool,
        #[arg(long)]
        json: bool,
    },
    /// Replace the text of one entry.
    Edit { id: String, text: String },
    /// Submit a new entry for approval.
    Submit { text: String },
}

fn main() -> Result<()> {
    let config = Config::from_env();
    let default_filter = if config.verbose {
        "entryadmin=debug,entryadmin_admin=debug,entryadmin_core=debug"
    } else {
        "entryadmin=info,entryadmin_admin=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(?config, "loaded configuration");
    let settings = ControllerSettings::from(&config);
    let store = Arc::new(MemoryStore::new(config.seed));
    let populate = cli.populate.unwrap_or(config.populate_count);

    match cli.command {
        Commands::List {
            page_size,
            sort,
            search,
            filter,
            page,
            toggle,
            clear,
            yes,
            json,
        } => {
            let mut list = AdminListController::new(
                spawn_backend(store),
                Arc::new(SystemClock),
                Box::new(move |prompt: &str| {
                    eprintln!("{} {}", prompt, if yes { "[yes]" } else { "[no]" });
                    yes
                }),
                settings,
            );
            settle_list(&mut list)?;
            if clear {
                list.clear_all();
                settle_list(&mut list)?;
            }
            if populate > 0 {
                list.set_populate_count(populate);
                list.populate_selected();
                settle_list(&mut list)?;
            }
            if let Some(size) = page_size {
                if !list.set_page_size(size) {
                    bail!("page size {} is not offered", size);
                }
            }
            for field in sort {
                list.set_sort(field);
            }
            list.set_publication_filter(filter);
            if let Some(text) = search {
                list.set_free_text(text);
            }
            settle_list(&mut list)?;
            if page > 0 {
                list.set_page(page);
                settle_list(&mut list)?;
            }
            for id in toggle {
                list.toggle_publication(id);
                settle_list(&mut list)?;
            }
            print_toast(list.toast());
            if json {
                println!("{}", serde_json::to_string_pretty(&list.page())?);
            } else {
                print_list(&list);
            }
        }
        Commands::Edit { id, text } => {
            store.populate(populate)?;
            let mut edit = AdminEditController::open(
                spawn_backend(store.clone()),
                Box::new(|route: Route| eprintln!("-> {:?}", route)),
                Some(&id),
            );
            drive(
                &mut edit,
                AdminEditController::update,
                |edit| !matches!(edit.phase(), EditPhase::Loading),
                |_| None,
            )?;
            if let EditPhase::Failed(message) = edit.phase() {
                bail!("{}", message);
            }
            edit.set_text(text);
            if !edit.submit() {
                if let Some(err) = edit.visible_validation_error() {
                    bail!("{}", err);
                }
                bail!("{}", edit.error().unwrap_or("cannot submit"));
            }
            drive(
                &mut edit,
                AdminEditController::update,
                |edit| !matches!(edit.phase(), EditPhase::Submitting),
                |_| None,
            )?;
            if let Some(message) = edit.error() {
                bail!("{}", message);
            }
            if let Some(id) = edit.entry_id() {
                let saved = store.fetch_one(id)?;
                println!("{}", serde_json::to_string_pretty(&saved)?);
            }
        }
        Commands::Submit { text } => {
            store.populate(populate)?;
            let routes = Arc::new(Mutex::new(Vec::new()));
            let navigator = {
                let routes = routes.clone();
                move |route: Route| {
                    if let Ok(mut routes) = routes.lock() {
                        routes.push(route);
                    }
                }
            };
            let mut form = SubmissionController::new(
                spawn_backend(store.clone()),
                Arc::new(SystemClock),
                Box::new(|| eprintln!("(dialog closed)")),
                Box::new(navigator),
                settings,
            );
            form.set_text(text);
            drive(
                &mut form,
                SubmissionController::update,
                |form| !form.is_checking(),
                SubmissionController::next_wakeup,
            )?;
            if form.is_duplicate() {
                bail!("an entry with the same text already exists");
            }
            if !form.submit() {
                match form.visible_validation_error() {
                    Some(err) => bail!("{}", err),
                    None => bail!("cannot submit"),
                }
            }
            drive(
                &mut form,
                SubmissionController::update,
                |form| !form.is_submitting(),
                SubmissionController::next_wakeup,
            )?;
            print_toast(form.toast());
            if !form.is_submitted() {
                bail!("submission failed");
            }
            drive(
                &mut form,
                SubmissionController::update,
                |_| routes.lock().map(|routes| !routes.is_empty()).unwrap_or(true),
                SubmissionController::next_wakeup,
            )?;
            if let Ok(routes) = routes.lock() {
                for route in routes.iter() {
                    eprintln!("-> {:?}", route);
                }
            };
        }
    }
    Ok(())
}

/// Call `update` until `done` holds, sleeping until the next deadline.
fn drive<T>(
    target: &mut T,
    mut update: impl FnMut(&mut T),
    done: impl Fn(&T) -> bool,
    next_wakeup: impl Fn(&T) -> Option<Instant>,
) -> Result<()> {
    let deadline = Instant::now() + DRIVE_TIMEOUT;
    loop {
        update(target);
        if done(target) {
            return Ok(());
        }
        let now = Instant::now();
        if now >= deadline {
            bail!("timed out waiting for the backend");
        }
        let wake = next_wakeup(target)
            .map(|at| at.saturating_duration_since(now))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);
        thread::sleep(wake);
    }
}

fn settle_list(list: &mut AdminListController) -> Result<()> {
    drive(
        list,
        AdminListController::update,
        AdminListController::is_idle,
        AdminListController::next_wakeup,
    )
}

fn print_toast(toast: Option<&Toast>) {
    if let Some(toast) = toast {
        eprintln!("[{:?}] {}", toast.kind, toast.message);
    }
}

fn print_list(list: &AdminListController) {
    let query = list.query();
    let Some(page) = list.page() else {
        println!("(no page loaded)");
        return;
    };
    println!(
        "page {}/{} | {} entries | sort {} {} | filter {:?}",
        query.page_index() + 1,
        page.total_pages.max(1),
        page.total_elements,
        query.sort_field(),
        query.sort_direction(),
        query.publication_filter(),
    );
    for entry in list.entries() {
        println!(
            "{:>5}  {}  {}",
            entry.id,
            if entry.published { "[x]" } else { "[ ]" },
            entry.text
        );
    }
    let links: Vec<String> = list
        .page_links()
        .into_iter()
        .map(|link| match link {
            PageLink::Page(index) if index == query.page_index() => format!("[{}]", index + 1),
            PageLink::Page(index) => (index + 1).to_string(),
            PageLink::Gap => "…".to_string(),
        })
        .collect();
    if !links.is_empty() {
        println!("{}", links.join(" "));
    }
}
