//! Optimistic publication toggles, populate, and clear-all.

use super::*;
use entryadmin_core::models::PublicationFilter;

fn expect_toggle_update(harness: &ListHarness) -> Entry {
    match recv_cmd(&harness.cmd_rx) {
        CoreCmd::UpdateEntry {
            entry,
            origin: UpdateOrigin::Toggle,
        } => entry,
        other => panic!("expected toggle update, got {:?}", other),
    }
}

#[test]
fn toggle_flips_immediately_and_refreshes_on_success() {
    let mut harness = make_list();
    assert!(harness.app.toggle_publication(1));
    assert_eq!(
        published_flags(&harness.app),
        vec![(1, true), (2, true), (3, false)]
    );
    let sent = expect_toggle_update(&harness);
    let original = test_entry(1, false);
    assert!(sent.published);
    assert_eq!(sent.text, original.text);
    assert_eq!(sent.created_at, original.created_at);
    assert_eq!(sent.modified_at, original.modified_at);
    assert!(harness.app.is_toggle_pending(1));

    harness.deliver(CoreEvent::EntryUpdated {
        entry: sent,
        origin: UpdateOrigin::Toggle,
    });
    assert!(!harness.app.is_toggle_pending(1));
    assert_eq!(
        toast_text(harness.app.toast()),
        Some(("Pregunta publicada correctamente", ToastKind::Success))
    );
    harness.expect_fetch();
}

#[test]
fn unpublish_success_uses_unpublish_message() {
    let mut harness = make_list();
    assert!(harness.app.toggle_publication(2));
    let sent = expect_toggle_update(&harness);
    assert!(!sent.published);
    harness.deliver(CoreEvent::EntryUpdated {
        entry: sent,
        origin: UpdateOrigin::Toggle,
    });
    assert_eq!(
        toast_text(harness.app.toast()),
        Some(("Pregunta despublicada correctamente", ToastKind::Success))
    );
}

#[test]
fn failed_toggle_restores_prior_value_without_refetch() {
    let mut harness = make_list();
    harness.app.toggle_publication(3);
    expect_toggle_update(&harness);
    harness.deliver(CoreEvent::Error {
        source: CoreErrorSource::Update {
            id: 3,
            origin: UpdateOrigin::Toggle,
        },
        message: "Internal server error".to_string(),
    });

    assert_eq!(
        published_flags(&harness.app),
        vec![(1, false), (2, true), (3, false)]
    );
    assert_eq!(
        toast_text(harness.app.toast()),
        Some(("Error al actualizar la publicación", ToastKind::Error))
    );
    harness.assert_no_cmd();
}

#[test]
fn second_toggle_while_in_flight_is_ignored() {
    let mut harness = make_list();
    assert!(harness.app.toggle_publication(1));
    expect_toggle_update(&harness);
    assert!(!harness.app.toggle_publication(1));
    harness.assert_no_cmd();
    assert_eq!(published_flags(&harness.app)[0], (1, true));

    assert!(!harness.app.toggle_publication(42));
    harness.assert_no_cmd();
}

#[test]
fn in_flight_toggle_survives_a_page_reload() {
    let mut harness = make_list();
    harness.app.toggle_publication(1);
    expect_toggle_update(&harness);
    harness.app.refresh();
    let (seq, _) = harness.expect_fetch();
    harness.deliver(CoreEvent::PageLoaded {
        seq,
        page: test_page(vec![test_entry(1, false), test_entry(2, true)], 0, 1),
    });
    assert_eq!(published_flags(&harness.app), vec![(1, true), (2, true)]);

    harness.deliver(CoreEvent::Error {
        source: CoreErrorSource::Update {
            id: 1,
            origin: UpdateOrigin::Toggle,
        },
        message: "conflict".to_string(),
    });
    assert_eq!(published_flags(&harness.app), vec![(1, false), (2, true)]);
}

#[test]
fn failed_unpublish_reverts_after_reload_in_published_only_view() {
    let mut harness = make_list();
    harness
        .app
        .set_publication_filter(PublicationFilter::PublishedOnly);
    let (seq, _) = harness.expect_fetch();
    let server_page = || test_page(vec![test_entry(1, false), test_entry(2, true)], 0, 1);
    harness.deliver(CoreEvent::PageLoaded {
        seq,
        page: server_page(),
    });
    assert_eq!(published_flags(&harness.app), vec![(2, true)]);

    assert!(harness.app.toggle_publication(2));
    expect_toggle_update(&harness);
    harness.app.refresh();
    let (seq, _) = harness.expect_fetch();
    harness.deliver(CoreEvent::PageLoaded {
        seq,
        page: server_page(),
    });
    assert_eq!(published_flags(&harness.app), vec![(2, false)]);

    harness.deliver(CoreEvent::Error {
        source: CoreErrorSource::Update {
            id: 2,
            origin: UpdateOrigin::Toggle,
        },
        message: "conflict".to_string(),
    });
    assert_eq!(published_flags(&harness.app), vec![(2, true)]);
}

#[test]
fn edit_updates_are_not_treated_as_toggles() {
    let mut harness = make_list();
    harness.deliver(CoreEvent::EntryUpdated {
        entry: test_entry(1, true),
        origin: UpdateOrigin::Edit,
    });
    assert!(harness.app.toast().is_none());
    harness.assert_no_cmd();
}

#[test]
fn populate_success_reports_count_and_refreshes() {
    let mut harness = make_list();
    assert!(harness.app.populate(10));
    assert!(harness.app.bulk().populating);
    assert!(matches!(
        recv_cmd(&harness.cmd_rx),
        CoreCmd::Populate { count: 10 }
    ));
    assert!(!harness.app.populate(5));
    harness.assert_no_cmd();

    harness.deliver(CoreEvent::Populated { count: 10 });
    assert!(!harness.app.bulk().populating);
    assert_eq!(harness.app.bulk().populated, Some(10));
    assert_eq!(
        toast_text(harness.app.toast()),
        Some(("10 frases generadas correctamente", ToastKind::Success))
    );
    let (seq, _) = harness.expect_fetch();
    harness.deliver(CoreEvent::PageLoaded {
        seq,
        page: test_page(vec![test_entry(1, false)], 0, 3),
    });
    assert_eq!(harness.app.bulk().populated, None);
}

#[test]
fn populate_failure_records_error_without_refresh() {
    let mut harness = make_list();
    harness.app.populate(10);
    recv_cmd(&harness.cmd_rx);
    harness.deliver(CoreEvent::Error {
        source: CoreErrorSource::Populate,
        message: "Internal server error".to_string(),
    });
    let bulk = harness.app.bulk();
    assert!(!bulk.populating);
    assert_eq!(
        bulk.populate_error.as_deref(),
        Some("Error generando datos fake")
    );
    assert_eq!(
        toast_text(harness.app.toast()),
        Some(("Error generando frases", ToastKind::Error))
    );
    harness.assert_no_cmd();
}

#[test]
fn populate_selected_uses_bound_count() {
    let mut harness = make_list();
    assert_eq!(harness.app.populate_count(), 10);
    harness.app.set_populate_count(25);
    assert!(harness.app.populate_selected());
    assert!(matches!(
        recv_cmd(&harness.cmd_rx),
        CoreCmd::Populate { count: 25 }
    ));
}

#[test]
fn declined_clear_all_does_nothing() {
    let mut harness = make_list();
    harness.confirm_answer.store(false, Ordering::SeqCst);
    assert!(!harness.app.clear_all());
    harness.assert_no_cmd();
    assert!(harness.app.toast().is_none());
    assert_eq!(
        *harness.prompts.lock().expect("prompts lock"),
        vec!["¿Estás seguro de que deseas vaciar todas las preguntas?".to_string()]
    );
}

#[test]
fn confirmed_clear_all_deletes_and_refreshes() {
    let mut harness = make_list();
    assert!(harness.app.clear_all());
    assert!(harness.app.bulk().clearing);
    assert!(matches!(recv_cmd(&harness.cmd_rx), CoreCmd::DeleteAll));

    harness.deliver(CoreEvent::AllDeleted { removed: 3 });
    assert!(!harness.app.bulk().clearing);
    assert_eq!(
        toast_text(harness.app.toast()),
        Some(("Todas las preguntas han sido eliminadas", ToastKind::Success))
    );
    harness.expect_fetch();
}

#[test]
fn clear_all_failure_keeps_rows() {
    let mut harness = make_list();
    harness.app.clear_all();
    recv_cmd(&harness.cmd_rx);
    harness.deliver(CoreEvent::Error {
        source: CoreErrorSource::DeleteAll,
        message: "Storage error: disk full".to_string(),
    });
    assert_eq!(harness.app.entries().len(), 3);
    assert_eq!(
        toast_text(harness.app.toast()),
        Some(("Error al vaciar las preguntas", ToastKind::Error))
    );
    harness.assert_no_cmd();
}
