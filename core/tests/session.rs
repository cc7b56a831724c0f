//! ReactiveSession state machine: Stale/Fresh transitions, cache
//! idempotence, preview paging, and the serialized dashboard boundary.

use explorer_core::catalog::{Category, Status};
use explorer_core::filter::FilterSpecification;
use explorer_core::generator;
use explorer_core::session::{ReactiveSession, SessionState, DEFAULT_PREVIEW_ROWS};
use std::sync::Arc;

fn session_over(rows: i64, seed: u64) -> ReactiveSession {
    let table = generator::generate(rows, seed).expect("generate");
    ReactiveSession::new(Arc::new(table))
}

#[test]
fn new_session_is_stale_and_first_read_makes_it_fresh() {
    let mut session = session_over(500, 1);
    assert_eq!(session.state(), SessionState::Stale);

    let snap = session.snapshot();
    assert_eq!(session.state(), SessionState::Fresh);
    assert_eq!(snap.info.total_rows, 500);
    assert_eq!(snap.info.matched_rows, 500, "default spec selects everything");
}

#[test]
fn repeated_reads_return_the_same_cached_snapshot() {
    let mut session = session_over(500, 2);

    let first = session.snapshot();
    let second = session.snapshot();
    assert!(
        Arc::ptr_eq(&first, &second),
        "a Fresh session must serve the cached snapshot, not recompute"
    );
}

#[test]
fn recomputing_after_invalidate_reproduces_identical_views() {
    let mut session = session_over(500, 3);

    let before = session.snapshot();
    session.invalidate();
    assert_eq!(session.state(), SessionState::Stale);

    let after = session.snapshot();
    assert!(!Arc::ptr_eq(&before, &after), "invalidate must force a recompute");
    assert_eq!(*before, *after, "recomputation with an unchanged spec drifted");
}

#[test]
fn changing_the_filter_invalidates_and_changes_the_result() {
    let mut session = session_over(1_000, 4);
    let everything = session.snapshot();

    let mut narrowed = session.spec().clone();
    narrowed.statuses = [Status::Refunded].into_iter().collect();
    session.set_filter(narrowed);
    assert_eq!(session.state(), SessionState::Stale);

    let refunded_only = session.snapshot();
    assert!(refunded_only.info.matched_rows < everything.info.matched_rows);
}

#[test]
fn resetting_the_identical_spec_stays_fresh() {
    let mut session = session_over(500, 5);
    let first = session.snapshot();

    session.set_filter(session.spec().clone());
    assert_eq!(session.state(), SessionState::Fresh);
    assert!(Arc::ptr_eq(&first, &session.snapshot()));
}

#[test]
fn preview_page_is_capped_and_respects_the_filter() {
    let mut session = session_over(1_000, 6);
    assert_eq!(session.preview_rows(), DEFAULT_PREVIEW_ROWS);

    session.set_preview_rows(5);
    let mut spec = session.spec().clone();
    spec.categories = [Category::Electronics].into_iter().collect();
    session.set_filter(spec);

    let snap = session.snapshot();
    assert_eq!(snap.preview.len(), snap.info.matched_rows.min(5));
    assert!(
        snap.preview.iter().all(|t| snap.spec.matches(t)),
        "preview contains rows outside the filter"
    );
}

#[test]
fn empty_selection_degrades_gracefully_through_the_session() {
    let mut session = session_over(500, 7);
    let mut spec = session.spec().clone();
    spec.categories.clear();
    session.set_filter(spec);

    let snap = session.snapshot();
    assert_eq!(snap.info.matched_rows, 0);
    assert_eq!(snap.scalars.transactions, 0);
    assert_eq!(snap.scalars.total_revenue, 0.0);
    assert_eq!(snap.scalars.avg_order_value, 0.0);
    assert!(snap.views.daily_revenue.is_empty());
    assert!(snap.views.status_breakdown.is_empty());
    assert!(snap.preview.is_empty());
}

#[test]
fn snapshot_serializes_for_the_presentation_layer() {
    let mut session = session_over(200, 8);
    let snap = session.snapshot();

    let json = serde_json::to_string(&*snap).expect("snapshot must serialize");
    assert!(json.contains("\"total_revenue\""));
    assert!(json.contains("\"daily_revenue\""));
    assert!(json.contains("\"matched_rows\""));
}

#[test]
fn sessions_share_the_base_table_but_not_their_caches() {
    let table = Arc::new(generator::generate(500, 9).expect("generate"));
    let mut a = ReactiveSession::new(Arc::clone(&table));
    let mut b = ReactiveSession::new(Arc::clone(&table));

    let mut spec = a.spec().clone();
    spec.statuses = [Status::Cancelled].into_iter().collect();
    a.set_filter(spec);

    let snap_a = a.snapshot();
    let snap_b = b.snapshot();
    assert!(snap_a.info.matched_rows < snap_b.info.matched_rows);
    assert_eq!(snap_b.info.matched_rows, 500, "session b must be unaffected by a's filter");
}
