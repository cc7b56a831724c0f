//! Per-session recomputation and caching.
//!
//! RULE: Recomputation is explicit. Any filter mutation calls
//! `invalidate()`, any read goes through `ensure_fresh()`. No framework
//! callback machinery — the state machine is just Stale/Fresh.
//!
//! The base table is shared read-only across sessions (hence the `Arc`);
//! the cached views are private to this session.

use crate::aggregate::{self, ScalarSummary, SummaryViews};
use crate::dataset::{Dataset, COLUMN_COUNT};
use crate::filter::{self, FilterSpecification};
use crate::transaction::Transaction;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Default size of the raw-row preview page.
pub const DEFAULT_PREVIEW_ROWS: usize = 500;

/// Whether the cached views correspond to the current specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Stale,
    Fresh,
}

/// Sizing diagnostics for the dataset-info panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetInfo {
    pub total_rows: usize,
    pub matched_rows: usize,
    pub columns: usize,
    pub approx_memory_bytes: usize,
}

/// Everything the presentation layer reads for one filter state:
/// scalar metrics, the six summary views, and a capped page of raw rows.
/// Replaced wholesale on every recomputation, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub spec: FilterSpecification,
    pub info: DatasetInfo,
    pub scalars: ScalarSummary,
    pub views: SummaryViews,
    pub preview: Vec<Transaction>,
}

enum Cache {
    Stale,
    Fresh(Arc<DashboardSnapshot>),
}

/// One analyst session: the current filter specification plus the cached
/// result of the last recomputation.
pub struct ReactiveSession {
    dataset: Arc<Dataset>,
    spec: FilterSpecification,
    preview_rows: usize,
    cache: Cache,
}

impl ReactiveSession {
    /// Start a session with the widest specification (everything selected).
    /// The session begins Stale; the first read computes.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let spec = FilterSpecification::all_of(&dataset);
        Self {
            dataset,
            spec,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            cache: Cache::Stale,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.cache {
            Cache::Stale => SessionState::Stale,
            Cache::Fresh(_) => SessionState::Fresh,
        }
    }

    pub fn spec(&self) -> &FilterSpecification {
        &self.spec
    }

    pub fn preview_rows(&self) -> usize {
        self.preview_rows
    }

    /// Replace the filter specification. An actual change invalidates the
    /// cache; re-setting the identical specification leaves it Fresh (the
    /// specification is the cache key).
    pub fn set_filter(&mut self, spec: FilterSpecification) {
        if spec != self.spec {
            self.spec = spec;
            self.invalidate();
        }
    }

    /// Resize the raw-row preview page.
    pub fn set_preview_rows(&mut self, rows: usize) {
        if rows != self.preview_rows {
            self.preview_rows = rows;
            self.invalidate();
        }
    }

    /// Fresh → Stale. Idempotent.
    pub fn invalidate(&mut self) {
        self.cache = Cache::Stale;
    }

    /// Stale → Fresh: run the filter pass, recompute every view, and cache
    /// the result. A no-op while Fresh — this is the optimization that
    /// makes repeated reads cheap against a multi-million-row table.
    pub fn ensure_fresh(&mut self) {
        if let Cache::Fresh(_) = self.cache {
            return;
        }
        let started = Instant::now();

        let matched = filter::filter_rows(&self.dataset, &self.spec);
        let scalars = aggregate::scalar_summary(&self.dataset, &matched);
        let views = aggregate::summarize(&self.dataset, &matched);
        let preview: Vec<Transaction> = matched
            .iter()
            .take(self.preview_rows)
            .map(|&i| self.dataset.rows()[i].clone())
            .collect();

        let snapshot = DashboardSnapshot {
            spec: self.spec.clone(),
            info: DatasetInfo {
                total_rows: self.dataset.len(),
                matched_rows: matched.len(),
                columns: COLUMN_COUNT,
                approx_memory_bytes: self.dataset.approx_memory_bytes(),
            },
            scalars,
            views,
            preview,
        };

        log::debug!(
            "recomputed views: {} of {} rows matched in {:?}",
            snapshot.info.matched_rows,
            snapshot.info.total_rows,
            started.elapsed()
        );
        self.cache = Cache::Fresh(Arc::new(snapshot));
    }

    /// Current dashboard state, recomputing first if Stale. While Fresh,
    /// repeated calls return the same allocation — bit-identical views
    /// with no drift.
    pub fn snapshot(&mut self) -> Arc<DashboardSnapshot> {
        self.ensure_fresh();
        match &self.cache {
            Cache::Fresh(snap) => Arc::clone(snap),
            Cache::Stale => unreachable!("ensure_fresh leaves the session Fresh"),
        }
    }
}
