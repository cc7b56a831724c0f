//! explorer-core: the data pipeline beneath the transaction explorer UI.
//!
//! PIPELINE (fixed, documented):
//!   1. generator  — deterministic synthetic table from (row_count, seed)
//!   2. dataset    — CSV persistence and the immutable in-memory base table
//!   3. filter     — stable row selection from a FilterSpecification
//!   4. aggregate  — the six summary views + scalar metrics over a subset
//!   5. session    — Stale/Fresh recomputation cache, one per analyst
//!
//! RULES:
//!   - The base table is read-only after construction. Nothing mutates it.
//!   - All randomness flows through rng::FieldStreams.
//!   - Filtering and aggregation have no failure path: every input,
//!     including an empty selection, has a defined (possibly empty) output.
//!   - The core emits plain numeric values; formatting is the UI's job.

pub mod aggregate;
pub mod catalog;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod generator;
pub mod rng;
pub mod session;
pub mod transaction;
pub mod types;

pub use aggregate::{ScalarSummary, SummaryViews};
pub use catalog::{Category, PaymentMethod, Region, Status};
pub use dataset::Dataset;
pub use error::{ExplorerError, ExplorerResult};
pub use filter::FilterSpecification;
pub use session::{DashboardSnapshot, ReactiveSession, SessionState};
pub use transaction::Transaction;
