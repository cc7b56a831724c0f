//! Row selection: filter specifications and the stable filter pass.

use crate::catalog::{Category, Region, Status};
use crate::dataset::Dataset;
use crate::transaction::Transaction;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The tuple of selections defining a row subset. Immutable once built,
/// equality-comparable, and used as the session cache key.
///
/// All four predicates apply conjunctively. An empty set on any dimension
/// is a valid specification that matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSpecification {
    /// Inclusive lower bound on the transaction date.
    pub start_date: NaiveDate,
    /// Inclusive upper bound on the transaction date.
    pub end_date: NaiveDate,
    pub categories: BTreeSet<Category>,
    pub regions: BTreeSet<Region>,
    pub statuses: BTreeSet<Status>,
}

impl FilterSpecification {
    /// The widest specification for a dataset: full date range, every
    /// category, region, and status selected. This is the state a fresh
    /// UI session starts in. For an empty dataset the date range
    /// degenerates to a single arbitrary day and still matches nothing.
    pub fn all_of(dataset: &Dataset) -> Self {
        let (start_date, end_date) = dataset
            .date_bounds()
            .unwrap_or_else(|| (NaiveDate::MIN, NaiveDate::MIN));
        Self {
            start_date,
            end_date,
            categories: Category::ALL.into_iter().collect(),
            regions: Region::ALL.into_iter().collect(),
            statuses: Status::ALL.into_iter().collect(),
        }
    }

    pub fn matches(&self, t: &Transaction) -> bool {
        let d = t.date();
        d >= self.start_date
            && d <= self.end_date
            && self.categories.contains(&t.category)
            && self.regions.contains(&t.region)
            && self.statuses.contains(&t.status)
    }
}

/// Return the indices of all base-table rows satisfying `spec`, in base
/// table order (stable). Never mutates the table; repeatable.
pub fn filter_rows(dataset: &Dataset, spec: &FilterSpecification) -> Vec<usize> {
    // An empty selection matches nothing — skip the scan entirely.
    if spec.categories.is_empty() || spec.regions.is_empty() || spec.statuses.is_empty() {
        return Vec::new();
    }
    dataset
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, t)| spec.matches(t))
        .map(|(i, _)| i)
        .collect()
}
