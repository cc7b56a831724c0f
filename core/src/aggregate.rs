//! Summary views over a filtered row subset.
//!
//! Every view is a pure function of the subset, computed independently by
//! one generic grouping routine parameterized over a strongly-typed
//! descriptor (sort rule + row cap). Views carry plain numeric values;
//! currency and percentage formatting belongs to the presentation layer.
//!
//! An empty subset yields empty views and zero scalars — there is no
//! failure path here by design.

use crate::catalog::{Category, PaymentMethod, Region, Status};
use crate::dataset::Dataset;
use crate::transaction::Transaction;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Daily revenue keeps the most recent days only.
pub const DAILY_REVENUE_LIMIT: usize = 20;

/// Top days by revenue keeps this many rows.
pub const TOP_DAYS_LIMIT: usize = 10;

// ── View row types ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRevenueRow {
    pub date: NaiveDate,
    pub transactions: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummaryRow {
    pub category: Category,
    pub transactions: u64,
    pub revenue: f64,
    pub avg_unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummaryRow {
    pub region: Region,
    pub transactions: u64,
    pub revenue: f64,
    pub avg_order: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentSummaryRow {
    pub payment_method: PaymentMethod,
    pub transactions: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopDayRow {
    pub date: NaiveDate,
    pub transactions: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBreakdownRow {
    pub status: Status,
    pub count: u64,
    pub revenue: f64,
    /// Share of the subset's row count, in percent (0..=100).
    pub pct_of_total: f64,
}

/// The six fixed derived tables, regenerated wholesale on every filter
/// change and never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryViews {
    pub daily_revenue: Vec<DailyRevenueRow>,
    pub category_summary: Vec<CategorySummaryRow>,
    pub region_summary: Vec<RegionSummaryRow>,
    pub payment_summary: Vec<PaymentSummaryRow>,
    pub top_days: Vec<TopDayRow>,
    pub status_breakdown: Vec<StatusBreakdownRow>,
}

/// The four single-value statistics shown alongside the tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarSummary {
    pub transactions: u64,
    pub total_revenue: f64,
    /// Mean of `total`; 0 for an empty subset, never a division by zero.
    pub avg_order_value: f64,
    pub unique_customers: u64,
}

// ── Generic grouping routine ───────────────────────────────────────

#[derive(Debug, Default, Clone, Copy)]
struct GroupAccum {
    count: u64,
    revenue: f64,
    /// Per-view extra sum (unit prices, order totals) used for means.
    extra: f64,
}

#[derive(Debug, Clone, Copy)]
enum SortRule {
    /// Grouping key descending (e.g. most recent date first).
    KeyDescending,
    /// Revenue descending, ties by key ascending.
    RevenueDescending,
    /// Count descending, ties by key ascending.
    CountDescending,
}

#[derive(Debug, Clone, Copy)]
struct ViewDescriptor {
    sort: SortRule,
    limit: Option<usize>,
}

/// Group a row subset by `key_of`, accumulating count, revenue, and one
/// extra metric, then order and cap per the descriptor.
///
/// The accumulator is a BTreeMap, so groups come out key-ascending; the
/// stable sort by the descending criterion therefore breaks ties by the
/// key's natural ascending order, keeping output deterministic.
fn group_rows<'a, K, I, KF, XF>(
    rows: I,
    key_of: KF,
    extra_of: XF,
    desc: ViewDescriptor,
) -> Vec<(K, GroupAccum)>
where
    K: Ord + Copy,
    I: Iterator<Item = &'a Transaction>,
    KF: Fn(&Transaction) -> K,
    XF: Fn(&Transaction) -> f64,
{
    let mut groups: BTreeMap<K, GroupAccum> = BTreeMap::new();
    for t in rows {
        let g = groups.entry(key_of(t)).or_default();
        g.count += 1;
        g.revenue += t.total;
        g.extra += extra_of(t);
    }

    let mut out: Vec<(K, GroupAccum)> = groups.into_iter().collect();
    match desc.sort {
        SortRule::KeyDescending => out.reverse(),
        SortRule::RevenueDescending => out.sort_by(|a, b| b.1.revenue.total_cmp(&a.1.revenue)),
        SortRule::CountDescending => out.sort_by(|a, b| b.1.count.cmp(&a.1.count)),
    }
    if let Some(cap) = desc.limit {
        out.truncate(cap);
    }
    out
}

fn subset<'a>(dataset: &'a Dataset, rows: &'a [usize]) -> impl Iterator<Item = &'a Transaction> {
    rows.iter().map(move |&i| &dataset.rows()[i])
}

// ── The six views ──────────────────────────────────────────────────

pub fn daily_revenue(dataset: &Dataset, rows: &[usize]) -> Vec<DailyRevenueRow> {
    group_rows(
        subset(dataset, rows),
        Transaction::date,
        |_| 0.0,
        ViewDescriptor {
            sort: SortRule::KeyDescending,
            limit: Some(DAILY_REVENUE_LIMIT),
        },
    )
    .into_iter()
    .map(|(date, g)| DailyRevenueRow {
        date,
        transactions: g.count,
        revenue: g.revenue,
    })
    .collect()
}

pub fn category_summary(dataset: &Dataset, rows: &[usize]) -> Vec<CategorySummaryRow> {
    group_rows(
        subset(dataset, rows),
        |t| t.category,
        |t| t.unit_price,
        ViewDescriptor {
            sort: SortRule::RevenueDescending,
            limit: None,
        },
    )
    .into_iter()
    .map(|(category, g)| CategorySummaryRow {
        category,
        transactions: g.count,
        revenue: g.revenue,
        avg_unit_price: g.extra / g.count as f64,
    })
    .collect()
}

pub fn region_summary(dataset: &Dataset, rows: &[usize]) -> Vec<RegionSummaryRow> {
    group_rows(
        subset(dataset, rows),
        |t| t.region,
        |t| t.total,
        ViewDescriptor {
            sort: SortRule::RevenueDescending,
            limit: None,
        },
    )
    .into_iter()
    .map(|(region, g)| RegionSummaryRow {
        region,
        transactions: g.count,
        revenue: g.revenue,
        avg_order: g.extra / g.count as f64,
    })
    .collect()
}

pub fn payment_summary(dataset: &Dataset, rows: &[usize]) -> Vec<PaymentSummaryRow> {
    group_rows(
        subset(dataset, rows),
        |t| t.payment_method,
        |_| 0.0,
        ViewDescriptor {
            sort: SortRule::RevenueDescending,
            limit: None,
        },
    )
    .into_iter()
    .map(|(payment_method, g)| PaymentSummaryRow {
        payment_method,
        transactions: g.count,
        revenue: g.revenue,
    })
    .collect()
}

pub fn top_days(dataset: &Dataset, rows: &[usize]) -> Vec<TopDayRow> {
    group_rows(
        subset(dataset, rows),
        Transaction::date,
        |_| 0.0,
        ViewDescriptor {
            sort: SortRule::RevenueDescending,
            limit: Some(TOP_DAYS_LIMIT),
        },
    )
    .into_iter()
    .map(|(date, g)| TopDayRow {
        date,
        transactions: g.count,
        revenue: g.revenue,
    })
    .collect()
}

pub fn status_breakdown(dataset: &Dataset, rows: &[usize]) -> Vec<StatusBreakdownRow> {
    let total_count = rows.len() as f64;
    group_rows(
        subset(dataset, rows),
        |t| t.status,
        |_| 0.0,
        ViewDescriptor {
            sort: SortRule::CountDescending,
            limit: None,
        },
    )
    .into_iter()
    .map(|(status, g)| StatusBreakdownRow {
        status,
        count: g.count,
        revenue: g.revenue,
        pct_of_total: g.count as f64 / total_count * 100.0,
    })
    .collect()
}

/// Compute all six views for one subset.
pub fn summarize(dataset: &Dataset, rows: &[usize]) -> SummaryViews {
    SummaryViews {
        daily_revenue: daily_revenue(dataset, rows),
        category_summary: category_summary(dataset, rows),
        region_summary: region_summary(dataset, rows),
        payment_summary: payment_summary(dataset, rows),
        top_days: top_days(dataset, rows),
        status_breakdown: status_breakdown(dataset, rows),
    }
}

pub fn scalar_summary(dataset: &Dataset, rows: &[usize]) -> ScalarSummary {
    let mut total_revenue = 0.0;
    let mut customers: HashSet<u32> = HashSet::new();
    for t in subset(dataset, rows) {
        total_revenue += t.total;
        customers.insert(t.customer_id);
    }
    let transactions = rows.len() as u64;
    ScalarSummary {
        transactions,
        total_revenue,
        avg_order_value: if transactions == 0 {
            0.0
        } else {
            total_revenue / transactions as f64
        },
        unique_customers: customers.len() as u64,
    }
}
