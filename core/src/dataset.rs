//! The base table and its persisted CSV form.
//!
//! RULE: Only dataset.rs reads or writes the transactions file. The rest of
//! the pipeline sees an immutable, in-memory `Dataset` and never touches
//! the filesystem.
//!
//! No value in the schema contains a comma, a quote, or a newline (the
//! catalogs are fixed label sets, everything else is numeric), so records
//! are written and split on plain commas.

use crate::catalog::{self, Category, PaymentMethod, Region, Status};
use crate::error::{ExplorerError, ExplorerResult};
use crate::transaction::Transaction;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Exact header of the persisted dataset file.
pub const CSV_HEADER: &str = "transaction_id,timestamp,customer_id,category,product_id,\
unit_price,quantity,discount,subtotal,tax_rate,tax,total,payment_method,region,city,\
status,is_member,rating";

/// Number of columns per record.
pub const COLUMN_COUNT: usize = 18;

/// Written timestamp form: the space-separated ISO-8601 variant, matching
/// previously generated transaction files. `parse_timestamp` also accepts
/// the `T`-separated form on load.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The full synthetic transaction table. Constructed once (generated or
/// loaded), then read-only for the life of the process. Wrap in an `Arc`
/// to share across sessions — concurrent reads need no locking because
/// no writer exists after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<Transaction>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Earliest and latest transaction dates, or None for an empty table.
    /// Timestamps are drawn in random order, so this scans the table.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut it = self.rows.iter().map(Transaction::date);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// Rough in-memory footprint, for the dataset-info panel.
    pub fn approx_memory_bytes(&self) -> usize {
        std::mem::size_of::<Transaction>() * self.rows.len()
    }

    /// Write the table as CSV, creating parent directories as needed.
    pub fn write_csv(&self, path: &Path) -> ExplorerResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "{CSV_HEADER}")?;
        for t in &self.rows {
            write_record(&mut out, t)?;
        }
        out.flush()?;
        log::info!("wrote {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }

    /// Load the table from a previously generated CSV.
    ///
    /// A missing file is fatal: the process must not start on partial or
    /// fallback data, so the error names the generator as the remedy.
    pub fn load(path: &Path) -> ExplorerResult<Dataset> {
        if !path.exists() {
            return Err(ExplorerError::MissingData {
                path: path.to_path_buf(),
            });
        }
        let reader = BufReader::new(File::open(path)?);
        let mut lines = reader.lines();

        let header = lines.next().transpose()?.unwrap_or_default();
        if header != CSV_HEADER {
            return Err(ExplorerError::MalformedRecord {
                line: 1,
                reason: format!("unexpected header: {header}"),
            });
        }

        let mut rows = Vec::new();
        for (idx, line) in lines.enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            // Header is line 1, first record is line 2.
            rows.push(parse_record(idx + 2, &line)?);
        }
        log::info!("loaded {} rows from {}", rows.len(), path.display());
        Ok(Dataset::from_rows(rows))
    }
}

fn write_record(out: &mut impl Write, t: &Transaction) -> std::io::Result<()> {
    write!(
        out,
        "{},{},{},{},{},{:.2},{},{},{:.2},{},{:.2},{:.2},{},{},{},{},{},",
        t.transaction_id,
        t.timestamp.format(TIMESTAMP_FORMAT),
        t.customer_id,
        t.category.label(),
        t.product_id,
        t.unit_price,
        t.quantity,
        t.discount,
        t.subtotal,
        t.tax_rate,
        t.tax,
        t.total,
        t.payment_method.label(),
        t.region.label(),
        t.city,
        t.status.label(),
        t.is_member,
    )?;
    match t.rating {
        Some(stars) => writeln!(out, "{stars}"),
        None => writeln!(out),
    }
}

fn parse_record(line_no: usize, line: &str) -> ExplorerResult<Transaction> {
    let bad = |reason: String| ExplorerError::MalformedRecord {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != COLUMN_COUNT {
        return Err(bad(format!(
            "expected {COLUMN_COUNT} fields, got {}",
            fields.len()
        )));
    }

    Ok(Transaction {
        transaction_id: fields[0]
            .parse()
            .map_err(|_| bad(format!("bad transaction_id: {}", fields[0])))?,
        timestamp: parse_timestamp(fields[1])
            .ok_or_else(|| bad(format!("bad timestamp: {}", fields[1])))?,
        customer_id: fields[2]
            .parse()
            .map_err(|_| bad(format!("bad customer_id: {}", fields[2])))?,
        category: Category::from_label(fields[3])
            .ok_or_else(|| bad(format!("unknown category: {}", fields[3])))?,
        product_id: fields[4]
            .parse()
            .map_err(|_| bad(format!("bad product_id: {}", fields[4])))?,
        unit_price: parse_money(fields[5]).ok_or_else(|| bad(format!("bad unit_price: {}", fields[5])))?,
        quantity: fields[6]
            .parse()
            .map_err(|_| bad(format!("bad quantity: {}", fields[6])))?,
        discount: parse_money(fields[7]).ok_or_else(|| bad(format!("bad discount: {}", fields[7])))?,
        subtotal: parse_money(fields[8]).ok_or_else(|| bad(format!("bad subtotal: {}", fields[8])))?,
        tax_rate: parse_money(fields[9]).ok_or_else(|| bad(format!("bad tax_rate: {}", fields[9])))?,
        tax: parse_money(fields[10]).ok_or_else(|| bad(format!("bad tax: {}", fields[10])))?,
        total: parse_money(fields[11]).ok_or_else(|| bad(format!("bad total: {}", fields[11])))?,
        payment_method: PaymentMethod::from_label(fields[12])
            .ok_or_else(|| bad(format!("unknown payment_method: {}", fields[12])))?,
        region: Region::from_label(fields[13])
            .ok_or_else(|| bad(format!("unknown region: {}", fields[13])))?,
        city: catalog::city_from_label(fields[14])
            .ok_or_else(|| bad(format!("unknown city: {}", fields[14])))?,
        status: Status::from_label(fields[15])
            .ok_or_else(|| bad(format!("unknown status: {}", fields[15])))?,
        is_member: parse_bool(fields[16])
            .ok_or_else(|| bad(format!("bad is_member: {}", fields[16])))?,
        rating: parse_rating(fields[17])
            .map_err(|_| bad(format!("bad rating: {}", fields[17])))?,
    })
}

/// Accept both the space-separated form this crate writes and the
/// `T`-separated ISO form.
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

fn parse_money(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Accept both Rust-style and pandas-style booleans.
fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" | "True" => Some(true),
        "false" | "False" => Some(false),
        _ => None,
    }
}

/// Empty cell means no rating. Ratings written by pandas come through as
/// floats ("4.0"), so parse as f64 and truncate.
fn parse_rating(s: &str) -> Result<Option<u8>, ()> {
    if s.is_empty() {
        return Ok(None);
    }
    let v: f64 = s.parse().map_err(|_| ())?;
    if (1.0..=5.0).contains(&v) {
        Ok(Some(v as u8))
    } else {
        Err(())
    }
}
