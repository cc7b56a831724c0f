//! The transaction row type and its financial-field invariants.

use crate::catalog::{Category, PaymentMethod, Region, Status};
use crate::types::{CustomerId, ProductId, TransactionId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Round to the cent. Financial fields are rounded stage-wise — subtotal,
/// tax, and total each independently — matching the persisted dataset's
/// semantics, not a single rounding of the full-precision product.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// One row of the base table. Immutable after generation or load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub timestamp: NaiveDateTime,
    pub customer_id: CustomerId,
    pub category: Category,
    pub product_id: ProductId,
    pub unit_price: f64,
    pub quantity: u8,
    pub discount: f64,
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
    pub payment_method: PaymentMethod,
    pub region: Region,
    pub city: &'static str,
    pub status: Status,
    pub is_member: bool,
    pub rating: Option<u8>,
}

impl Transaction {
    /// Calendar date of the transaction, the grouping key for daily views.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// subtotal = round2(unit_price * quantity * (1 - discount))
    pub fn expected_subtotal(&self) -> f64 {
        round2(self.unit_price * self.quantity as f64 * (1.0 - self.discount))
    }

    /// tax = round2(subtotal * tax_rate)
    pub fn expected_tax(&self) -> f64 {
        round2(self.subtotal * self.tax_rate)
    }

    /// total = round2(subtotal + tax)
    pub fn expected_total(&self) -> f64 {
        round2(self.subtotal + self.tax)
    }
}
