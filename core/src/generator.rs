//! Synthetic dataset construction.
//!
//! `generate` is a pure function of (row_count, seed): the same pair always
//! yields a bit-identical table. Every column is drawn from its own RNG
//! stream (see `rng::FieldSlot`), so columns can be added without
//! disturbing the values of existing ones.

use crate::catalog::{
    self, Category, PaymentMethod, Region, Status, CITIES, CUSTOMER_ID_MAX, CUSTOMER_ID_MIN,
    DISCOUNT_WHEEL, MAX_QUANTITY, MEMBER_PROBABILITY, PRODUCT_ID_MAX, PRODUCT_ID_MIN,
    RATING_WEIGHTS, STATUS_WEIGHTS, TAX_RATES, UNIT_PRICE_MEAN, UNIT_PRICE_SHIFT,
};
use crate::dataset::Dataset;
use crate::error::{ExplorerError, ExplorerResult};
use crate::rng::{FieldSlot, FieldStreams};
use crate::transaction::{round2, Transaction};
use chrono::{Duration, NaiveDateTime};

/// Generate `row_count` synthetic transactions from `seed`.
///
/// Rejects non-positive row counts before any sampling. Ids are assigned
/// densely over 1..=row_count in row order.
pub fn generate(row_count: i64, seed: u64) -> ExplorerResult<Dataset> {
    if row_count <= 0 {
        return Err(ExplorerError::InvalidRowCount(row_count));
    }
    let n = row_count as usize;
    log::info!("generating {n} rows with seed {seed}");

    let streams = FieldStreams::new(seed);

    // 1. Timestamps: uniform offset-in-seconds over the two-year window.
    let start = catalog::window_start();
    let window = catalog::window_seconds();
    let timestamps: Vec<NaiveDateTime> = {
        let mut rng = streams.stream(FieldSlot::Timestamp);
        (0..n)
            .map(|_| start + Duration::seconds(rng.below(window) as i64))
            .collect()
    };

    // 2. Financial draws.
    let unit_prices: Vec<f64> = {
        let mut rng = streams.stream(FieldSlot::UnitPrice);
        (0..n)
            .map(|_| round2(rng.exponential(UNIT_PRICE_MEAN) + UNIT_PRICE_SHIFT))
            .collect()
    };
    let quantities: Vec<u8> = {
        let mut rng = streams.stream(FieldSlot::Quantity);
        (0..n).map(|_| (1 + rng.below(MAX_QUANTITY)) as u8).collect()
    };
    let discounts: Vec<f64> = {
        let mut rng = streams.stream(FieldSlot::Discount);
        (0..n)
            .map(|_| DISCOUNT_WHEEL[rng.below(DISCOUNT_WHEEL.len() as u64) as usize])
            .collect()
    };
    let tax_rates: Vec<f64> = {
        let mut rng = streams.stream(FieldSlot::TaxRate);
        (0..n)
            .map(|_| TAX_RATES[rng.below(TAX_RATES.len() as u64) as usize])
            .collect()
    };

    // 3. Remaining columns, uniform unless a marginal is specified.
    let customer_ids: Vec<u32> = {
        let mut rng = streams.stream(FieldSlot::Customer);
        let span = CUSTOMER_ID_MAX - CUSTOMER_ID_MIN;
        (0..n)
            .map(|_| (CUSTOMER_ID_MIN + rng.below(span)) as u32)
            .collect()
    };
    let categories: Vec<Category> = {
        let mut rng = streams.stream(FieldSlot::Category);
        (0..n)
            .map(|_| Category::ALL[rng.below(Category::ALL.len() as u64) as usize])
            .collect()
    };
    let product_ids: Vec<u32> = {
        let mut rng = streams.stream(FieldSlot::Product);
        let span = PRODUCT_ID_MAX - PRODUCT_ID_MIN;
        (0..n)
            .map(|_| (PRODUCT_ID_MIN + rng.below(span)) as u32)
            .collect()
    };
    let payments: Vec<PaymentMethod> = {
        let mut rng = streams.stream(FieldSlot::Payment);
        (0..n)
            .map(|_| PaymentMethod::ALL[rng.below(PaymentMethod::ALL.len() as u64) as usize])
            .collect()
    };
    let regions: Vec<Region> = {
        let mut rng = streams.stream(FieldSlot::Region);
        (0..n)
            .map(|_| Region::ALL[rng.below(Region::ALL.len() as u64) as usize])
            .collect()
    };
    let cities: Vec<&'static str> = {
        let mut rng = streams.stream(FieldSlot::City);
        (0..n)
            .map(|_| CITIES[rng.below(CITIES.len() as u64) as usize])
            .collect()
    };
    let statuses: Vec<Status> = {
        let mut rng = streams.stream(FieldSlot::Status);
        (0..n)
            .map(|_| Status::ALL[rng.weighted(&STATUS_WEIGHTS)])
            .collect()
    };
    let members: Vec<bool> = {
        let mut rng = streams.stream(FieldSlot::Member);
        (0..n).map(|_| rng.chance(MEMBER_PROBABILITY)).collect()
    };
    let ratings: Vec<Option<u8>> = {
        let mut rng = streams.stream(FieldSlot::Rating);
        (0..n)
            .map(|_| match rng.weighted(&RATING_WEIGHTS) {
                0 => None,
                stars => Some(stars as u8),
            })
            .collect()
    };

    // 4. Assemble rows, deriving the dependent financial fields.
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let subtotal = round2(unit_prices[i] * quantities[i] as f64 * (1.0 - discounts[i]));
        let tax = round2(subtotal * tax_rates[i]);
        let total = round2(subtotal + tax);
        rows.push(Transaction {
            transaction_id: (i + 1) as u64,
            timestamp: timestamps[i],
            customer_id: customer_ids[i],
            category: categories[i],
            product_id: product_ids[i],
            unit_price: unit_prices[i],
            quantity: quantities[i],
            discount: discounts[i],
            subtotal,
            tax_rate: tax_rates[i],
            tax,
            total,
            payment_method: payments[i],
            region: regions[i],
            city: cities[i],
            status: statuses[i],
            is_member: members[i],
            rating: ratings[i],
        });
    }

    log::info!("generated {n} rows");
    Ok(Dataset::from_rows(rows))
}
