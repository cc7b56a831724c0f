//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through FieldRng instances derived from the
//! single master seed passed to `generate`.
//!
//! Each dataset column gets its own RNG stream, seeded deterministically
//! from (master_seed XOR field_index). This means:
//!   - Adding a new column never changes existing columns' streams.
//!   - Each column's stream is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single dataset column.
pub struct FieldRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl FieldRng {
    /// Create a field RNG from the master seed and a stable field index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, field_index: u64) -> Self {
        let derived_seed = master_seed ^ (field_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Sample from an exponential distribution with the given mean,
    /// by inverse CDF. The argument to ln() is in (0, 1], never zero.
    pub fn exponential(&mut self, mean: f64) -> f64 {
        let u = self.next_f64();
        -mean * (1.0 - u).ln()
    }

    /// Pick an index with probability proportional to its weight.
    /// Weights need not sum to 1.
    pub fn weighted(&mut self, weights: &[f64]) -> usize {
        debug_assert!(!weights.is_empty());
        let total: f64 = weights.iter().sum();
        let mut roll = self.next_f64() * total;
        for (i, w) in weights.iter().enumerate() {
            if roll < *w {
                return i;
            }
            roll -= w;
        }
        weights.len() - 1
    }
}

/// All column RNGs for a single generation run, indexed by stable slot.
pub struct FieldStreams {
    master_seed: u64,
}

impl FieldStreams {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn stream(&self, slot: FieldSlot) -> FieldRng {
        FieldRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable field slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every column's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum FieldSlot {
    Timestamp = 0,
    UnitPrice = 1,
    Quantity = 2,
    Discount = 3,
    TaxRate = 4,
    Customer = 5,
    Category = 6,
    Product = 7,
    Payment = 8,
    Region = 9,
    City = 10,
    Status = 11,
    Member = 12,
    Rating = 13,
    // Add new columns here — append only.
}

impl FieldSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::UnitPrice => "unit_price",
            Self::Quantity => "quantity",
            Self::Discount => "discount",
            Self::TaxRate => "tax_rate",
            Self::Customer => "customer_id",
            Self::Category => "category",
            Self::Product => "product_id",
            Self::Payment => "payment_method",
            Self::Region => "region",
            Self::City => "city",
            Self::Status => "status",
            Self::Member => "is_member",
            Self::Rating => "rating",
        }
    }
}
