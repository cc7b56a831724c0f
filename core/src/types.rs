//! Shared primitive types used across the pipeline.

/// Dense, monotonic row identifier assigned by the generator, starting at 1.
pub type TransactionId = u64;

/// Non-unique customer identifier.
pub type CustomerId = u32;

/// Product identifier.
pub type ProductId = u32;
