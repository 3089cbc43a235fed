//! Error types for money operations.
//!
//! Only [`MoneyError::UnknownCurrency`] can surface from arithmetic and
//! conversion. The other variants are raised while building a custom
//! [`RateTable`](crate::rates::RateTable).

use thiserror::Error;

/// Errors produced by rate lookups and rate table construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoneyError {
    /// A unit code was used that the rate table does not know.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A custom table entry has a factor that cannot be divided by.
    #[error("invalid rate for {code}: {rate} (must be finite and > 0)")]
    InvalidRate {
        /// Offending unit code
        code: String,
        /// Offending factor
        rate: f64,
    },

    /// A custom table is missing the USD = 1.0 reference entry.
    #[error("rate table must contain USD with factor 1.0")]
    MissingReference,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MoneyError>;
