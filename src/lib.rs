//! # fx-money
//!
//! Currency-tagged money values with fixed-rate conversion.
//!
//! ## Architecture
//!
//! - **Rates**: Immutable code -> factor table, USD = 1.0
//! - **Types**: `Money`, plus the `Operand` / `Difference` sum types
//! - **Ops**: Unit conversion and the add/sub family, each taking `&RateTable`
//!
//! ## Design Principles
//!
//! 1. **No Globals**: The rate table is built once and passed by reference
//! 2. **Explicit Dispatch**: Number-vs-money operands are an enum, not overloads
//! 3. **Errors Propagate**: Unknown unit codes surface as `MoneyError::UnknownCurrency`
//! 4. **Round Only for Display**: Values stay `f64`; formatting rounds to 2 places
//!
//! ## Example
//!
//! ```
//! use fx_money::{Exchange, Money, RateTable};
//!
//! let rates = RateTable::standard();
//! let fx = Exchange::new(&rates);
//!
//! let v1 = Money::new(23.43, "EUR");
//! let v2 = Money::usd(19.97);
//!
//! assert_eq!(fx.add(&v1, &v2).unwrap().to_string(), "40.65 EUR");
//! assert_eq!(fx.add(&v2, &v1).unwrap().to_string(), "47.14 USD");
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error type and Result alias
pub mod error;

/// Rate table: code -> factor relative to USD
pub mod rates;

/// Value types: Money, Operand, Difference
pub mod types;

/// Conversion and arithmetic
pub mod ops;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{MoneyError, Result};
pub use ops::Exchange;
pub use rates::{RateTable, REFERENCE_UNIT};
pub use types::{Difference, Money, Operand};
