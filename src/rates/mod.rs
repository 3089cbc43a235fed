//! Fixed conversion rates.
//!
//! ## Rate Convention
//!
//! Every factor is expressed against USD, which is pinned at 1.0:
//!
//! ```text
//! amount_in_usd = amount_in_code / rate[code]
//! ```
//!
//! So converting between two arbitrary codes is a divide followed by a multiply:
//! `value / rate[from] * rate[to]`.
//!
//! ## Components
//!
//! - [`RateTable`]: Immutable code -> factor map, built once and shared by reference
//! - [`STANDARD_RATES`]: The six compiled-in entries
//!
//! ## Example
//!
//! ```
//! use fx_money::rates::RateTable;
//!
//! let rates = RateTable::standard();
//! assert_eq!(rates.rate("USD").unwrap(), 1.0);
//! assert!(rates.rate("XYZ").is_err());
//! ```

pub mod table;

pub use table::{RateTable, REFERENCE_UNIT, STANDARD_RATES};
