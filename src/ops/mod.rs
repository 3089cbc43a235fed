//! Conversion and arithmetic on [`Money`](crate::types::Money).
//!
//! ## Design
//!
//! Every operation takes the [`RateTable`](crate::rates::RateTable) by shared
//! reference; nothing reads a global. Mixed operands are passed as an explicit
//! [`Operand`](crate::types::Operand), and the "number on the left" forms are
//! separate functions (`add_reflected`, `sub_reflected`) rather than operator
//! overloads, because they follow different rules.
//!
//! ## Rules
//!
//! - **Projection**: `Money(m)` becomes `m.value / rate[m.unit] * rate[target]`;
//!   a bare number `n` becomes `n * rate[target]`
//! - **Forward ops** keep the left operand's unit
//! - **Reflected add** always ends in USD
//! - **Reflected sub** skips projection and may return a bare number
//! - **Failures** leave in-place receivers untouched
//!
//! ## Example
//!
//! ```
//! use fx_money::ops::{add, add_reflected};
//! use fx_money::rates::RateTable;
//! use fx_money::types::{Money, Operand};
//!
//! let rates = RateTable::standard();
//! let eur = Money::new(23.43, "EUR");
//!
//! assert_eq!(add(&rates, &eur, Operand::Amount(3.0)).unwrap().unit(), "EUR");
//! assert_eq!(add_reflected(&rates, 3.0, &eur).unwrap().unit(), "USD");
//! ```

pub mod arithmetic;
pub mod convert;
pub mod exchange;

pub use arithmetic::{add, add_assign, add_reflected, sub, sub_assign, sub_reflected};
pub use convert::{change_to, converted, project};
pub use exchange::Exchange;
