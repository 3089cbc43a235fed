//! Core value types for fx-money
//!
//! ## Types
//!
//! - [`Money`]: A magnitude tagged with its unit code
//! - [`Operand`]: Right-hand side of arithmetic, a number or a `Money`
//! - [`Difference`]: Result of `number - Money`, wrapped or bare
//!
//! ## Floating Point
//!
//! Values are plain `f64`. Rounding only happens when formatting, which uses
//! `rust_decimal` for half-to-even rounding at two places.

mod money;
mod operand;

// Re-export all types at module level
pub use money::{Money, DISPLAY_DP};
pub use operand::{Difference, Operand};
