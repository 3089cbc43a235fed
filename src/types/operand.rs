//! Mixed operand and result types for arithmetic.
//!
//! Arithmetic accepts either a plain number or another [`Money`] on the right
//! hand side. [`Operand`] carries that choice explicitly so each operation can
//! `match` on it.

use std::fmt;

use crate::types::money::{write_amount, Money};

/// Right-hand side of an addition or subtraction.
///
/// ## Example
///
/// ```
/// use fx_money::types::{Money, Operand};
///
/// let m = Money::new(19.97, "USD");
/// assert_eq!(Operand::from(3_i32), Operand::Amount(3.0));
/// assert_eq!(Operand::from(&m), Operand::Money(&m));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// A bare number, scaled by the left operand's rate before use
    Amount(f64),
    /// Another money value, projected into the left operand's unit
    Money(&'a Money),
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Amount(value)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand<'_> {
                fn from(value: $t) -> Self {
                    // i64/u64 above 2^53 lose precision, as any float would
                    Operand::Amount(value as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl<'a> From<&'a Money> for Operand<'a> {
    fn from(money: &'a Money) -> Self {
        Operand::Money(money)
    }
}

/// Result of `number - Money`.
///
/// When the money operand is already in USD the result is a bare number,
/// otherwise it is wrapped as USD money.
#[derive(Debug, Clone, PartialEq)]
pub enum Difference {
    /// Wrapped result, always tagged USD
    Money(Money),
    /// Bare numeric result
    Amount(f64),
}

impl Difference {
    /// Numeric value regardless of variant.
    pub fn value(&self) -> f64 {
        match self {
            Difference::Money(m) => m.value(),
            Difference::Amount(v) => *v,
        }
    }

    /// The wrapped money, if any.
    pub fn as_money(&self) -> Option<&Money> {
        match self {
            Difference::Money(m) => Some(m),
            Difference::Amount(_) => None,
        }
    }

    /// True for the wrapped variant.
    pub fn is_money(&self) -> bool {
        matches!(self, Difference::Money(_))
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difference::Money(m) => fmt::Display::fmt(m, f),
            Difference::Amount(v) => write_amount(f, *v),
        }
    }
}
