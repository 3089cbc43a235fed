//! Addition and subtraction over [`Money`] and plain numbers.
//!
//! ## Result Units
//!
//! | Call                         | Result                                  |
//! |------------------------------|-----------------------------------------|
//! | `add(m, x)` / `sub(m, x)`    | `Money` in `m`'s unit                   |
//! | `add_assign` / `sub_assign`  | `m.value` rewritten, unit unchanged     |
//! | `add_reflected(n, m)`        | `Money` in USD                          |
//! | `sub_reflected(n, m)`        | bare number if `m` is USD, else USD `Money` |
//!
//! The reflected forms are intentionally asymmetric with their forward
//! counterparts. `sub_reflected` does not apply `m`'s rate at all.

use crate::error::Result;
use crate::ops::convert::{change_to, project};
use crate::rates::{RateTable, REFERENCE_UNIT};
use crate::types::{Difference, Money, Operand};

/// `lhs + rhs`, in `lhs`'s unit.
///
/// # Example
///
/// ```
/// use fx_money::ops::add;
/// use fx_money::rates::RateTable;
/// use fx_money::types::{Money, Operand};
///
/// let rates = RateTable::standard();
/// let eur = Money::new(23.43, "EUR");
/// let usd = Money::usd(19.97);
///
/// assert_eq!(add(&rates, &eur, Operand::from(&usd)).unwrap().to_string(), "40.65 EUR");
/// assert_eq!(add(&rates, &eur, Operand::Amount(3.0)).unwrap().to_string(), "26.02 EUR");
/// ```
pub fn add(rates: &RateTable, lhs: &Money, rhs: Operand<'_>) -> Result<Money> {
    let x = project(rates, rhs, &lhs.unit)?;
    let result = Money::new(lhs.value + x, lhs.unit.clone());
    tracing::debug!(lhs = %lhs, projected = x, result = %result, "add");
    Ok(result)
}

/// `lhs += rhs`. Unit unchanged; untouched on error.
pub fn add_assign(rates: &RateTable, lhs: &mut Money, rhs: Operand<'_>) -> Result<()> {
    let x = project(rates, rhs, &lhs.unit)?;
    lhs.value += x;
    tracing::debug!(projected = x, result = %lhs, "add_assign");
    Ok(())
}

/// `n + money`, always returned in USD.
///
/// Computed as `money + n` (so `n` is scaled by `money`'s rate), then
/// converted to USD if needed.
pub fn add_reflected(rates: &RateTable, n: f64, money: &Money) -> Result<Money> {
    let mut result = add(rates, money, Operand::Amount(n))?;
    if !result.is_reference() {
        change_to(rates, &mut result, REFERENCE_UNIT)?;
    }
    Ok(result)
}

/// `lhs - rhs`, in `lhs`'s unit.
pub fn sub(rates: &RateTable, lhs: &Money, rhs: Operand<'_>) -> Result<Money> {
    let x = project(rates, rhs, &lhs.unit)?;
    let result = Money::new(lhs.value - x, lhs.unit.clone());
    tracing::debug!(lhs = %lhs, projected = x, result = %result, "sub");
    Ok(result)
}

/// `lhs -= rhs`. Unit unchanged; untouched on error.
pub fn sub_assign(rates: &RateTable, lhs: &mut Money, rhs: Operand<'_>) -> Result<()> {
    let x = project(rates, rhs, &lhs.unit)?;
    lhs.value -= x;
    tracing::debug!(projected = x, result = %lhs, "sub_assign");
    Ok(())
}

/// `n - money`, using `money`'s raw value with no rate applied.
///
/// Returns [`Difference::Amount`] when `money` is already USD, otherwise the
/// result wrapped as USD [`Difference::Money`]. The unit is still checked
/// against `rates`.
///
/// # Example
///
/// ```
/// use fx_money::ops::sub_reflected;
/// use fx_money::rates::RateTable;
/// use fx_money::types::Money;
///
/// let rates = RateTable::standard();
/// let d = sub_reflected(&rates, 30.0, &Money::usd(19.97)).unwrap();
/// assert!(!d.is_money());
/// assert_eq!(d.to_string(), "10.03");
/// ```
pub fn sub_reflected(rates: &RateTable, n: f64, money: &Money) -> Result<Difference> {
    rates.rate(&money.unit)?;

    let raw = n - money.value;
    let result = if money.is_reference() {
        Difference::Amount(raw)
    } else {
        Difference::Money(Money::usd(raw))
    };
    tracing::debug!(n, money = %money, result = %result, "sub_reflected");
    Ok(result)
}

// ============================================================================
// Unit Tests
// ============================================================================
