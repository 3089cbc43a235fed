//! The currency-tagged money value.
//!
//! ## Representation
//!
//! A [`Money`] is a plain `f64` magnitude plus the code of the unit it is
//! measured in. The code is not checked at construction; it is checked the
//! first time it is looked up in a [`RateTable`](crate::rates::RateTable).
//!
//! ## Display
//!
//! Both `Display` and `Debug` render `"<value> <unit>"` with the value rounded
//! to two decimal places and always padded to two digits:
//!
//! ```
//! use fx_money::types::Money;
//!
//! let m = Money::new(41.2138, "EUR");
//! assert_eq!(m.to_string(), "41.21 EUR");
//! assert_eq!(format!("{:?}", m), "41.21 EUR");
//! ```

use std::fmt;

use rust_decimal::Decimal;

use crate::rates::REFERENCE_UNIT;

/// Decimal places shown when formatting.
pub const DISPLAY_DP: u32 = 2;

/// A monetary amount tagged with its unit code.
///
/// ## Example
///
/// ```
/// use fx_money::types::Money;
///
/// let price = Money::new(23.43, "EUR");
/// assert_eq!(price.value(), 23.43);
/// assert_eq!(price.unit(), "EUR");
///
/// // Default unit is USD
/// assert_eq!(Money::usd(19.97).unit(), "USD");
/// ```
#[derive(Clone, PartialEq)]
pub struct Money {
    /// Magnitude, measured in `unit`
    pub(crate) value: f64,

    /// Unit code, e.g. "EUR"
    pub(crate) unit: String,
}

impl Money {
    /// Create a value in the given unit. The unit is not validated here.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Create a value in the reference unit (USD).
    pub fn usd(value: f64) -> Self {
        Self::new(value, REFERENCE_UNIT)
    }

    /// Magnitude in [`Money::unit`].
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit code.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// True if this value is already in the reference unit.
    pub fn is_reference(&self) -> bool {
        self.unit == REFERENCE_UNIT
    }

    /// Value rounded for display, or `None` when it cannot be represented as a
    /// `Decimal` (NaN, infinities, magnitudes above ~7.9e28).
    pub fn rounded(&self) -> Option<Decimal> {
        round_for_display(self.value)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::usd(0.0)
    }
}

/// Round half-to-even at [`DISPLAY_DP`] places.
///
/// The float is converted with its full binary expansion so only one rounding
/// step happens: 2.675 is stored as 2.67499..., so it shows as 2.67.
pub(crate) fn round_for_display(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value).map(|d| d.round_dp(DISPLAY_DP))
}

/// Write `value` with exactly two decimals.
pub(crate) fn write_amount(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    match round_for_display(value) {
        Some(d) => write!(f, "{:.2}", d),
        // Out of Decimal range: let the float formatter handle it
        None => write!(f, "{:.2}", value),
    }
}

/// Renders `"<value> <unit>"`.
///
/// The value is always padded to two decimals, so 26.0 USD prints as
/// `26.00 USD` rather than `26.0 USD`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_amount(f, self.value)?;
        write!(f, " {}", self.unit)
    }
}

// There is no separate technical form.
impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
