//! A handle that binds the arithmetic to one rate table.

use crate::error::Result;
use crate::ops::{arithmetic, convert};
use crate::rates::RateTable;
use crate::types::{Difference, Money, Operand};

/// Money arithmetic against a fixed [`RateTable`].
///
/// Every method forwards to the free function of the same name in
/// [`crate::ops`], passing the bound table.
///
/// ## Example
///
/// ```
/// use fx_money::ops::Exchange;
/// use fx_money::rates::RateTable;
/// use fx_money::types::Money;
///
/// let rates = RateTable::standard();
/// let fx = Exchange::new(&rates);
///
/// let mut wallet = Money::new(10.0, "GBP");
/// fx.add_assign(&mut wallet, 5.0).unwrap();
/// fx.change_to(&mut wallet, "USD").unwrap();
/// assert_eq!(wallet.unit(), "USD");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Exchange<'r> {
    rates: &'r RateTable,
}

impl<'r> Exchange<'r> {
    /// Bind to `rates`.
    pub fn new(rates: &'r RateTable) -> Self {
        Self { rates }
    }

    /// The bound table.
    pub fn rates(&self) -> &'r RateTable {
        self.rates
    }

    /// See [`convert::change_to`].
    pub fn change_to(&self, money: &mut Money, new_unit: &str) -> Result<()> {
        convert::change_to(self.rates, money, new_unit)
    }

    /// See [`convert::converted`].
    pub fn converted(&self, money: &Money, new_unit: &str) -> Result<Money> {
        convert::converted(self.rates, money, new_unit)
    }

    /// See [`arithmetic::add`].
    pub fn add<'a>(&self, lhs: &Money, rhs: impl Into<Operand<'a>>) -> Result<Money> {
        arithmetic::add(self.rates, lhs, rhs.into())
    }

    /// See [`arithmetic::add_assign`].
    pub fn add_assign<'a>(&self, lhs: &mut Money, rhs: impl Into<Operand<'a>>) -> Result<()> {
        arithmetic::add_assign(self.rates, lhs, rhs.into())
    }

    /// See [`arithmetic::add_reflected`].
    pub fn add_reflected(&self, n: f64, money: &Money) -> Result<Money> {
        arithmetic::add_reflected(self.rates, n, money)
    }

    /// See [`arithmetic::sub`].
    pub fn sub<'a>(&self, lhs: &Money, rhs: impl Into<Operand<'a>>) -> Result<Money> {
        arithmetic::sub(self.rates, lhs, rhs.into())
    }

    /// See [`arithmetic::sub_assign`].
    pub fn sub_assign<'a>(&self, lhs: &mut Money, rhs: impl Into<Operand<'a>>) -> Result<()> {
        arithmetic::sub_assign(self.rates, lhs, rhs.into())
    }

    /// See [`arithmetic::sub_reflected`].
    pub fn sub_reflected(&self, n: f64, money: &Money) -> Result<Difference> {
        arithmetic::sub_reflected(self.rates, n, money)
    }
}
