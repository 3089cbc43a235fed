//! Unit conversion and projection.

use crate::error::Result;
use crate::rates::RateTable;
use crate::types::{Money, Operand};

/// Rewrite `money` into `new_unit`.
///
/// `value = value / rate[unit] * rate[new_unit]`, then `unit = new_unit`.
/// Both rates are looked up before anything is written, so on error the
/// receiver is unchanged.
///
/// # Errors
///
/// [`MoneyError::UnknownCurrency`](crate::MoneyError::UnknownCurrency) if
/// either code is missing from `rates`.
///
/// # Example
///
/// ```
/// use fx_money::ops::change_to;
/// use fx_money::rates::RateTable;
/// use fx_money::types::Money;
///
/// let rates = RateTable::standard();
/// let mut m = Money::new(1.0, "USD");
/// change_to(&rates, &mut m, "EUR").unwrap();
/// assert_eq!(m.unit(), "EUR");
/// assert_eq!(m.value(), 0.862361);
/// ```
pub fn change_to(rates: &RateTable, money: &mut Money, new_unit: &str) -> Result<()> {
    let from = rates.rate(&money.unit)?;
    let to = rates.rate(new_unit)?;

    let value = money.value / from * to;
    tracing::debug!(
        from_unit = %money.unit,
        to_unit = new_unit,
        from_value = money.value,
        to_value = value,
        "changed unit"
    );

    money.value = value;
    money.unit = new_unit.to_string();
    Ok(())
}

/// Non-mutating [`change_to`]: returns a converted copy.
pub fn converted(rates: &RateTable, money: &Money, new_unit: &str) -> Result<Money> {
    let mut copy = money.clone();
    change_to(rates, &mut copy, new_unit)?;
    Ok(copy)
}

/// Express `operand` on the scale of `target_unit`.
///
/// * `Amount(n)` -> `n * rate[target_unit]`
/// * `Money(m)` -> `m.value / rate[m.unit] * rate[target_unit]`
///
/// A bare number is therefore read as USD and scaled into the target unit.
pub fn project(rates: &RateTable, operand: Operand<'_>, target_unit: &str) -> Result<f64> {
    match operand {
        Operand::Amount(n) => Ok(n * rates.rate(target_unit)?),
        Operand::Money(m) => {
            let from = rates.rate(&m.unit)?;
            Ok(m.value / from * rates.rate(target_unit)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoneyError;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS * expected.abs().max(1.0),
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_change_to() {
        let rates = RateTable::standard();
        let mut m = Money::new(23.43, "EUR");
        change_to(&rates, &mut m, "JPY").unwrap();
        assert_eq!(m.unit(), "JPY");
        assert_close(m.value(), 3016.366350252388);
    }

    #[test]
    fn test_change_to_same_unit() {
        let rates = RateTable::standard();
        let mut m = Money::new(19.97, "USD");
        change_to(&rates, &mut m, "USD").unwrap();
        assert_eq!(m, Money::new(19.97, "USD"));
    }

    #[test]
    fn test_change_to_roundtrip() {
        let rates = RateTable::standard();
        let mut m = Money::new(100.0, "GBP");
        change_to(&rates, &mut m, "CAD").unwrap();
        change_to(&rates, &mut m, "GBP").unwrap();
        assert_eq!(m.unit(), "GBP");
        assert_close(m.value(), 100.0);
    }

    #[test]
    fn test_change_to_unknown_leaves_receiver() {
        let rates = RateTable::standard();

        let mut m = Money::new(5.0, "EUR");
        let err = change_to(&rates, &mut m, "XYZ").unwrap_err();
        assert_eq!(err, MoneyError::UnknownCurrency("XYZ".to_string()));
        assert_eq!(m, Money::new(5.0, "EUR"));

        let mut bad = Money::new(5.0, "XYZ");
        assert!(change_to(&rates, &mut bad, "USD").is_err());
        assert_eq!(bad, Money::new(5.0, "XYZ"));
    }

    #[test]
    fn test_converted() {
        let rates = RateTable::standard();
        let m = Money::new(1.0, "USD");
        let eur = converted(&rates, &m, "EUR").unwrap();
        assert_eq!(eur.unit(), "EUR");
        assert_close(eur.value(), 0.862361);
        // Source untouched
        assert_eq!(m, Money::new(1.0, "USD"));
    }

    #[test]
    fn test_project() {
        let rates = RateTable::standard();
        assert_close(project(&rates, Operand::Amount(3.0), "EUR").unwrap(), 2.587083);

        let usd = Money::usd(19.97);
        assert_close(project(&rates, Operand::Money(&usd), "EUR").unwrap(), 17.22134917);

        assert!(project(&rates, Operand::Amount(1.0), "XYZ").is_err());
    }
}
