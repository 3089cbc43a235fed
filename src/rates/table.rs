//! Rate table storage and lookup.

use std::collections::BTreeMap;

use crate::error::{MoneyError, Result};

/// Code of the reference unit. Its factor is always 1.0.
pub const REFERENCE_UNIT: &str = "USD";

/// Compiled-in factors, relative to USD.
pub const STANDARD_RATES: [(&str, f64); 6] = [
    ("CHF", 0.930023),   // Swiss franc
    ("CAD", 1.264553),   // Canadian dollar
    ("GBP", 0.737414),   // British pound
    ("JPY", 111.019919), // Japanese yen
    ("EUR", 0.862361),   // Euro
    ("USD", 1.0),        // US dollar
];

/// Immutable mapping from unit code to conversion factor.
///
/// There is no way to change an entry after construction. Build one table
/// at startup and hand out `&RateTable` to everything that needs it.
///
/// ## Example
///
/// ```
/// use fx_money::rates::RateTable;
///
/// let rates = RateTable::from_rates([("USD", 1.0), ("EUR", 0.9)]).unwrap();
/// assert_eq!(rates.len(), 2);
/// assert_eq!(rates.rate("EUR").unwrap(), 0.9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    /// Code -> factor. BTreeMap keeps `codes()` sorted without extra work.
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// The standard six-currency table.
    pub fn standard() -> Self {
        let rates = STANDARD_RATES
            .iter()
            .map(|(code, rate)| ((*code).to_string(), *rate))
            .collect();
        Self { rates }
    }

    /// Build a custom table.
    ///
    /// # Errors
    ///
    /// * [`MoneyError::InvalidRate`] - a factor is zero, negative, NaN or infinite
    /// * [`MoneyError::MissingReference`] - no USD entry, or USD is not 1.0
    pub fn from_rates<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut rates = BTreeMap::new();
        for (code, rate) in entries {
            let code = code.into();
            if !rate.is_finite() || rate <= 0.0 {
                return Err(MoneyError::InvalidRate { code, rate });
            }
            rates.insert(code, rate);
        }

        match rates.get(REFERENCE_UNIT) {
            Some(rate) if *rate == 1.0 => {}
            _ => return Err(MoneyError::MissingReference),
        }

        tracing::debug!(entries = rates.len(), "built custom rate table");
        Ok(Self { rates })
    }

    /// Look up the factor for `code`.
    ///
    /// # Errors
    ///
    /// [`MoneyError::UnknownCurrency`] when the code is not in the table.
    /// Lookup is case-sensitive.
    pub fn rate(&self, code: &str) -> Result<f64> {
        match self.rates.get(code) {
            Some(rate) => Ok(*rate),
            None => {
                tracing::debug!(code, "unknown currency code");
                Err(MoneyError::UnknownCurrency(code.to_string()))
            }
        }
    }

    /// Whether `code` has an entry.
    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// All known codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True if the table has no entries. Never true for a successfully built table.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
