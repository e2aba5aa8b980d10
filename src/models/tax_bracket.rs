//! Progressive income tax bracket model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single bracket of the resident income tax scale.
///
/// A bracket covers the half-open interval `[lower_bound, upper_bound)`. Tax
/// for income inside the bracket is `base_tax + marginal_rate * (income -
/// lower_bound)`. The top bracket has no upper bound.
///
/// # Example
///
/// ```
/// use take_home_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let bracket = TaxBracket {
///     lower_bound: Decimal::from(45_000),
///     upper_bound: Some(Decimal::from(135_000)),
///     marginal_rate: Decimal::from_str("0.30").unwrap(),
///     base_tax: Decimal::from(4_288),
/// };
/// assert!(bracket.contains(Decimal::from(60_000)));
/// assert!(!bracket.contains(Decimal::from(135_000)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound of taxable income for this bracket.
    pub lower_bound: Decimal,
    /// Exclusive upper bound, or `None` for the top bracket.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Rate applied to each dollar above `lower_bound` (e.g. 0.30 for 30%).
    pub marginal_rate: Decimal,
    /// Tax payable on income up to `lower_bound`.
    pub base_tax: Decimal,
}

impl TaxBracket {
    /// Returns true if `income` falls inside `[lower_bound, upper_bound)`.
    pub fn contains(&self, income: Decimal) -> bool {
        income >= self.lower_bound && self.upper_bound.is_none_or(|upper| income < upper)
    }

    /// Tax payable for an income inside this bracket.
    pub fn tax_for(&self, income: Decimal) -> Decimal {
        self.base_tax + self.marginal_rate * (income - self.lower_bound)
    }
}
