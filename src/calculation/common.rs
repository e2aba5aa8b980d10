//! Shared numeric helpers for the calculation engines.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to whole cents, half away from zero.
///
/// # Examples
///
/// ```
/// use take_home_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let d = |s: &str| Decimal::from_str(s).unwrap();
/// assert_eq!(round_currency(d("1143.916666")), d("1143.92"));
/// assert_eq!(round_currency(d("0.005")), d("0.01"));
/// assert_eq!(round_currency(d("-0.005")), d("-0.01"));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Divides, returning zero instead of failing when the denominator is zero.
pub fn divide_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// Clamps a negative aggregate to zero.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_currency_rounds_down_below_midpoint() {
        assert_eq!(round_currency(dec("123.454")), dec("123.45"));
    }

    #[test]
    fn test_round_currency_rounds_up_at_midpoint() {
        assert_eq!(round_currency(dec("123.455")), dec("123.46"));
    }

    #[test]
    fn test_round_currency_preserves_whole_cents() {
        assert_eq!(round_currency(dec("40325.60")), dec("40325.60"));
    }

    #[test]
    fn test_divide_or_zero_guards_zero_denominator() {
        assert_eq!(divide_or_zero(dec("100"), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(divide_or_zero(dec("100"), dec("4")), dec("25"));
    }

    #[test]
    fn test_clamp_non_negative() {
        assert_eq!(clamp_non_negative(dec("-5")), Decimal::ZERO);
        assert_eq!(clamp_non_negative(dec("5")), dec("5"));
    }
}
