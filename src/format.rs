//! Display formatting for monetary amounts.

use rust_decimal::Decimal;

use crate::calculation::round_currency;

/// Formats an amount as Australian dollars with thousands separators.
///
/// Amounts are rounded to cents, half away from zero. Negative amounts put
/// the sign before the dollar symbol.
///
/// # Examples
///
/// ```
/// use take_home_engine::format::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("54908").unwrap()), "$54,908.00");
/// assert_eq!(format_currency(Decimal::from_str("-14582.4").unwrap()), "-$14,582.40");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let negative = rounded < Decimal::ZERO;
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", if negative { "-" } else { "" }, grouped, cents)
}
