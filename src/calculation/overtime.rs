//! Annual overtime and public holiday earnings.
//!
//! ## Rate Structure
//!
//! - Ordinary hours: base rate, every working week
//! - Overtime hours: base rate × 1.5, 2.0 or 2.5, every working week
//! - Public holiday hours: base rate × public holiday rate (default 2.5),
//!   counted once per year and not scaled by working weeks

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::OvertimeConfig;

/// Annual earnings split by hour type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeEarnings {
    /// Earnings for ordinary hours.
    pub regular_earnings: Decimal,
    /// Earnings for overtime hours.
    pub overtime_earnings: Decimal,
    /// Earnings for public holiday hours.
    pub public_holiday_earnings: Decimal,
    /// Sum of the three components.
    pub total_earnings: Decimal,
    /// Hours across the year (ordinary and overtime scaled by weeks, plus public holidays).
    pub total_hours: Decimal,
    /// Total earnings divided by total hours.
    pub effective_hourly_rate: Decimal,
}

/// Computes annual regular, overtime and public holiday earnings.
///
/// # Arguments
///
/// * `base_hourly_rate` - The ordinary hourly rate
/// * `config` - Weekly hours pattern and multipliers
/// * `weeks_per_year` - Working weeks the weekly pattern repeats for
///
/// # Returns
///
/// An [`OvertimeEarnings`] breakdown. When no hours are worked at all the
/// effective hourly rate falls back to `base_hourly_rate`.
///
/// # Examples
///
/// ```
/// use take_home_engine::calculation::compute_overtime_earnings;
/// use take_home_engine::models::{OvertimeConfig, OvertimeMultiplier};
/// use rust_decimal::Decimal;
///
/// let config = OvertimeConfig {
///     overtime_hours_per_week: Decimal::from(5),
///     overtime_rate: OvertimeMultiplier::TimeAndAHalf,
///     ..OvertimeConfig::regular_only(Decimal::from(38))
/// };
///
/// let earnings = compute_overtime_earnings(Decimal::from(40), &config, Decimal::from(48));
/// assert_eq!(earnings.regular_earnings, Decimal::from(72_960));
/// assert_eq!(earnings.overtime_earnings, Decimal::from(14_400));
/// assert_eq!(earnings.total_earnings, Decimal::from(87_360));
/// ```
pub fn compute_overtime_earnings(
    base_hourly_rate: Decimal,
    config: &OvertimeConfig,
    weeks_per_year: Decimal,
) -> OvertimeEarnings {
    let overtime_multiplier = config.overtime_rate.multiplier();

    let regular_earnings = base_hourly_rate * config.regular_hours_per_week * weeks_per_year;
    let overtime_earnings =
        base_hourly_rate * overtime_multiplier * config.overtime_hours_per_week * weeks_per_year;
    let public_holiday_earnings =
        base_hourly_rate * config.public_holiday_rate * config.public_holiday_hours_per_year;
    let total_earnings = regular_earnings + overtime_earnings + public_holiday_earnings;

    let total_hours = (config.regular_hours_per_week + config.overtime_hours_per_week)
        * weeks_per_year
        + config.public_holiday_hours_per_year;

    // No hours worked: report the base rate rather than dividing by zero
    let effective_hourly_rate = if total_hours.is_zero() {
        base_hourly_rate
    } else {
        total_earnings / total_hours
    };

    debug!(
        base_hourly_rate = %base_hourly_rate,
        weeks_per_year = %weeks_per_year,
        total_earnings = %total_earnings,
        effective_hourly_rate = %effective_hourly_rate,
        "Computed overtime earnings"
    );

    OvertimeEarnings {
        regular_earnings,
        overtime_earnings,
        public_holiday_earnings,
        total_earnings,
        total_hours,
        effective_hourly_rate,
    }
}
