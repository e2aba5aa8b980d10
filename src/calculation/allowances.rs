//! Annual allowance totals and their tax-free / taxable split.
//!
//! ## Tax Treatment
//!
//! - Meal allowances: tax free up to the ATO reasonable amounts
//! - Tool allowance: tax free up to a fixed weekly amount, excess taxable
//! - Car allowance: tax free only when flagged, otherwise taxable
//! - Travel, leading hand and first aid allowances: always taxable

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AllowanceRates;
use crate::models::AllowancesConfig;

use super::common::clamp_non_negative;

/// Annual allowance amounts by type plus the tax-free split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    /// Annual car allowance.
    pub car_allowance: Decimal,
    /// Annual tool allowance.
    pub tool_allowance: Decimal,
    /// Annual meal allowance.
    pub meal_allowance: Decimal,
    /// Annual travel allowance.
    pub travel_allowance: Decimal,
    /// Annual leading hand and first aid allowances.
    pub other_allowances: Decimal,
    /// Sum of every allowance.
    pub total_allowances: Decimal,
    /// Portion of the total that is not assessable income.
    pub tax_free_allowances: Decimal,
    /// Portion of the total that is assessable income.
    pub taxable_allowances: Decimal,
}

impl AllowanceBreakdown {
    /// A breakdown with every amount zero.
    pub fn zero() -> Self {
        Self {
            car_allowance: Decimal::ZERO,
            tool_allowance: Decimal::ZERO,
            meal_allowance: Decimal::ZERO,
            travel_allowance: Decimal::ZERO,
            other_allowances: Decimal::ZERO,
            total_allowances: Decimal::ZERO,
            tax_free_allowances: Decimal::ZERO,
            taxable_allowances: Decimal::ZERO,
        }
    }
}

/// Computes annual allowances and splits them into tax-free and taxable portions.
///
/// # Arguments
///
/// * `config` - Weekly allowance amounts and meal settings
/// * `weeks_per_year` - Weeks the allowances are paid for
/// * `rates` - Reasonable meal amounts and the tool allowance tax-free cap
///
/// # Examples
///
/// ```
/// use take_home_engine::calculation::compute_allowances;
/// use take_home_engine::config::ConfigLoader;
/// use take_home_engine::models::AllowancesConfig;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let allowances = AllowancesConfig {
///     tool_allowance: Decimal::from(20),
///     ..Default::default()
/// };
///
/// let result = compute_allowances(&allowances, Decimal::from(48), config.allowance_rates());
/// assert_eq!(result.tool_allowance, Decimal::from(960));
/// // $12 a week is tax free, the other $8 a week is taxable
/// assert_eq!(result.tax_free_allowances, Decimal::from(576));
/// assert_eq!(result.taxable_allowances, Decimal::from(384));
/// ```
pub fn compute_allowances(
    config: &AllowancesConfig,
    weeks_per_year: Decimal,
    rates: &AllowanceRates,
) -> AllowanceBreakdown {
    if config.is_empty() {
        return AllowanceBreakdown::zero();
    }

    let car_allowance = config.car_allowance * weeks_per_year;
    let tool_allowance = config.tool_allowance * weeks_per_year;
    let travel_allowance = config.travel_allowance * weeks_per_year;
    let other_allowances =
        (config.leading_hand_allowance + config.first_aid_allowance) * weeks_per_year;

    let meal_days = config.meal_allowance_days_per_week * weeks_per_year;
    let meal_rates = &rates.meal_rates;
    let daily_meal_rate = [
        (config.includes_breakfast, meal_rates.breakfast),
        (config.includes_lunch, meal_rates.lunch),
        (config.includes_dinner, meal_rates.dinner),
    ]
    .into_iter()
    .filter(|(included, _)| *included)
    .map(|(_, rate)| rate)
    .sum::<Decimal>();
    let meal_allowance = daily_meal_rate * meal_days;

    let total_allowances =
        car_allowance + tool_allowance + meal_allowance + travel_allowance + other_allowances;

    let tool_tax_free_cap = rates.tool_tax_free_per_week * weeks_per_year;
    let tax_free_tool = tool_allowance.min(tool_tax_free_cap);
    let tax_free_car = if config.car_allowance_tax_free {
        car_allowance
    } else {
        Decimal::ZERO
    };
    let tax_free_allowances = meal_allowance + tax_free_tool + tax_free_car;
    let taxable_allowances = clamp_non_negative(total_allowances - tax_free_allowances);

    debug!(
        weeks_per_year = %weeks_per_year,
        total_allowances = %total_allowances,
        tax_free_allowances = %tax_free_allowances,
        "Computed allowances"
    );

    AllowanceBreakdown {
        car_allowance,
        tool_allowance,
        meal_allowance,
        travel_allowance,
        other_allowances,
        total_allowances,
        tax_free_allowances,
        taxable_allowances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> AllowanceRates {
        ConfigLoader::builtin().unwrap().allowance_rates().clone()
    }

    #[test]
    fn test_no_allowances_is_all_zero() {
        let result = compute_allowances(&AllowancesConfig::default(), dec("48"), &rates());
        assert_eq!(result, AllowanceBreakdown::zero());
    }

    #[test]
    fn test_weekly_amounts_scale_by_weeks() {
        let config = AllowancesConfig {
            car_allowance: dec("50"),
            travel_allowance: dec("30"),
            leading_hand_allowance: dec("25"),
            first_aid_allowance: dec("15"),
            ..Default::default()
        };

        let result = compute_allowances(&config, dec("48"), &rates());
        assert_eq!(result.car_allowance, dec("2400"));
        assert_eq!(result.travel_allowance, dec("1440"));
        assert_eq!(result.other_allowances, dec("1920"));
        assert_eq!(result.total_allowances, dec("5760"));
        // Nothing here is tax free
        assert_eq!(result.tax_free_allowances, Decimal::ZERO);
        assert_eq!(result.taxable_allowances, dec("5760"));
    }

    #[test]
    fn test_meal_allowance_sums_included_meals_only() {
        let config = AllowancesConfig {
            meal_allowance_days_per_week: dec("5"),
            includes_lunch: true,
            includes_dinner: true,
            ..Default::default()
        };

        let result = compute_allowances(&config, dec("48"), &rates());
        // (33.25 + 59.00) × 5 × 48 = 22140
        assert_eq!(result.meal_allowance, dec("22140"));
        assert_eq!(result.tax_free_allowances, dec("22140"));
        assert_eq!(result.taxable_allowances, Decimal::ZERO);
    }

    #[test]
    fn test_all_three_meals() {
        let config = AllowancesConfig {
            meal_allowance_days_per_week: dec("1"),
            includes_breakfast: true,
            includes_lunch: true,
            includes_dinner: true,
            ..Default::default()
        };

        let result = compute_allowances(&config, dec("1"), &rates());
        assert_eq!(result.meal_allowance, dec("121.00"));
    }

    #[test]
    fn test_meal_flags_without_days_pay_nothing() {
        let config = AllowancesConfig {
            includes_breakfast: true,
            ..Default::default()
        };

        let result = compute_allowances(&config, dec("48"), &rates());
        assert_eq!(result.meal_allowance, Decimal::ZERO);
    }

    #[test]
    fn test_tool_allowance_below_cap_is_fully_tax_free() {
        let config = AllowancesConfig {
            tool_allowance: dec("10"),
            ..Default::default()
        };

        let result = compute_allowances(&config, dec("48"), &rates());
        assert_eq!(result.tax_free_allowances, dec("480"));
        assert_eq!(result.taxable_allowances, Decimal::ZERO);
    }

    #[test]
    fn test_tool_allowance_excess_is_taxable() {
        let config = AllowancesConfig {
            tool_allowance: dec("20"),
            ..Default::default()
        };

        let result = compute_allowances(&config, dec("48"), &rates());
        assert_eq!(result.tax_free_allowances, dec("576"));
        assert_eq!(result.taxable_allowances, dec("384"));
    }

    #[test]
    fn test_car_allowance_tax_free_only_when_flagged() {
        let mut config = AllowancesConfig {
            car_allowance: dec("100"),
            ..Default::default()
        };

        let taxable = compute_allowances(&config, dec("48"), &rates());
        assert_eq!(taxable.taxable_allowances, dec("4800"));

        config.car_allowance_tax_free = true;
        let tax_free = compute_allowances(&config, dec("48"), &rates());
        assert_eq!(tax_free.tax_free_allowances, dec("4800"));
        assert_eq!(tax_free.taxable_allowances, Decimal::ZERO);
    }

    #[test]
    fn test_split_always_sums_to_total() {
        let config = AllowancesConfig {
            car_allowance: dec("80"),
            tool_allowance: dec("25"),
            travel_allowance: dec("40"),
            leading_hand_allowance: dec("30"),
            meal_allowance_days_per_week: dec("3"),
            includes_dinner: true,
            car_allowance_tax_free: true,
            ..Default::default()
        };

        let result = compute_allowances(&config, dec("46"), &rates());
        assert_eq!(
            result.tax_free_allowances + result.taxable_allowances,
            result.total_allowances
        );
        assert!(result.taxable_allowances >= Decimal::ZERO);
    }
}
