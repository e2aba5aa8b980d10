//! FIFO roster working weeks and living-away-from-home benefits.
//!
//! A roster repeats whole on/off cycles through the year. Partial cycles at
//! the end of the year are dropped, so rosters whose cycle does not divide
//! the year evenly report fewer working weeks than they really work.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FifoRates;
use crate::models::FifoConfig;

/// Working weeks and LAFHA benefits produced by a FIFO roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FifoBenefits {
    /// Weeks actually worked on site in a year (nominal weeks when disabled).
    pub actual_working_weeks: Decimal,
    /// Complete on/off cycles in a year.
    pub cycles_per_year: u32,
    /// Cash LAFHA accommodation component.
    pub lafha_accommodation: Decimal,
    /// Cash LAFHA food component.
    pub lafha_food: Decimal,
    /// Cash LAFHA total.
    pub total_lafha: Decimal,
    /// Pay for travel hours, once per cycle.
    pub paid_travel_earnings: Decimal,
    /// Cash LAFHA plus paid travel.
    pub total_fifo_benefits: Decimal,
    /// Non-cash value of employer-provided accommodation.
    pub accommodation_value: Decimal,
    /// Non-cash value of employer-provided meals.
    pub meals_value: Decimal,
    /// False when the roster leaves no working weeks in the year.
    pub has_valid_cycles: bool,
}

/// Computes the working weeks and LAFHA benefits of a FIFO roster.
///
/// # Arguments
///
/// * `config` - The roster and LAFHA settings
/// * `base_hourly_rate` - Rate paid for travel hours
/// * `regular_hours_per_week` - Ordinary hours on site (recorded only)
/// * `nominal_weeks_per_year` - Weeks worked when not on a FIFO roster
/// * `rates` - Default weekly LAFHA amounts and calendar weeks per year
///
/// # Behaviour
///
/// - Disabled: `actual_working_weeks` is `nominal_weeks_per_year` and every
///   monetary field is zero.
/// - Enabled: `cycles = floor(weeks_per_year / cycle_weeks)` and
///   `actual_working_weeks = cycles × weeks_on`.
/// - A `lafha_per_week` override replaces both the accommodation and the food
///   weekly amount with the same value.
/// - Employer-provided accommodation or meals pay no cash component; the
///   same amount is reported as a non-cash value instead.
///
/// # Examples
///
/// ```
/// use take_home_engine::calculation::compute_fifo_benefits;
/// use take_home_engine::config::ConfigLoader;
/// use take_home_engine::models::{FifoConfig, RosterPattern};
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let fifo = FifoConfig::roster(RosterPattern::FourTwo);
///
/// let result = compute_fifo_benefits(
///     &fifo,
///     Decimal::from(45),
///     Decimal::from(38),
///     Decimal::from(52),
///     config.fifo_rates(),
/// );
/// assert_eq!(result.cycles_per_year, 8);
/// assert_eq!(result.actual_working_weeks, Decimal::from(32));
/// ```
pub fn compute_fifo_benefits(
    config: &FifoConfig,
    base_hourly_rate: Decimal,
    regular_hours_per_week: Decimal,
    nominal_weeks_per_year: Decimal,
    rates: &FifoRates,
) -> FifoBenefits {
    if !config.enabled {
        return FifoBenefits {
            actual_working_weeks: nominal_weeks_per_year,
            cycles_per_year: 0,
            lafha_accommodation: Decimal::ZERO,
            lafha_food: Decimal::ZERO,
            total_lafha: Decimal::ZERO,
            paid_travel_earnings: Decimal::ZERO,
            total_fifo_benefits: Decimal::ZERO,
            accommodation_value: Decimal::ZERO,
            meals_value: Decimal::ZERO,
            has_valid_cycles: true,
        };
    }

    let cycle_weeks = config.roster.cycle_weeks();
    // A roster with no weeks on site never completes a working cycle
    let cycles_per_year = if config.roster.weeks_on() == 0 {
        0
    } else {
        rates.weeks_per_year.checked_div(cycle_weeks).unwrap_or(0)
    };
    let actual_working_weeks = Decimal::from(cycles_per_year * config.roster.weeks_on());

    let accommodation_rate = config
        .lafha_per_week
        .unwrap_or(rates.lafha_accommodation_per_week);
    let food_rate = config.lafha_per_week.unwrap_or(rates.lafha_food_per_week);
    let accommodation_amount = accommodation_rate * actual_working_weeks;
    let food_amount = food_rate * actual_working_weeks;

    let (lafha_accommodation, accommodation_value) = if config.accommodation_provided {
        (Decimal::ZERO, accommodation_amount)
    } else {
        (accommodation_amount, Decimal::ZERO)
    };
    let (lafha_food, meals_value) = if config.meals_provided {
        (Decimal::ZERO, food_amount)
    } else {
        (food_amount, Decimal::ZERO)
    };

    let total_lafha = lafha_accommodation + lafha_food;
    let paid_travel_earnings =
        base_hourly_rate * config.paid_travel_hours * Decimal::from(cycles_per_year);

    debug!(
        roster = %config.roster,
        cycles_per_year,
        actual_working_weeks = %actual_working_weeks,
        regular_hours_per_week = %regular_hours_per_week,
        total_lafha = %total_lafha,
        "Computed FIFO benefits"
    );

    FifoBenefits {
        actual_working_weeks,
        cycles_per_year,
        lafha_accommodation,
        lafha_food,
        total_lafha,
        paid_travel_earnings,
        total_fifo_benefits: total_lafha + paid_travel_earnings,
        accommodation_value,
        meals_value,
        has_valid_cycles: actual_working_weeks > Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::RosterPattern;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> FifoRates {
        ConfigLoader::builtin().unwrap().fifo_rates().clone()
    }

    fn compute(config: &FifoConfig) -> FifoBenefits {
        compute_fifo_benefits(config, dec("45"), dec("38"), dec("48"), &rates())
    }

    #[test]
    fn test_disabled_passes_nominal_weeks_through() {
        let result = compute(&FifoConfig::disabled());

        assert_eq!(result.actual_working_weeks, dec("48"));
        assert_eq!(result.total_lafha, Decimal::ZERO);
        assert_eq!(result.paid_travel_earnings, Decimal::ZERO);
        assert_eq!(result.total_fifo_benefits, Decimal::ZERO);
        assert_eq!(result.accommodation_value, Decimal::ZERO);
        assert_eq!(result.meals_value, Decimal::ZERO);
        assert!(result.has_valid_cycles);
    }

    #[test]
    fn test_disabled_ignores_other_settings() {
        let config = FifoConfig {
            enabled: false,
            roster: RosterPattern::EightSix,
            accommodation_provided: true,
            meals_provided: true,
            lafha_per_week: Some(dec("999")),
            paid_travel_hours: dec("10"),
        };
        let result = compute(&config);
        assert_eq!(result.actual_working_weeks, dec("48"));
        assert_eq!(result.total_fifo_benefits, Decimal::ZERO);
    }

    #[test]
    fn test_four_two_roster() {
        let result = compute(&FifoConfig::roster(RosterPattern::FourTwo));
        // 52 / 6 = 8 cycles, 8 × 4 = 32 weeks
        assert_eq!(result.cycles_per_year, 8);
        assert_eq!(result.actual_working_weeks, dec("32"));
    }

    #[test]
    fn test_working_weeks_for_each_named_roster() {
        let cases = [
            (RosterPattern::TwoOne, 17, "34"),
            (RosterPattern::ThreeOne, 13, "39"),
            (RosterPattern::FourTwo, 8, "32"),
            (RosterPattern::EightSix, 3, "24"),
        ];
        for (roster, cycles, weeks) in cases {
            let result = compute(&FifoConfig::roster(roster));
            assert_eq!(result.cycles_per_year, cycles, "{}", roster);
            assert_eq!(result.actual_working_weeks, dec(weeks), "{}", roster);
        }
    }

    #[test]
    fn test_default_lafha_components() {
        let result = compute(&FifoConfig::roster(RosterPattern::FourTwo));
        assert_eq!(result.lafha_accommodation, dec("11200")); // 350 × 32
        assert_eq!(result.lafha_food, dec("10080")); // 315 × 32
        assert_eq!(result.total_lafha, dec("21280"));
        assert_eq!(result.accommodation_value, Decimal::ZERO);
        assert_eq!(result.meals_value, Decimal::ZERO);
    }

    #[test]
    fn test_provided_accommodation_and_meals_become_non_cash() {
        let config = FifoConfig {
            accommodation_provided: true,
            meals_provided: true,
            ..FifoConfig::roster(RosterPattern::FourTwo)
        };
        let result = compute(&config);

        assert_eq!(result.lafha_accommodation, Decimal::ZERO);
        assert_eq!(result.lafha_food, Decimal::ZERO);
        assert_eq!(result.total_lafha, Decimal::ZERO);
        assert_eq!(result.accommodation_value, dec("11200"));
        assert_eq!(result.meals_value, dec("10080"));
    }

    #[test]
    fn test_lafha_override_applies_to_both_components() {
        let config = FifoConfig {
            lafha_per_week: Some(dec("400")),
            ..FifoConfig::roster(RosterPattern::FourTwo)
        };
        let result = compute(&config);

        assert_eq!(result.lafha_accommodation, dec("12800"));
        assert_eq!(result.lafha_food, dec("12800"));
        assert_eq!(result.total_lafha, dec("25600"));
    }

    #[test]
    fn test_paid_travel_once_per_cycle() {
        let config = FifoConfig {
            paid_travel_hours: dec("6"),
            ..FifoConfig::roster(RosterPattern::FourTwo)
        };
        let result = compute(&config);

        // 45 × 6 × 8 cycles = 2160
        assert_eq!(result.paid_travel_earnings, dec("2160"));
        assert_eq!(result.total_fifo_benefits, dec("23440"));
    }

    #[test]
    fn test_custom_roster_truncates_partial_cycles() {
        let config = FifoConfig::roster(RosterPattern::Custom {
            weeks_on: 5,
            weeks_off: 2,
        });
        let result = compute(&config);

        // 52 / 7 = 7 cycles (49 weeks), the remaining 3 weeks are dropped
        assert_eq!(result.cycles_per_year, 7);
        assert_eq!(result.actual_working_weeks, dec("35"));
    }

    #[test]
    fn test_cycle_longer_than_year_has_no_valid_cycles() {
        let config = FifoConfig {
            paid_travel_hours: dec("8"),
            ..FifoConfig::roster(RosterPattern::Custom {
                weeks_on: 40,
                weeks_off: 20,
            })
        };
        let result = compute(&config);

        assert_eq!(result.cycles_per_year, 0);
        assert_eq!(result.actual_working_weeks, Decimal::ZERO);
        assert_eq!(result.total_fifo_benefits, Decimal::ZERO);
        assert!(!result.has_valid_cycles);
    }

    #[test]
    fn test_roster_without_weeks_on_pays_nothing() {
        let config = FifoConfig {
            paid_travel_hours: dec("6"),
            ..FifoConfig::roster(RosterPattern::Custom {
                weeks_on: 0,
                weeks_off: 2,
            })
        };
        let result = compute(&config);

        assert_eq!(result.cycles_per_year, 0);
        assert_eq!(result.actual_working_weeks, Decimal::ZERO);
        assert_eq!(result.paid_travel_earnings, Decimal::ZERO);
        assert!(!result.has_valid_cycles);
    }
}
