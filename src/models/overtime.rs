//! Overtime configuration model.
//!
//! Defines the [`OvertimeConfig`] consumed by the overtime engine and the
//! closed set of overtime multipliers a worker can be paid at.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::scenario::{MAX_HOURS_PER_WEEK, MAX_HOURS_PER_YEAR, MAX_RATE_MULTIPLIER, ensure_within};

/// Public holiday multiplier used when none is supplied (250%).
pub const DEFAULT_PUBLIC_HOLIDAY_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// The overtime multiplier applied to the base hourly rate.
///
/// Serialized as its numeric multiplier, so `1.5`, `"1.5"` and `2` are all
/// accepted in JSON and YAML.
///
/// # Example
///
/// ```
/// use take_home_engine::models::OvertimeMultiplier;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let multiplier = OvertimeMultiplier::try_from(Decimal::from_str("2.0").unwrap()).unwrap();
/// assert_eq!(multiplier, OvertimeMultiplier::DoubleTime);
/// assert_eq!(multiplier.multiplier(), Decimal::from(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub enum OvertimeMultiplier {
    /// Time and a half (150%).
    #[default]
    TimeAndAHalf,
    /// Double time (200%).
    DoubleTime,
    /// Double time and a half (250%).
    DoubleTimeAndAHalf,
}

impl OvertimeMultiplier {
    /// Returns the multiplier as a decimal (e.g. 1.5).
    pub fn multiplier(self) -> Decimal {
        match self {
            OvertimeMultiplier::TimeAndAHalf => Decimal::new(15, 1),
            OvertimeMultiplier::DoubleTime => Decimal::new(20, 1),
            OvertimeMultiplier::DoubleTimeAndAHalf => Decimal::new(25, 1),
        }
    }
}

impl TryFrom<Decimal> for OvertimeMultiplier {
    type Error = EngineError;

    fn try_from(value: Decimal) -> EngineResult<Self> {
        [
            OvertimeMultiplier::TimeAndAHalf,
            OvertimeMultiplier::DoubleTime,
            OvertimeMultiplier::DoubleTimeAndAHalf,
        ]
        .into_iter()
        .find(|m| m.multiplier() == value)
        .ok_or_else(|| {
            EngineError::invalid_input(
                "overtime_rate",
                format!("{} is not one of 1.5, 2.0 or 2.5", value.normalize()),
            )
        })
    }
}

impl From<OvertimeMultiplier> for Decimal {
    fn from(value: OvertimeMultiplier) -> Self {
        value.multiplier()
    }
}

/// Weekly hours pattern and penalty multipliers for an overtime calculation.
///
/// Optional inputs are resolved to their defaults at construction (or
/// deserialization) so every calculation over the same config is identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeConfig {
    /// Ordinary hours worked each week.
    pub regular_hours_per_week: Decimal,
    /// Overtime hours worked each week.
    #[serde(default)]
    pub overtime_hours_per_week: Decimal,
    /// Multiplier applied to overtime hours.
    #[serde(default)]
    pub overtime_rate: OvertimeMultiplier,
    /// Public holiday hours worked across the whole year.
    #[serde(default)]
    pub public_holiday_hours_per_year: Decimal,
    /// Multiplier applied to public holiday hours.
    #[serde(default = "default_public_holiday_rate")]
    pub public_holiday_rate: Decimal,
}

fn default_public_holiday_rate() -> Decimal {
    DEFAULT_PUBLIC_HOLIDAY_RATE
}

impl OvertimeConfig {
    /// Creates a config with only ordinary hours and no overtime or public holidays.
    pub fn regular_only(regular_hours_per_week: Decimal) -> Self {
        Self {
            regular_hours_per_week,
            overtime_hours_per_week: Decimal::ZERO,
            overtime_rate: OvertimeMultiplier::default(),
            public_holiday_hours_per_year: Decimal::ZERO,
            public_holiday_rate: DEFAULT_PUBLIC_HOLIDAY_RATE,
        }
    }

    /// Checks every hour value and the public holiday rate against its range.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("regular_hours_per_week", self.regular_hours_per_week, MAX_HOURS_PER_WEEK),
            ("overtime_hours_per_week", self.overtime_hours_per_week, MAX_HOURS_PER_WEEK),
            (
                "public_holiday_hours_per_year",
                self.public_holiday_hours_per_year,
                MAX_HOURS_PER_YEAR,
            ),
            ("public_holiday_rate", self.public_holiday_rate, MAX_RATE_MULTIPLIER),
        ];
        for (field, value, max) in fields {
            ensure_within(field, value, max)?;
        }
        Ok(())
    }
}
