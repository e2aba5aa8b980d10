//! Allowance configuration model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::scenario::{MAX_WEEKLY_AMOUNT, ensure_within};

/// Weekly allowances paid on top of hourly earnings.
///
/// Every amount is per week and defaults to zero when absent. Meal
/// allowances are expressed as a number of days per week plus which meals
/// are covered; the per-meal amounts come from the reference tables.
///
/// # Example
///
/// ```
/// use take_home_engine::models::AllowancesConfig;
/// use rust_decimal::Decimal;
///
/// let config: AllowancesConfig = serde_json::from_str(r#"{ "tool_allowance": "20" }"#).unwrap();
/// assert_eq!(config.tool_allowance, Decimal::from(20));
/// assert_eq!(config.car_allowance, Decimal::ZERO);
/// assert!(!config.includes_breakfast);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowancesConfig {
    /// Car allowance per week.
    pub car_allowance: Decimal,
    /// Tool allowance per week.
    pub tool_allowance: Decimal,
    /// Travel allowance per week.
    pub travel_allowance: Decimal,
    /// Leading hand allowance per week.
    pub leading_hand_allowance: Decimal,
    /// First aid allowance per week.
    pub first_aid_allowance: Decimal,
    /// Days per week on which meal allowances are paid.
    pub meal_allowance_days_per_week: Decimal,
    /// Whether breakfast is covered on meal allowance days.
    pub includes_breakfast: bool,
    /// Whether lunch is covered on meal allowance days.
    pub includes_lunch: bool,
    /// Whether dinner is covered on meal allowance days.
    pub includes_dinner: bool,
    /// Treat the car allowance as tax free (e.g. paid under cents-per-km limits).
    pub car_allowance_tax_free: bool,
}

impl AllowancesConfig {
    /// Checks every weekly amount and the meal day count against its range.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("car_allowance", self.car_allowance),
            ("tool_allowance", self.tool_allowance),
            ("travel_allowance", self.travel_allowance),
            ("leading_hand_allowance", self.leading_hand_allowance),
            ("first_aid_allowance", self.first_aid_allowance),
        ];
        for (field, value) in fields {
            ensure_within(field, value, MAX_WEEKLY_AMOUNT)?;
        }
        ensure_within("meal_allowance_days_per_week", self.meal_allowance_days_per_week, 7)
    }

    /// Returns true if no allowance of any kind is configured.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_empty_json_deserializes_to_default() {
        let config: AllowancesConfig = serde_json::from_str("{}").unwrap();
        assert!(config.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_meal_flags() {
        let json = r#"{
            "meal_allowance_days_per_week": "5",
            "includes_lunch": true,
            "includes_dinner": true
        }"#;
        let config: AllowancesConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.meal_allowance_days_per_week, Decimal::from(5));
        assert!(!config.includes_breakfast);
        assert!(config.includes_lunch);
        assert!(config.includes_dinner);
        assert!(!config.is_empty());
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let config = AllowancesConfig {
            travel_allowance: Decimal::from(-10),
            ..Default::default()
        };
        match config.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "travel_allowance"),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_validate_rejects_oversized_weekly_amount() {
        let config = AllowancesConfig {
            car_allowance: Decimal::from(MAX_WEEKLY_AMOUNT) + Decimal::ONE,
            ..Default::default()
        };
        match config.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "car_allowance"),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_validate_rejects_more_than_seven_meal_days() {
        let config = AllowancesConfig {
            meal_allowance_days_per_week: Decimal::from(8),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
