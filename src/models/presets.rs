//! Trade preset and preset scenario reference records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::ComparisonInputs;

/// Typical pay settings for a trade, used to prefill the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradePreset {
    /// Stable identifier (e.g. "carpenter").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Lowest typical hourly rate.
    pub hourly_rate_min: Decimal,
    /// Highest typical hourly rate.
    pub hourly_rate_max: Decimal,
    /// Rate used when the preset is selected.
    pub default_hourly_rate: Decimal,
    /// Typical hours per week.
    pub typical_hours: Decimal,
    /// Typical share of ABN gross income spent on deductible expenses.
    pub typical_expense_rate: Decimal,
    /// Short description of the work.
    pub description: String,
}

impl TradePreset {
    /// Checks `hourly_rate_min <= default_hourly_rate <= hourly_rate_max`
    /// and that the expense rate lies in [0, 1].
    pub fn validate(&self) -> EngineResult<()> {
        if self.hourly_rate_min > self.default_hourly_rate
            || self.default_hourly_rate > self.hourly_rate_max
        {
            return Err(EngineError::invalid_input(
                format!("trades.{}.default_hourly_rate", self.id),
                format!(
                    "{} is outside the range {} to {}",
                    self.default_hourly_rate.normalize(),
                    self.hourly_rate_min.normalize(),
                    self.hourly_rate_max.normalize()
                ),
            ));
        }
        if self.typical_expense_rate < Decimal::ZERO || self.typical_expense_rate > Decimal::ONE {
            return Err(EngineError::invalid_input(
                format!("trades.{}.typical_expense_rate", self.id),
                "must be between 0 and 1",
            ));
        }
        Ok(())
    }

    /// Comparison inputs at the default rate for both structures.
    pub fn to_comparison_inputs(
        &self,
        weeks_per_year: Decimal,
        include_super: bool,
    ) -> ComparisonInputs {
        ComparisonInputs {
            tfn_hourly_rate: self.default_hourly_rate,
            abn_hourly_rate: self.default_hourly_rate,
            hours_per_week: self.typical_hours,
            weeks_per_year,
            expense_rate: self.typical_expense_rate,
            include_super,
        }
    }
}

/// A canned TFN versus ABN comparison for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetScenario {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The [`TradePreset`] this scenario belongs to.
    pub trade_id: String,
    /// Hourly rate as an employee.
    pub tfn_hourly_rate: Decimal,
    /// Hourly rate as a contractor.
    pub abn_hourly_rate: Decimal,
    /// Hours worked per week.
    pub hours_per_week: Decimal,
    /// Weeks worked per year.
    pub weeks_per_year: Decimal,
    /// Share of ABN gross income spent on deductible expenses.
    pub expense_rate: Decimal,
    /// Whether the contractor funds their own super.
    pub include_super: bool,
    /// Short description of the scenario.
    pub description: String,
}

impl PresetScenario {
    /// Logs when the contractor rate does not carry the usual premium.
    ///
    /// This is expected rather than enforced, so it never fails.
    pub fn check_rate_premium(&self) {
        if self.abn_hourly_rate <= self.tfn_hourly_rate {
            warn!(
                scenario = %self.id,
                tfn_rate = %self.tfn_hourly_rate,
                abn_rate = %self.abn_hourly_rate,
                "Preset ABN rate does not exceed TFN rate"
            );
        }
    }

    /// The raw comparison inputs this scenario describes.
    pub fn to_comparison_inputs(&self) -> ComparisonInputs {
        ComparisonInputs {
            tfn_hourly_rate: self.tfn_hourly_rate,
            abn_hourly_rate: self.abn_hourly_rate,
            hours_per_week: self.hours_per_week,
            weeks_per_year: self.weeks_per_year,
            expense_rate: self.expense_rate,
            include_super: self.include_super,
        }
    }
}
