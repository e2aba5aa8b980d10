//! Scenario input models.
//!
//! Inputs are snapshotted into these immutable values before any engine
//! function runs, so a calculation never sees a half-updated input set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{AllowancesConfig, FifoConfig, OvertimeConfig};

/// Highest accepted hourly rate.
pub const MAX_HOURLY_RATE: u32 = 10_000;

/// Hours in a week.
pub const MAX_HOURS_PER_WEEK: u32 = 168;

/// Highest accepted weeks per year (a year can hold 53 pay weeks).
pub const MAX_WEEKS_PER_YEAR: u32 = 53;

/// Hours in a leap year.
pub const MAX_HOURS_PER_YEAR: u32 = 8_784;

/// Highest accepted penalty rate multiplier.
pub const MAX_RATE_MULTIPLIER: u32 = 10;

/// Highest accepted weekly allowance or LAFHA amount.
pub const MAX_WEEKLY_AMOUNT: u32 = 100_000;

/// Fails with `InvalidInput` if `value` is negative or greater than `max`.
///
/// The upper bounds keep every product of rate, hours and weeks far inside
/// the range of `Decimal`.
pub(crate) fn ensure_within(field: &str, value: Decimal, max: u32) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::invalid_input(field, "must not be negative"));
    }
    if value > Decimal::from(max) {
        return Err(EngineError::invalid_input(field, format!("must not exceed {}", max)));
    }
    Ok(())
}

/// Fails with `InvalidInput` if `value` is outside [0, 1].
pub(crate) fn ensure_fraction(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(EngineError::invalid_input(field, "must be between 0 and 1"));
    }
    Ok(())
}

/// The legal structure a worker is engaged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    /// Employee quoting a Tax File Number (PAYG withholding).
    Tfn,
    /// Contractor invoicing under an Australian Business Number.
    Abn,
}

/// Structure-specific settings for a layered calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkStructure {
    /// Employee: no general deductions, employer-paid super.
    Tfn,
    /// Contractor: deductible expenses and optional self-funded super.
    Abn {
        /// Share of labour earnings spent on deductible expenses.
        expense_rate: Decimal,
        /// Whether the contractor pays their own super out of net pay.
        include_super: bool,
    },
}

impl WorkStructure {
    /// The structure without its settings.
    pub fn kind(self) -> StructureKind {
        match self {
            WorkStructure::Tfn => StructureKind::Tfn,
            WorkStructure::Abn { .. } => StructureKind::Abn,
        }
    }
}

/// Raw inputs for a side-by-side TFN and ABN comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonInputs {
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
}

impl ComparisonInputs {
    /// Same hourly rate under both structures.
    pub fn same_rate(
        hourly_rate: Decimal,
        hours_per_week: Decimal,
        weeks_per_year: Decimal,
        expense_rate: Decimal,
        include_super: bool,
    ) -> Self {
        Self {
            tfn_hourly_rate: hourly_rate,
            abn_hourly_rate: hourly_rate,
            hours_per_week,
            weeks_per_year,
            expense_rate,
            include_super,
        }
    }

    /// Rejects rates, hours or weeks that are negative or out of range, and
    /// an expense rate outside [0, 1].
    pub fn validate(&self) -> EngineResult<()> {
        ensure_within("tfn_hourly_rate", self.tfn_hourly_rate, MAX_HOURLY_RATE)?;
        ensure_within("abn_hourly_rate", self.abn_hourly_rate, MAX_HOURLY_RATE)?;
        ensure_within("hours_per_week", self.hours_per_week, MAX_HOURS_PER_WEEK)?;
        ensure_within("weeks_per_year", self.weeks_per_year, MAX_WEEKS_PER_YEAR)?;
        ensure_fraction("expense_rate", self.expense_rate)
    }
}

/// Inputs for the layered calculation combining overtime, allowances and FIFO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Nominal weeks worked per year (replaced by roster weeks under FIFO).
    pub weeks_per_year: Decimal,
    /// Hours pattern and overtime multipliers.
    pub overtime: OvertimeConfig,
    /// Weekly allowances.
    #[serde(default)]
    pub allowances: AllowancesConfig,
    /// FIFO roster settings.
    #[serde(default)]
    pub fifo: FifoConfig,
    /// Employee or contractor settings.
    pub structure: WorkStructure,
}

impl ScenarioInputs {
    /// Validates every nested config along with the top-level values.
    pub fn validate(&self) -> EngineResult<()> {
        ensure_within("hourly_rate", self.hourly_rate, MAX_HOURLY_RATE)?;
        ensure_within("weeks_per_year", self.weeks_per_year, MAX_WEEKS_PER_YEAR)?;
        self.overtime.validate()?;
        self.allowances.validate()?;
        self.fifo.validate()?;
        if let WorkStructure::Abn { expense_rate, .. } = self.structure {
            ensure_fraction("expense_rate", expense_rate)?;
        }
        Ok(())
    }
}
