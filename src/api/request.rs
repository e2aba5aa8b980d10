//! Request types for the take-home pay API.
//!
//! Request bodies are flat, form-like structures. They are converted into
//! the engine's input models before any calculation runs, which is where
//! defaults are filled in and FIFO roster names are parsed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AllowancesConfig, ComparisonInputs, DEFAULT_PUBLIC_HOLIDAY_RATE, FifoConfig, OvertimeConfig,
    OvertimeMultiplier, RosterPattern, ScenarioInputs, WorkStructure,
};

fn default_include_super() -> bool {
    true
}

fn default_roster_pattern() -> String {
    "2-1".to_string()
}

/// Request body for the `/scenarios/tfn` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfnScenarioRequest {
    /// Hourly wage.
    pub hourly_rate: Decimal,
    /// Hours worked per week.
    pub hours_per_week: Decimal,
    /// Weeks worked per year.
    pub weeks_per_year: Decimal,
}

/// Request body for the `/scenarios/abn` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbnScenarioRequest {
    /// Hourly charge-out rate.
    pub hourly_rate: Decimal,
    /// Hours worked per week.
    pub hours_per_week: Decimal,
    /// Weeks worked per year.
    pub weeks_per_year: Decimal,
    /// Share of gross income spent on deductible expenses.
    #[serde(default)]
    pub expense_rate: Decimal,
    /// Whether the contractor funds their own super (defaults to true).
    #[serde(default = "default_include_super")]
    pub include_super: bool,
}

/// Request body for the `/compare` endpoint.
///
/// Either supply raw rates, or a `preset_id` naming a preset scenario whose
/// values are used instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareRequest {
    /// Preset scenario to compare instead of the raw values.
    #[serde(default)]
    pub preset_id: Option<String>,
    /// Hourly rate as an employee.
    #[serde(default)]
    pub tfn_hourly_rate: Option<Decimal>,
    /// Hourly rate as a contractor (defaults to the TFN rate).
    #[serde(default)]
    pub abn_hourly_rate: Option<Decimal>,
    /// Hours worked per week.
    #[serde(default)]
    pub hours_per_week: Option<Decimal>,
    /// Weeks worked per year.
    #[serde(default)]
    pub weeks_per_year: Option<Decimal>,
    /// Share of ABN gross income spent on deductible expenses.
    #[serde(default)]
    pub expense_rate: Option<Decimal>,
    /// Whether the contractor funds their own super.
    #[serde(default)]
    pub include_super: Option<bool>,
}

impl CompareRequest {
    /// Converts raw request values into comparison inputs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first required field that is missing.
    pub fn into_inputs(self) -> EngineResult<ComparisonInputs> {
        let tfn_hourly_rate = required("tfn_hourly_rate", self.tfn_hourly_rate)?;
        Ok(ComparisonInputs {
            tfn_hourly_rate,
            abn_hourly_rate: self.abn_hourly_rate.unwrap_or(tfn_hourly_rate),
            hours_per_week: required("hours_per_week", self.hours_per_week)?,
            weeks_per_year: required("weeks_per_year", self.weeks_per_year)?,
            expense_rate: self.expense_rate.unwrap_or(Decimal::ZERO),
            include_super: self.include_super.unwrap_or(true),
        })
    }
}

fn required(field: &str, value: Option<Decimal>) -> EngineResult<Decimal> {
    value.ok_or_else(|| EngineError::invalid_input(field, "is required"))
}

/// FIFO settings as submitted by a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FifoRequest {
    /// Whether the worker is on a FIFO roster.
    #[serde(default)]
    pub enabled: bool,
    /// Roster name: `2-1`, `3-1`, `4-2`, `8-6` or `custom`.
    #[serde(default = "default_roster_pattern")]
    pub roster_pattern: String,
    /// Weeks on for a custom roster.
    #[serde(default)]
    pub custom_weeks_on: Option<u32>,
    /// Weeks off for a custom roster.
    #[serde(default)]
    pub custom_weeks_off: Option<u32>,
    /// Employer provides accommodation.
    #[serde(default)]
    pub accommodation_provided: bool,
    /// Employer provides meals.
    #[serde(default)]
    pub meals_provided: bool,
    /// Weekly LAFHA override.
    #[serde(default)]
    pub lafha_per_week: Option<Decimal>,
    /// Paid travel hours per cycle.
    #[serde(default)]
    pub paid_travel_hours: Decimal,
}

impl Default for FifoRequest {
    fn default() -> Self {
        Self {
            enabled: false,
            roster_pattern: default_roster_pattern(),
            custom_weeks_on: None,
            custom_weeks_off: None,
            accommodation_provided: false,
            meals_provided: false,
            lafha_per_week: None,
            paid_travel_hours: Decimal::ZERO,
        }
    }
}

impl TryFrom<FifoRequest> for FifoConfig {
    type Error = EngineError;

    fn try_from(req: FifoRequest) -> EngineResult<Self> {
        let roster = if req.enabled {
            RosterPattern::from_parts(
                &req.roster_pattern,
                req.custom_weeks_on,
                req.custom_weeks_off,
            )?
        } else {
            // Roster is ignored when disabled, so an unparseable name is not an error
            req.roster_pattern
                .parse()
                .unwrap_or(RosterPattern::TwoOne)
        };

        Ok(FifoConfig {
            enabled: req.enabled,
            roster,
            accommodation_provided: req.accommodation_provided,
            meals_provided: req.meals_provided,
            lafha_per_week: req.lafha_per_week,
            paid_travel_hours: req.paid_travel_hours,
        })
    }
}

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Nominal weeks worked per year.
    pub weeks_per_year: Decimal,
    /// Ordinary hours per week.
    pub regular_hours_per_week: Decimal,
    /// Overtime hours per week.
    #[serde(default)]
    pub overtime_hours_per_week: Decimal,
    /// Overtime multiplier (1.5, 2.0 or 2.5).
    #[serde(default)]
    pub overtime_rate: OvertimeMultiplier,
    /// Public holiday hours across the year.
    #[serde(default)]
    pub public_holiday_hours_per_year: Decimal,
    /// Public holiday multiplier (defaults to 2.5).
    #[serde(default)]
    pub public_holiday_rate: Option<Decimal>,
    /// Weekly allowances.
    #[serde(default)]
    pub allowances: AllowancesConfig,
    /// FIFO roster settings.
    #[serde(default)]
    pub fifo: FifoRequest,
    /// Employee or contractor settings.
    pub structure: WorkStructure,
}

impl TryFrom<CalculateRequest> for ScenarioInputs {
    type Error = EngineError;

    fn try_from(req: CalculateRequest) -> EngineResult<Self> {
        Ok(ScenarioInputs {
            hourly_rate: req.hourly_rate,
            weeks_per_year: req.weeks_per_year,
            overtime: OvertimeConfig {
                regular_hours_per_week: req.regular_hours_per_week,
                overtime_hours_per_week: req.overtime_hours_per_week,
                overtime_rate: req.overtime_rate,
                public_holiday_hours_per_year: req.public_holiday_hours_per_year,
                public_holiday_rate: req
                    .public_holiday_rate
                    .unwrap_or(DEFAULT_PUBLIC_HOLIDAY_RATE),
            },
            allowances: req.allowances,
            fifo: req.fifo.try_into()?,
            structure: req.structure,
        })
    }
}
