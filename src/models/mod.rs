//! Core data models for the take-home pay engine.
//!
//! This module contains the input configurations, reference records and
//! audit types used throughout the engine.

mod allowances;
mod audit;
mod fifo;
mod overtime;
mod presets;
mod saved_scenario;
mod scenario;
mod tax_bracket;

pub use allowances::AllowancesConfig;
pub(crate) use audit::AuditLog;
pub use audit::AuditStep;
pub use fifo::{DEFAULT_CUSTOM_WEEKS_OFF, DEFAULT_CUSTOM_WEEKS_ON, FifoConfig, RosterPattern};
pub use overtime::{DEFAULT_PUBLIC_HOLIDAY_RATE, OvertimeConfig, OvertimeMultiplier};
pub use presets::{PresetScenario, TradePreset};
pub use saved_scenario::{SavedScenario, ScenarioDraft};
pub(crate) use scenario::{ensure_fraction, ensure_within};
pub use scenario::{
    MAX_HOURLY_RATE, MAX_HOURS_PER_WEEK, MAX_HOURS_PER_YEAR, MAX_RATE_MULTIPLIER,
    MAX_WEEKLY_AMOUNT, MAX_WEEKS_PER_YEAR,
};
pub use scenario::{ComparisonInputs, ScenarioInputs, StructureKind, WorkStructure};
pub use tax_bracket::TaxBracket;
