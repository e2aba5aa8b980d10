//! Calculation logic for the take-home pay engine.
//!
//! This module contains the tax bracket engine (income tax, Medicare levy and
//! the low income tax offset), the overtime, allowance and FIFO engines, and
//! the employee and contractor scenarios built on top of them.

mod abn_scenario;
mod allowances;
mod common;
mod comparison;
mod fifo;
mod income_tax;
mod overtime;
mod tfn_scenario;

pub use abn_scenario::{AbnScenarioResult, calculate_abn_scenario};
pub use allowances::{AllowanceBreakdown, compute_allowances};
pub use common::{clamp_non_negative, divide_or_zero, round_currency};
pub use comparison::{
    ComprehensiveResult, ScenarioComparison, calculate_comprehensive, compare_scenarios,
};
pub use fifo::{FifoBenefits, compute_fifo_benefits};
pub use income_tax::{
    IncomeTaxResult, TaxSummary, compute_income_tax, compute_lito, compute_medicare_levy,
    compute_tax_summary,
};
pub use overtime::{OvertimeEarnings, compute_overtime_earnings};
pub use tfn_scenario::{TfnScenarioResult, calculate_tfn_scenario};
