//! Employee (TFN) take-home pay.
//!
//! An employee has no general deductions modelled, so taxable income equals
//! gross income. The super guarantee is paid by the employer on top of
//! wages: it is reported but never reduces take-home pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TaxTables;
use crate::error::EngineResult;
use crate::models::{
    AuditLog, AuditStep, MAX_HOURLY_RATE, MAX_HOURS_PER_WEEK, MAX_WEEKS_PER_YEAR, ensure_within,
};

use super::common::divide_or_zero;
use super::income_tax::{TaxSummary, compute_tax_summary};

/// The result of an employee take-home calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TfnScenarioResult {
    /// Hourly rate used.
    pub hourly_rate: Decimal,
    /// Hours per week used.
    pub hours_per_week: Decimal,
    /// Weeks per year used.
    pub weeks_per_year: Decimal,
    /// Rate × hours × weeks.
    pub gross_income: Decimal,
    /// Tax assessment on the gross income.
    pub tax: TaxSummary,
    /// Employer-paid super guarantee (not part of take-home pay).
    pub super_guarantee: Decimal,
    /// Gross income less income tax and Medicare levy.
    pub net_take_home: Decimal,
    /// Net take-home divided by weeks worked (0 when no weeks are worked).
    pub weekly_take_home: Decimal,
    /// Calculation audit trail.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates an employee's annual take-home pay.
///
/// # Arguments
///
/// * `hourly_rate` - The hourly wage
/// * `hours_per_week` - Hours worked each week
/// * `weeks_per_year` - Weeks worked each year
/// * `tables` - Tax, Medicare, LITO and super guarantee tables
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
/// if any argument is negative or above its upper bound.
///
/// # Examples
///
/// ```
/// use take_home_engine::calculation::calculate_tfn_scenario;
/// use take_home_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let result = calculate_tfn_scenario(
///     Decimal::from(35),
///     Decimal::from(40),
///     Decimal::from(48),
///     config.tax_tables(),
/// ).unwrap();
///
/// assert_eq!(result.gross_income, Decimal::from(67_200));
/// assert_eq!(result.net_take_home, Decimal::from(54_908));
/// assert_eq!(result.super_guarantee, Decimal::from(7_728));
/// ```
pub fn calculate_tfn_scenario(
    hourly_rate: Decimal,
    hours_per_week: Decimal,
    weeks_per_year: Decimal,
    tables: &TaxTables,
) -> EngineResult<TfnScenarioResult> {
    ensure_within("hourly_rate", hourly_rate, MAX_HOURLY_RATE)?;
    ensure_within("hours_per_week", hours_per_week, MAX_HOURS_PER_WEEK)?;
    ensure_within("weeks_per_year", weeks_per_year, MAX_WEEKS_PER_YEAR)?;

    let mut audit = AuditLog::default();

    let gross_income = hourly_rate * hours_per_week * weeks_per_year;
    audit.record(
        "gross_income",
        "Gross Income",
        serde_json::json!({
            "hourly_rate": hourly_rate.normalize().to_string(),
            "hours_per_week": hours_per_week.normalize().to_string(),
            "weeks_per_year": weeks_per_year.normalize().to_string()
        }),
        serde_json::json!({ "gross_income": gross_income.normalize().to_string() }),
        format!(
            "${} × {} hours × {} weeks = ${}",
            hourly_rate.normalize(),
            hours_per_week.normalize(),
            weeks_per_year.normalize(),
            gross_income.normalize()
        ),
    );

    let tax = compute_tax_summary(gross_income, tables);
    record_tax(&mut audit, &tax, "Employee taxable income equals gross income");

    let super_guarantee = gross_income * tables.super_guarantee_rate();
    audit.record(
        "super_guarantee",
        "Employer Super Guarantee",
        serde_json::json!({
            "gross_income": gross_income.normalize().to_string(),
            "rate": tables.super_guarantee_rate().normalize().to_string()
        }),
        serde_json::json!({
            "super_guarantee": super_guarantee.normalize().to_string(),
            "deducted_from_pay": false
        }),
        format!(
            "Employer pays ${} super on top of wages; not included in take-home pay",
            super_guarantee.normalize()
        ),
    );

    let net_take_home = gross_income - tax.total_tax;
    let weekly_take_home = divide_or_zero(net_take_home, weeks_per_year);
    audit.record(
        "net_take_home",
        "Net Take-Home",
        serde_json::json!({
            "gross_income": gross_income.normalize().to_string(),
            "total_tax": tax.total_tax.normalize().to_string()
        }),
        serde_json::json!({
            "net_take_home": net_take_home.normalize().to_string(),
            "weekly_take_home": weekly_take_home.normalize().to_string()
        }),
        format!(
            "${} − ${} tax and levy = ${}",
            gross_income.normalize(),
            tax.total_tax.normalize(),
            net_take_home.normalize()
        ),
    );

    debug!(
        gross_income = %gross_income,
        net_take_home = %net_take_home,
        "Calculated TFN scenario"
    );

    Ok(TfnScenarioResult {
        hourly_rate,
        hours_per_week,
        weeks_per_year,
        gross_income,
        tax,
        super_guarantee,
        net_take_home,
        weekly_take_home,
        audit_steps: audit.into_steps(),
    })
}

/// Records the income tax, offset and levy steps for a tax summary.
pub(crate) fn record_tax(audit: &mut AuditLog, tax: &TaxSummary, basis: &str) {
    audit.record(
        "income_tax",
        "Income Tax",
        serde_json::json!({ "taxable_income": tax.taxable_income.normalize().to_string() }),
        serde_json::json!({
            "income_tax": tax.income_tax.normalize().to_string(),
            "marginal_rate": tax.marginal_rate.normalize().to_string()
        }),
        format!(
            "{}: ${} taxed at a marginal rate of {}% = ${}",
            basis,
            tax.taxable_income.normalize(),
            (tax.marginal_rate * Decimal::from(100)).normalize(),
            tax.income_tax.normalize()
        ),
    );
    audit.record(
        "low_income_tax_offset",
        "Low Income Tax Offset",
        serde_json::json!({ "taxable_income": tax.taxable_income.normalize().to_string() }),
        serde_json::json!({
            "lito": tax.lito.normalize().to_string(),
            "income_tax_after_offset": tax.income_tax_after_offset.normalize().to_string()
        }),
        format!(
            "${} tax − ${} offset = ${} (not below zero)",
            tax.income_tax.normalize(),
            tax.lito.normalize(),
            tax.income_tax_after_offset.normalize()
        ),
    );
    audit.record(
        "medicare_levy",
        "Medicare Levy",
        serde_json::json!({ "taxable_income": tax.taxable_income.normalize().to_string() }),
        serde_json::json!({ "medicare_levy": tax.medicare_levy.normalize().to_string() }),
        if tax.medicare_levy.is_zero() {
            "Taxable income at or below the Medicare levy threshold - no levy".to_string()
        } else {
            format!("Medicare levy of ${}", tax.medicare_levy.normalize())
        },
    );
}
