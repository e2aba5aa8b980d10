//! Contractor (ABN) take-home pay.
//!
//! A contractor deducts business expenses from gross income before tax. If
//! they choose to fund their own super, the contribution comes out of net
//! pay. That is the key structural difference from the employee case, where
//! the employer pays super on top of wages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TaxTables;
use crate::error::EngineResult;
use crate::models::{
    AuditLog, AuditStep, MAX_HOURLY_RATE, MAX_HOURS_PER_WEEK, MAX_WEEKS_PER_YEAR, ensure_fraction,
    ensure_within,
};

use super::common::{clamp_non_negative, divide_or_zero};
use super::income_tax::{TaxSummary, compute_tax_summary};
use super::tfn_scenario::record_tax;

/// The result of a contractor take-home calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbnScenarioResult {
    /// Hourly rate used.
    pub hourly_rate: Decimal,
    /// Hours per week used.
    pub hours_per_week: Decimal,
    /// Weeks per year used.
    pub weeks_per_year: Decimal,
    /// Share of gross income spent on deductible expenses.
    pub expense_rate: Decimal,
    /// Whether the contractor funds their own super.
    pub include_super: bool,
    /// Rate × hours × weeks.
    pub gross_income: Decimal,
    /// Gross income × expense rate.
    pub deductible_expenses: Decimal,
    /// Tax assessment on gross income less expenses.
    pub tax: TaxSummary,
    /// Self-funded super contribution (0 when not included).
    pub super_contribution: Decimal,
    /// Gross less expenses, tax, levy and self-funded super, floored at 0.
    pub net_take_home: Decimal,
    /// Amount by which expenses, tax and super exceed gross income (0 when
    /// take-home pay is positive). A non-zero shortfall means there is no
    /// usable take-home figure.
    pub net_shortfall: Decimal,
    /// Net take-home divided by weeks worked (0 when no weeks are worked).
    pub weekly_take_home: Decimal,
    /// Calculation audit trail.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates a contractor's annual take-home pay.
///
/// # Arguments
///
/// * `hourly_rate` - The hourly charge-out rate
/// * `hours_per_week` - Hours worked each week
/// * `weeks_per_year` - Weeks worked each year
/// * `expense_rate` - Share of gross income spent on deductible expenses, in [0, 1]
/// * `include_super` - Whether to set aside super at the guarantee rate
/// * `tables` - Tax, Medicare, LITO and super guarantee tables
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
/// if a value is negative or above its upper bound, or the expense rate
/// lies outside [0, 1].
///
/// # Examples
///
/// ```
/// use take_home_engine::calculation::calculate_abn_scenario;
/// use take_home_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let result = calculate_abn_scenario(
///     Decimal::from(35),
///     Decimal::from(40),
///     Decimal::from(48),
///     Decimal::from_str("0.15").unwrap(),
///     true,
///     config.tax_tables(),
/// ).unwrap();
///
/// assert_eq!(result.deductible_expenses, Decimal::from(10_080));
/// assert_eq!(result.net_take_home, Decimal::from_str("40325.60").unwrap());
/// ```
pub fn calculate_abn_scenario(
    hourly_rate: Decimal,
    hours_per_week: Decimal,
    weeks_per_year: Decimal,
    expense_rate: Decimal,
    include_super: bool,
    tables: &TaxTables,
) -> EngineResult<AbnScenarioResult> {
    ensure_within("hourly_rate", hourly_rate, MAX_HOURLY_RATE)?;
    ensure_within("hours_per_week", hours_per_week, MAX_HOURS_PER_WEEK)?;
    ensure_within("weeks_per_year", weeks_per_year, MAX_WEEKS_PER_YEAR)?;
    ensure_fraction("expense_rate", expense_rate)?;

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

    let deductible_expenses = gross_income * expense_rate;
    let taxable_income = gross_income - deductible_expenses;
    audit.record(
        "deductible_expenses",
        "Deductible Business Expenses",
        serde_json::json!({
            "gross_income": gross_income.normalize().to_string(),
            "expense_rate": expense_rate.normalize().to_string()
        }),
        serde_json::json!({
            "deductible_expenses": deductible_expenses.normalize().to_string(),
            "taxable_income": taxable_income.normalize().to_string()
        }),
        format!(
            "${} × {}% expenses = ${}; taxable income ${}",
            gross_income.normalize(),
            (expense_rate * Decimal::from(100)).normalize(),
            deductible_expenses.normalize(),
            taxable_income.normalize()
        ),
    );

    let tax = compute_tax_summary(taxable_income, tables);
    record_tax(&mut audit, &tax, "Contractor taxable income after expenses");

    let super_contribution = if include_super {
        gross_income * tables.super_guarantee_rate()
    } else {
        Decimal::ZERO
    };
    audit.record(
        "self_funded_super",
        "Self-Funded Super",
        serde_json::json!({
            "gross_income": gross_income.normalize().to_string(),
            "rate": tables.super_guarantee_rate().normalize().to_string(),
            "include_super": include_super
        }),
        serde_json::json!({
            "super_contribution": super_contribution.normalize().to_string(),
            "deducted_from_pay": include_super
        }),
        if include_super {
            format!(
                "Contractor sets aside ${} super out of their own pay",
                super_contribution.normalize()
            )
        } else {
            "Contractor does not set aside super".to_string()
        },
    );

    let net_before_floor = gross_income - deductible_expenses - tax.total_tax - super_contribution;
    let net_take_home = clamp_non_negative(net_before_floor);
    let net_shortfall = clamp_non_negative(-net_before_floor);
    let weekly_take_home = divide_or_zero(net_take_home, weeks_per_year);
    audit.record(
        "net_take_home",
        "Net Take-Home",
        serde_json::json!({
            "gross_income": gross_income.normalize().to_string(),
            "deductible_expenses": deductible_expenses.normalize().to_string(),
            "total_tax": tax.total_tax.normalize().to_string(),
            "super_contribution": super_contribution.normalize().to_string()
        }),
        serde_json::json!({
            "net_take_home": net_take_home.normalize().to_string(),
            "net_shortfall": net_shortfall.normalize().to_string(),
            "weekly_take_home": weekly_take_home.normalize().to_string()
        }),
        format!(
            "${} − ${} expenses − ${} tax and levy − ${} super = ${}",
            gross_income.normalize(),
            deductible_expenses.normalize(),
            tax.total_tax.normalize(),
            super_contribution.normalize(),
            net_before_floor.normalize()
        ),
    );

    debug!(
        gross_income = %gross_income,
        deductible_expenses = %deductible_expenses,
        net_take_home = %net_take_home,
        "Calculated ABN scenario"
    );

    Ok(AbnScenarioResult {
        hourly_rate,
        hours_per_week,
        weeks_per_year,
        expense_rate,
        include_super,
        gross_income,
        deductible_expenses,
        tax,
        super_contribution,
        net_take_home,
        net_shortfall,
        weekly_take_home,
        audit_steps: audit.into_steps(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tables() -> TaxTables {
        ConfigLoader::builtin().unwrap().tax_tables().clone()
    }

    #[test]
    fn test_general_labourer_with_super() {
        let result =
            calculate_abn_scenario(dec("35"), dec("40"), dec("48"), dec("0.15"), true, &tables())
                .unwrap();

        assert_eq!(result.gross_income, dec("67200"));
        assert_eq!(result.deductible_expenses, dec("10080"));
        assert_eq!(result.tax.taxable_income, dec("57120"));
        // 4288 + 0.30 × 12120 = 7924
        assert_eq!(result.tax.income_tax, dec("7924"));
        assert_eq!(result.tax.medicare_levy, dec("1142.40"));
        assert_eq!(result.super_contribution, dec("7728"));
        assert_eq!(result.net_take_home, dec("40325.60"));
    }

    #[test]
    fn test_without_super_keeps_contribution_in_pay() {
        let tables = tables();
        let with_super =
            calculate_abn_scenario(dec("35"), dec("40"), dec("48"), dec("0.15"), true, &tables)
                .unwrap();
        let without_super =
            calculate_abn_scenario(dec("35"), dec("40"), dec("48"), dec("0.15"), false, &tables)
                .unwrap();

        assert_eq!(without_super.super_contribution, Decimal::ZERO);
        assert_eq!(without_super.net_take_home, dec("48053.60"));
        assert_eq!(
            without_super.net_take_home - with_super.net_take_home,
            with_super.super_contribution
        );
        // Super is not deductible here, so the tax position is unchanged
        assert_eq!(without_super.tax, with_super.tax);
    }

    #[test]
    fn test_zero_expense_rate_taxes_full_gross() {
        let result =
            calculate_abn_scenario(dec("35"), dec("40"), dec("48"), Decimal::ZERO, false, &tables())
                .unwrap();

        assert_eq!(result.deductible_expenses, Decimal::ZERO);
        assert_eq!(result.tax.taxable_income, result.gross_income);
        assert_eq!(result.net_take_home, dec("54908"));
    }

    #[test]
    fn test_full_expense_rate_leaves_no_taxable_income() {
        let result =
            calculate_abn_scenario(dec("35"), dec("40"), dec("48"), Decimal::ONE, false, &tables())
                .unwrap();

        assert_eq!(result.tax.taxable_income, Decimal::ZERO);
        assert_eq!(result.tax.total_tax, Decimal::ZERO);
        assert_eq!(result.net_take_home, Decimal::ZERO);
    }

    #[test]
    fn test_full_expense_rate_with_super_floors_net_at_zero() {
        let result =
            calculate_abn_scenario(dec("35"), dec("40"), dec("48"), Decimal::ONE, true, &tables())
                .unwrap();

        // Every dollar goes to expenses, then 7728 super is still owed
        assert_eq!(result.super_contribution, dec("7728"));
        assert_eq!(result.net_take_home, Decimal::ZERO);
        assert_eq!(result.net_shortfall, dec("7728"));
        assert_eq!(result.weekly_take_home, Decimal::ZERO);

        let net_step = result.audit_steps.last().unwrap();
        assert_eq!(net_step.rule_id, "net_take_home");
        assert_eq!(net_step.output["net_shortfall"], "7728");
    }

    #[test]
    fn test_high_expense_rate_reports_shortfall() {
        let result =
            calculate_abn_scenario(dec("35"), dec("40"), dec("48"), dec("0.95"), true, &tables())
                .unwrap();

        // 67200 − 63840 expenses − 0 tax − 7728 super = −4368
        assert_eq!(result.net_take_home, Decimal::ZERO);
        assert_eq!(result.net_shortfall, dec("4368"));
    }

    #[test]
    fn test_positive_take_home_has_no_shortfall() {
        let result =
            calculate_abn_scenario(dec("35"), dec("40"), dec("48"), dec("0.15"), true, &tables())
                .unwrap();
        assert_eq!(result.net_shortfall, Decimal::ZERO);
    }

    #[test]
    fn test_expense_rate_above_one_rejected() {
        let result =
            calculate_abn_scenario(dec("35"), dec("40"), dec("48"), dec("1.5"), true, &tables());
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "expense_rate"),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result =
            calculate_abn_scenario(dec("-35"), dec("40"), dec("48"), dec("0.15"), true, &tables());
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_weeks_gives_zero_weekly_take_home() {
        let result = calculate_abn_scenario(
            dec("35"),
            dec("40"),
            Decimal::ZERO,
            dec("0.15"),
            true,
            &tables(),
        )
        .unwrap();
        assert_eq!(result.weekly_take_home, Decimal::ZERO);
    }

    #[test]
    fn test_audit_trail_includes_expenses_and_super() {
        let result =
            calculate_abn_scenario(dec("35"), dec("40"), dec("48"), dec("0.15"), true, &tables())
                .unwrap();

        let expenses = result
            .audit_steps
            .iter()
            .find(|s| s.rule_id == "deductible_expenses")
            .unwrap();
        assert_eq!(expenses.output["taxable_income"], "57120");

        let super_step = result
            .audit_steps
            .iter()
            .find(|s| s.rule_id == "self_funded_super")
            .unwrap();
        assert_eq!(super_step.output["deducted_from_pay"], true);
    }

    #[test]
    fn test_is_idempotent() {
        let tables = tables();
        let first =
            calculate_abn_scenario(dec("52.25"), dec("41"), dec("46"), dec("0.12"), true, &tables)
                .unwrap();
        let second =
            calculate_abn_scenario(dec("52.25"), dec("41"), dec("46"), dec("0.12"), true, &tables)
                .unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
