//! Side-by-side TFN/ABN comparison and the layered calculation.
//!
//! The layered calculation runs the engines in a fixed order:
//!
//! 1. FIFO roster → working weeks, LAFHA and paid travel
//! 2. Overtime engine over those weeks → labour earnings
//! 3. Allowance engine over those weeks → tax-free / taxable split
//! 4. Structure-specific expenses and super
//! 5. Income tax, LITO and Medicare levy on the assessable amount
//!
//! LAFHA cash and tax-free allowances reach the worker's pocket without
//! being assessed. ABN expenses are claimed against labour earnings only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{EngineConfig, TaxTables};
use crate::error::EngineResult;
use crate::models::{
    AuditLog, AuditStep, ComparisonInputs, ScenarioInputs, StructureKind, WorkStructure,
};

use super::abn_scenario::{AbnScenarioResult, calculate_abn_scenario};
use super::allowances::{AllowanceBreakdown, compute_allowances};
use super::common::{clamp_non_negative, divide_or_zero};
use super::fifo::{FifoBenefits, compute_fifo_benefits};
use super::income_tax::{TaxSummary, compute_tax_summary};
use super::overtime::{OvertimeEarnings, compute_overtime_earnings};
use super::tfn_scenario::{TfnScenarioResult, calculate_tfn_scenario, record_tax};

/// Both structures calculated from the same inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    /// The inputs both results were calculated from.
    pub inputs: ComparisonInputs,
    /// Employee result.
    pub tfn: TfnScenarioResult,
    /// Contractor result.
    pub abn: AbnScenarioResult,
    /// ABN net take-home minus TFN net take-home.
    pub difference: Decimal,
    /// Weekly ABN take-home minus weekly TFN take-home.
    pub weekly_difference: Decimal,
    /// The structure with the higher take-home, or `None` when they are equal.
    pub better_structure: Option<StructureKind>,
}

/// Calculates both structures and the difference between them.
///
/// A positive `difference` means the contractor takes home more.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
/// if the inputs fail validation.
///
/// # Examples
///
/// ```
/// use take_home_engine::calculation::compare_scenarios;
/// use take_home_engine::config::ConfigLoader;
/// use take_home_engine::models::{ComparisonInputs, StructureKind};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let inputs = ComparisonInputs::same_rate(
///     Decimal::from(35),
///     Decimal::from(40),
///     Decimal::from(48),
///     Decimal::from_str("0.15").unwrap(),
///     true,
/// );
///
/// let comparison = compare_scenarios(&inputs, config.tax_tables()).unwrap();
/// assert_eq!(comparison.difference, Decimal::from_str("-14582.40").unwrap());
/// assert_eq!(comparison.better_structure, Some(StructureKind::Tfn));
/// ```
pub fn compare_scenarios(
    inputs: &ComparisonInputs,
    tables: &TaxTables,
) -> EngineResult<ScenarioComparison> {
    inputs.validate()?;

    let tfn = calculate_tfn_scenario(
        inputs.tfn_hourly_rate,
        inputs.hours_per_week,
        inputs.weeks_per_year,
        tables,
    )?;
    let abn = calculate_abn_scenario(
        inputs.abn_hourly_rate,
        inputs.hours_per_week,
        inputs.weeks_per_year,
        inputs.expense_rate,
        inputs.include_super,
        tables,
    )?;

    let difference = abn.net_take_home - tfn.net_take_home;
    let weekly_difference = abn.weekly_take_home - tfn.weekly_take_home;
    let better_structure = match difference.cmp(&Decimal::ZERO) {
        std::cmp::Ordering::Greater => Some(StructureKind::Abn),
        std::cmp::Ordering::Less => Some(StructureKind::Tfn),
        std::cmp::Ordering::Equal => None,
    };

    debug!(
        tfn_net = %tfn.net_take_home,
        abn_net = %abn.net_take_home,
        difference = %difference,
        "Compared TFN and ABN scenarios"
    );

    Ok(ScenarioComparison {
        inputs: inputs.clone(),
        tfn,
        abn,
        difference,
        weekly_difference,
        better_structure,
    })
}

/// The result of a layered calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComprehensiveResult {
    /// Employee or contractor settings used.
    pub structure: WorkStructure,
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Weeks actually worked (roster weeks under FIFO).
    pub working_weeks: Decimal,
    /// Roster weeks, LAFHA and paid travel.
    pub fifo: FifoBenefits,
    /// Regular, overtime and public holiday earnings.
    pub earnings: OvertimeEarnings,
    /// Allowance totals and their tax treatment.
    pub allowances: AllowanceBreakdown,
    /// Hourly earnings plus paid travel.
    pub labour_earnings: Decimal,
    /// Every cash amount received: labour, allowances and LAFHA.
    pub gross_income: Decimal,
    /// Expenses claimed against labour earnings (contractors only).
    pub deductible_expenses: Decimal,
    /// Tax assessment on the assessable amount.
    pub tax: TaxSummary,
    /// Super paid by the employer or set aside by the contractor.
    pub super_contribution: Decimal,
    /// Whether `super_contribution` comes out of take-home pay.
    pub super_deducted: bool,
    /// Cash received less expenses, tax, levy and any self-funded super,
    /// floored at 0.
    pub net_take_home: Decimal,
    /// Amount by which deductions exceed cash received (0 when take-home pay
    /// is positive).
    pub net_shortfall: Decimal,
    /// Net take-home divided by working weeks (0 when no weeks are worked).
    pub weekly_take_home: Decimal,
    /// Value of employer-provided accommodation and meals (not cash).
    pub non_cash_benefits: Decimal,
    /// Calculation audit trail.
    pub audit_steps: Vec<AuditStep>,
}

/// Runs the layered calculation combining FIFO, overtime and allowances.
///
/// An employee's super guarantee is calculated on ordinary time earnings
/// (`earnings.regular_earnings`). A contractor's self-funded super is
/// calculated on all labour earnings.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
/// if any part of `inputs` fails validation.
///
/// # Examples
///
/// ```
/// use take_home_engine::calculation::calculate_comprehensive;
/// use take_home_engine::config::ConfigLoader;
/// use take_home_engine::models::{
///     AllowancesConfig, FifoConfig, OvertimeConfig, ScenarioInputs, WorkStructure,
/// };
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let inputs = ScenarioInputs {
///     hourly_rate: Decimal::from(35),
///     weeks_per_year: Decimal::from(48),
///     overtime: OvertimeConfig::regular_only(Decimal::from(40)),
///     allowances: AllowancesConfig::default(),
///     fifo: FifoConfig::disabled(),
///     structure: WorkStructure::Tfn,
/// };
///
/// let result = calculate_comprehensive(&inputs, config.config()).unwrap();
/// assert_eq!(result.net_take_home, Decimal::from(54_908));
/// ```
pub fn calculate_comprehensive(
    inputs: &ScenarioInputs,
    config: &EngineConfig,
) -> EngineResult<ComprehensiveResult> {
    inputs.validate()?;

    let tables = config.tax();
    let mut audit = AuditLog::default();

    let fifo = compute_fifo_benefits(
        &inputs.fifo,
        inputs.hourly_rate,
        inputs.overtime.regular_hours_per_week,
        inputs.weeks_per_year,
        config.fifo(),
    );
    let working_weeks = fifo.actual_working_weeks;
    audit.record(
        "working_weeks",
        "Working Weeks",
        serde_json::json!({
            "fifo_enabled": inputs.fifo.enabled,
            "roster": inputs.fifo.roster.to_string(),
            "nominal_weeks": inputs.weeks_per_year.normalize().to_string()
        }),
        serde_json::json!({
            "working_weeks": working_weeks.normalize().to_string(),
            "cycles_per_year": fifo.cycles_per_year,
            "has_valid_cycles": fifo.has_valid_cycles
        }),
        if inputs.fifo.enabled {
            format!(
                "{} roster: {} complete cycles = {} weeks on site",
                inputs.fifo.roster,
                fifo.cycles_per_year,
                working_weeks.normalize()
            )
        } else {
            format!("No FIFO roster: {} weeks", working_weeks.normalize())
        },
    );

    let earnings = compute_overtime_earnings(inputs.hourly_rate, &inputs.overtime, working_weeks);
    let labour_earnings = earnings.total_earnings + fifo.paid_travel_earnings;
    let overtime = &inputs.overtime;
    audit.record(
        "labour_earnings",
        "Labour Earnings",
        serde_json::json!({
            "hourly_rate": inputs.hourly_rate.normalize().to_string(),
            "regular_hours_per_week": overtime.regular_hours_per_week.normalize().to_string(),
            "overtime_hours_per_week": overtime.overtime_hours_per_week.normalize().to_string(),
            "overtime_multiplier": overtime.overtime_rate.multiplier().normalize().to_string(),
            "public_holiday_hours": overtime.public_holiday_hours_per_year.normalize().to_string()
        }),
        serde_json::json!({
            "regular_earnings": earnings.regular_earnings.normalize().to_string(),
            "overtime_earnings": earnings.overtime_earnings.normalize().to_string(),
            "public_holiday_earnings": earnings.public_holiday_earnings.normalize().to_string(),
            "paid_travel_earnings": fifo.paid_travel_earnings.normalize().to_string(),
            "labour_earnings": labour_earnings.normalize().to_string()
        }),
        format!(
            "${} hourly earnings + ${} paid travel = ${}",
            earnings.total_earnings.normalize(),
            fifo.paid_travel_earnings.normalize(),
            labour_earnings.normalize()
        ),
    );

    let allowances = compute_allowances(&inputs.allowances, working_weeks, config.allowances());
    audit.record(
        "allowances",
        "Allowances",
        serde_json::json!({ "working_weeks": working_weeks.normalize().to_string() }),
        serde_json::json!({
            "total_allowances": allowances.total_allowances.normalize().to_string(),
            "tax_free_allowances": allowances.tax_free_allowances.normalize().to_string(),
            "taxable_allowances": allowances.taxable_allowances.normalize().to_string()
        }),
        format!(
            "${} allowances, of which ${} is tax free",
            allowances.total_allowances.normalize(),
            allowances.tax_free_allowances.normalize()
        ),
    );

    let gross_income = labour_earnings + allowances.total_allowances + fifo.total_lafha;

    let (deductible_expenses, super_contribution, super_deducted) = match inputs.structure {
        WorkStructure::Tfn => (
            Decimal::ZERO,
            earnings.regular_earnings * tables.super_guarantee_rate(),
            false,
        ),
        WorkStructure::Abn {
            expense_rate,
            include_super,
        } => {
            let expenses = labour_earnings * expense_rate;
            let contribution = if include_super {
                labour_earnings * tables.super_guarantee_rate()
            } else {
                Decimal::ZERO
            };
            (expenses, contribution, include_super)
        }
    };

    let taxable_income = labour_earnings - deductible_expenses + allowances.taxable_allowances;
    audit.record(
        "taxable_income",
        "Taxable Income",
        serde_json::json!({
            "labour_earnings": labour_earnings.normalize().to_string(),
            "deductible_expenses": deductible_expenses.normalize().to_string(),
            "taxable_allowances": allowances.taxable_allowances.normalize().to_string(),
            "lafha": fifo.total_lafha.normalize().to_string()
        }),
        serde_json::json!({ "taxable_income": taxable_income.normalize().to_string() }),
        format!(
            "${} labour − ${} expenses + ${} taxable allowances = ${}; LAFHA is not assessed",
            labour_earnings.normalize(),
            deductible_expenses.normalize(),
            allowances.taxable_allowances.normalize(),
            taxable_income.normalize()
        ),
    );

    let tax = compute_tax_summary(taxable_income, tables);
    record_tax(&mut audit, &tax, "Assessable income");

    audit.record(
        "super",
        "Superannuation",
        serde_json::json!({
            "structure": inputs.structure.kind(),
            "rate": tables.super_guarantee_rate().normalize().to_string()
        }),
        serde_json::json!({
            "super_contribution": super_contribution.normalize().to_string(),
            "deducted_from_pay": super_deducted
        }),
        match inputs.structure.kind() {
            StructureKind::Tfn => format!(
                "Employer pays ${} super on ordinary time earnings",
                super_contribution.normalize()
            ),
            StructureKind::Abn if super_deducted => format!(
                "Contractor sets aside ${} super out of their own pay",
                super_contribution.normalize()
            ),
            StructureKind::Abn => "Contractor does not set aside super".to_string(),
        },
    );

    let self_funded_super = if super_deducted {
        super_contribution
    } else {
        Decimal::ZERO
    };
    let net_before_floor = gross_income - deductible_expenses - tax.total_tax - self_funded_super;
    let net_take_home = clamp_non_negative(net_before_floor);
    let net_shortfall = clamp_non_negative(-net_before_floor);
    let weekly_take_home = divide_or_zero(net_take_home, working_weeks);
    let non_cash_benefits = fifo.accommodation_value + fifo.meals_value;
    audit.record(
        "net_take_home",
        "Net Take-Home",
        serde_json::json!({
            "gross_income": gross_income.normalize().to_string(),
            "deductible_expenses": deductible_expenses.normalize().to_string(),
            "total_tax": tax.total_tax.normalize().to_string(),
            "self_funded_super": self_funded_super.normalize().to_string()
        }),
        serde_json::json!({
            "net_take_home": net_take_home.normalize().to_string(),
            "net_shortfall": net_shortfall.normalize().to_string(),
            "weekly_take_home": weekly_take_home.normalize().to_string(),
            "non_cash_benefits": non_cash_benefits.normalize().to_string()
        }),
        format!(
            "${} cash − ${} expenses − ${} tax and levy − ${} super = ${}",
            gross_income.normalize(),
            deductible_expenses.normalize(),
            tax.total_tax.normalize(),
            self_funded_super.normalize(),
            net_before_floor.normalize()
        ),
    );

    debug!(
        structure = ?inputs.structure.kind(),
        working_weeks = %working_weeks,
        gross_income = %gross_income,
        net_take_home = %net_take_home,
        "Calculated comprehensive scenario"
    );

    Ok(ComprehensiveResult {
        structure: inputs.structure,
        hourly_rate: inputs.hourly_rate,
        working_weeks,
        fifo,
        earnings,
        allowances,
        labour_earnings,
        gross_income,
        deductible_expenses,
        tax,
        super_contribution,
        super_deducted,
        net_take_home,
        net_shortfall,
        weekly_take_home,
        non_cash_benefits,
        audit_steps: audit.into_steps(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::error::EngineError;
    use crate::models::{
        AllowancesConfig, FifoConfig, OvertimeConfig, OvertimeMultiplier, RosterPattern,
    };
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config() -> ConfigLoader {
        ConfigLoader::builtin().unwrap()
    }

    fn labourer() -> ComparisonInputs {
        ComparisonInputs::same_rate(dec("35"), dec("40"), dec("48"), dec("0.15"), true)
    }

    fn simple_inputs(structure: WorkStructure) -> ScenarioInputs {
        ScenarioInputs {
            hourly_rate: dec("35"),
            weeks_per_year: dec("48"),
            overtime: OvertimeConfig::regular_only(dec("40")),
            allowances: AllowancesConfig::default(),
            fifo: FifoConfig::disabled(),
            structure,
        }
    }

    #[test]
    fn test_compare_general_labourer() {
        let comparison = compare_scenarios(&labourer(), config().tax_tables()).unwrap();

        assert_eq!(comparison.tfn.net_take_home, dec("54908"));
        assert_eq!(comparison.abn.net_take_home, dec("40325.60"));
        assert_eq!(comparison.difference, dec("-14582.40"));
        assert_eq!(comparison.better_structure, Some(StructureKind::Tfn));
    }

    #[test]
    fn test_higher_abn_rate_can_come_out_ahead() {
        let inputs = ComparisonInputs {
            abn_hourly_rate: dec("55"),
            ..labourer()
        };
        let comparison = compare_scenarios(&inputs, config().tax_tables()).unwrap();

        assert!(comparison.difference > Decimal::ZERO);
        assert_eq!(comparison.better_structure, Some(StructureKind::Abn));
    }

    #[test]
    fn test_equal_take_home_has_no_better_structure() {
        // No expenses, no self-funded super: identical tax position
        let inputs =
            ComparisonInputs::same_rate(dec("35"), dec("40"), dec("48"), Decimal::ZERO, false);
        let comparison = compare_scenarios(&inputs, config().tax_tables()).unwrap();

        assert_eq!(comparison.difference, Decimal::ZERO);
        assert_eq!(comparison.better_structure, None);
    }

    #[test]
    fn test_compare_rejects_invalid_inputs() {
        let inputs = ComparisonInputs {
            expense_rate: dec("2"),
            ..labourer()
        };
        let result = compare_scenarios(&inputs, config().tax_tables());
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_comprehensive_matches_simple_tfn_scenario() {
        let config = config();
        let result =
            calculate_comprehensive(&simple_inputs(WorkStructure::Tfn), config.config()).unwrap();

        assert_eq!(result.working_weeks, dec("48"));
        assert_eq!(result.gross_income, dec("67200"));
        assert_eq!(result.net_take_home, dec("54908"));
        assert_eq!(result.super_contribution, dec("7728"));
        assert!(!result.super_deducted);
    }

    #[test]
    fn test_comprehensive_matches_simple_abn_scenario() {
        let config = config();
        let structure = WorkStructure::Abn {
            expense_rate: dec("0.15"),
            include_super: true,
        };
        let result = calculate_comprehensive(&simple_inputs(structure), config.config()).unwrap();

        assert_eq!(result.deductible_expenses, dec("10080"));
        assert_eq!(result.tax.taxable_income, dec("57120"));
        assert_eq!(result.net_take_home, dec("40325.60"));
    }

    #[test]
    fn test_fifo_roster_drives_working_weeks_and_lafha() {
        let config = config();
        let inputs = ScenarioInputs {
            hourly_rate: dec("45"),
            overtime: OvertimeConfig::regular_only(dec("38")),
            fifo: FifoConfig {
                paid_travel_hours: dec("6"),
                ..FifoConfig::roster(RosterPattern::FourTwo)
            },
            ..simple_inputs(WorkStructure::Tfn)
        };

        let result = calculate_comprehensive(&inputs, config.config()).unwrap();

        assert_eq!(result.working_weeks, dec("32"));
        assert_eq!(result.earnings.regular_earnings, dec("54720"));
        assert_eq!(result.labour_earnings, dec("56880"));
        // LAFHA is cash in hand but not assessable
        assert_eq!(result.gross_income, dec("78160"));
        assert_eq!(result.tax.taxable_income, dec("56880"));
        assert_eq!(result.tax.total_tax, dec("8989.60"));
        assert_eq!(result.net_take_home, dec("69170.40"));
        // Super on ordinary time earnings only
        assert_eq!(result.super_contribution, dec("6292.80"));
    }

    #[test]
    fn test_abn_expenses_apply_to_labour_only() {
        let config = config();
        let inputs = ScenarioInputs {
            allowances: AllowancesConfig {
                travel_allowance: dec("100"),
                ..Default::default()
            },
            ..simple_inputs(WorkStructure::Abn {
                expense_rate: dec("0.10"),
                include_super: false,
            })
        };

        let result = calculate_comprehensive(&inputs, config.config()).unwrap();

        assert_eq!(result.allowances.taxable_allowances, dec("4800"));
        assert_eq!(result.deductible_expenses, dec("6720"));
        assert_eq!(result.tax.taxable_income, dec("65280"));
    }

    #[test]
    fn test_tax_free_allowances_are_cash_but_not_taxable() {
        let config = config();
        let inputs = ScenarioInputs {
            allowances: AllowancesConfig {
                tool_allowance: dec("10"),
                ..Default::default()
            },
            ..simple_inputs(WorkStructure::Tfn)
        };

        let result = calculate_comprehensive(&inputs, config.config()).unwrap();

        assert_eq!(result.gross_income, dec("67680"));
        assert_eq!(result.tax.taxable_income, dec("67200"));
        assert_eq!(result.net_take_home, dec("55388"));
    }

    #[test]
    fn test_overtime_adds_to_taxable_income() {
        let config = config();
        let inputs = ScenarioInputs {
            hourly_rate: dec("40"),
            overtime: OvertimeConfig {
                overtime_hours_per_week: dec("5"),
                overtime_rate: OvertimeMultiplier::TimeAndAHalf,
                ..OvertimeConfig::regular_only(dec("38"))
            },
            ..simple_inputs(WorkStructure::Tfn)
        };

        let result = calculate_comprehensive(&inputs, config.config()).unwrap();
        assert_eq!(result.tax.taxable_income, dec("87360"));
        // Super guarantee ignores overtime
        assert_eq!(result.super_contribution, dec("8390.40"));
    }

    #[test]
    fn test_provided_accommodation_reported_as_non_cash() {
        let config = config();
        let inputs = ScenarioInputs {
            fifo: FifoConfig {
                accommodation_provided: true,
                meals_provided: true,
                ..FifoConfig::roster(RosterPattern::FourTwo)
            },
            ..simple_inputs(WorkStructure::Tfn)
        };

        let result = calculate_comprehensive(&inputs, config.config()).unwrap();
        assert_eq!(result.fifo.total_lafha, Decimal::ZERO);
        assert_eq!(result.non_cash_benefits, dec("21280"));
        assert_eq!(result.gross_income, result.labour_earnings);
    }

    #[test]
    fn test_roster_longer_than_year_yields_zero_weeks() {
        let config = config();
        let inputs = ScenarioInputs {
            fifo: FifoConfig::roster(RosterPattern::Custom {
                weeks_on: 30,
                weeks_off: 30,
            }),
            ..simple_inputs(WorkStructure::Tfn)
        };

        let result = calculate_comprehensive(&inputs, config.config()).unwrap();
        assert!(!result.fifo.has_valid_cycles);
        assert_eq!(result.working_weeks, Decimal::ZERO);
        assert_eq!(result.net_take_home, Decimal::ZERO);
        assert_eq!(result.weekly_take_home, Decimal::ZERO);
    }

    #[test]
    fn test_comprehensive_audit_trail_order() {
        let config = config();
        let result =
            calculate_comprehensive(&simple_inputs(WorkStructure::Tfn), config.config()).unwrap();
        let rule_ids: Vec<&str> = result
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();

        assert_eq!(
            rule_ids,
            vec![
                "working_weeks",
                "labour_earnings",
                "allowances",
                "taxable_income",
                "income_tax",
                "low_income_tax_offset",
                "medicare_levy",
                "super",
                "net_take_home"
            ]
        );
    }

    #[test]
    fn test_comprehensive_floors_negative_take_home() {
        let inputs = simple_inputs(WorkStructure::Abn {
            expense_rate: Decimal::ONE,
            include_super: true,
        });
        let result = calculate_comprehensive(&inputs, config().config()).unwrap();

        assert_eq!(result.tax.taxable_income, Decimal::ZERO);
        assert_eq!(result.net_take_home, Decimal::ZERO);
        assert_eq!(result.net_shortfall, dec("7728"));
        assert_eq!(result.weekly_take_home, Decimal::ZERO);
    }

    #[test]
    fn test_compare_with_shortfall_favours_employee() {
        let inputs = ComparisonInputs {
            expense_rate: Decimal::ONE,
            ..labourer()
        };
        let comparison = compare_scenarios(&inputs, config().tax_tables()).unwrap();

        assert_eq!(comparison.abn.net_take_home, Decimal::ZERO);
        assert_eq!(comparison.difference, dec("-54908"));
        assert_eq!(comparison.better_structure, Some(StructureKind::Tfn));
    }

    #[test]
    fn test_comprehensive_rejects_invalid_roster() {
        let config = config();
        let inputs = ScenarioInputs {
            fifo: FifoConfig::roster(RosterPattern::Custom {
                weeks_on: 0,
                weeks_off: 0,
            }),
            ..simple_inputs(WorkStructure::Tfn)
        };

        let result = calculate_comprehensive(&inputs, config.config());
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }
}
