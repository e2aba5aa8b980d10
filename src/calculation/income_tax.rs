//! Resident income tax, Medicare levy and low income tax offset.
//!
//! All three functions are pure: the same taxable income and tables always
//! produce the same result.
//!
//! ## 2024-25 Rate Structure
//!
//! | Taxable income | Rate | Base tax |
//! |---|---|---|
//! | 0 to 18,200 | 0% | 0 |
//! | 18,200 to 45,000 | 16% | 0 |
//! | 45,000 to 135,000 | 30% | 4,288 |
//! | 135,000 to 190,000 | 37% | 31,288 |
//! | 190,000 and over | 45% | 51,638 |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxTables;

use super::common::clamp_non_negative;

/// Income tax payable before offsets and the marginal rate it was taxed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxResult {
    /// Tax payable before any offset.
    pub tax: Decimal,
    /// Marginal rate of the bracket the income fell in (0 for no income).
    pub marginal_rate: Decimal,
}

/// Computes progressive income tax on taxable income.
///
/// Income at or below zero pays no tax. Otherwise the bracket whose
/// `[lower_bound, upper_bound)` contains the income is located and
/// `base_tax + marginal_rate × (income − lower_bound)` is returned.
///
/// # Examples
///
/// ```
/// use take_home_engine::calculation::compute_income_tax;
/// use take_home_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let result = compute_income_tax(Decimal::from(45_000), config.tax_tables());
/// assert_eq!(result.tax, Decimal::from(4_288));
/// ```
pub fn compute_income_tax(taxable_income: Decimal, tables: &TaxTables) -> IncomeTaxResult {
    if taxable_income <= Decimal::ZERO {
        return IncomeTaxResult {
            tax: Decimal::ZERO,
            marginal_rate: Decimal::ZERO,
        };
    }

    tables.bracket_for(taxable_income).map_or(
        IncomeTaxResult {
            tax: Decimal::ZERO,
            marginal_rate: Decimal::ZERO,
        },
        |bracket| IncomeTaxResult {
            tax: bracket.tax_for(taxable_income),
            marginal_rate: bracket.marginal_rate,
        },
    )
}

/// Computes the Medicare levy.
///
/// A flat rate applies to the whole taxable income once it exceeds the
/// low-income threshold; at or below the threshold no levy is payable. The
/// shade-in band above the threshold is not modelled.
pub fn compute_medicare_levy(taxable_income: Decimal, tables: &TaxTables) -> Decimal {
    let medicare = tables.medicare();
    if taxable_income <= medicare.threshold {
        return Decimal::ZERO;
    }
    taxable_income * medicare.rate
}

/// Computes the low income tax offset.
///
/// The full offset applies at or below the phase-out start, nothing at or
/// above the phase-out end, and it reduces linearly in between.
///
/// # Examples
///
/// ```
/// use take_home_engine::calculation::compute_lito;
/// use take_home_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin().unwrap();
/// assert_eq!(compute_lito(Decimal::from(30_000), config.tax_tables()), Decimal::from(700));
/// assert_eq!(compute_lito(Decimal::from(41_250), config.tax_tables()), Decimal::from(350));
/// assert_eq!(compute_lito(Decimal::from(45_000), config.tax_tables()), Decimal::ZERO);
/// ```
pub fn compute_lito(taxable_income: Decimal, tables: &TaxTables) -> Decimal {
    let lito = tables.lito();
    if taxable_income <= lito.phase_out_start {
        return lito.max_offset;
    }
    if taxable_income >= lito.phase_out_end {
        return Decimal::ZERO;
    }
    lito.max_offset * (lito.phase_out_end - taxable_income)
        / (lito.phase_out_end - lito.phase_out_start)
}

/// The full tax position for a taxable income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    /// The income the tax was assessed on.
    pub taxable_income: Decimal,
    /// Income tax before the offset.
    pub income_tax: Decimal,
    /// Low income tax offset available.
    pub lito: Decimal,
    /// Income tax after the offset, never negative.
    pub income_tax_after_offset: Decimal,
    /// Medicare levy.
    pub medicare_levy: Decimal,
    /// Income tax after offset plus Medicare levy.
    pub total_tax: Decimal,
    /// Marginal income tax rate.
    pub marginal_rate: Decimal,
}

/// Assesses income tax, LITO and Medicare levy together.
///
/// The offset is non-refundable, so income tax after the offset is floored
/// at zero before the levy is added.
pub fn compute_tax_summary(taxable_income: Decimal, tables: &TaxTables) -> TaxSummary {
    let income_tax = compute_income_tax(taxable_income, tables);
    let lito = compute_lito(taxable_income, tables);
    let income_tax_after_offset = clamp_non_negative(income_tax.tax - lito);
    let medicare_levy = compute_medicare_levy(taxable_income, tables);

    TaxSummary {
        taxable_income,
        income_tax: income_tax.tax,
        lito,
        income_tax_after_offset,
        medicare_levy,
        total_tax: income_tax_after_offset + medicare_levy,
        marginal_rate: income_tax.marginal_rate,
    }
}
