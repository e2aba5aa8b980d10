//! Reference table types for the take-home pay engine.
//!
//! This module contains the strongly-typed reference tables that are
//! deserialized from the YAML files of a financial year directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PresetScenario, TaxBracket, TradePreset};

/// Metadata identifying a set of reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceMetadata {
    /// The income year the tables apply to (e.g. "2024-25").
    pub financial_year: String,
    /// Jurisdiction code; always "AU".
    pub jurisdiction: String,
    /// Where the rates were taken from.
    pub source_url: String,
}

/// Medicare levy settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicareConfig {
    /// Flat levy rate (e.g. 0.02).
    pub rate: Decimal,
    /// Taxable income at or below which no levy is payable.
    pub threshold: Decimal,
}

/// Low income tax offset settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LitoConfig {
    /// Full offset available at or below `phase_out_start`.
    pub max_offset: Decimal,
    /// Taxable income at which the offset starts to reduce.
    pub phase_out_start: Decimal,
    /// Taxable income at which the offset reaches zero.
    pub phase_out_end: Decimal,
}

/// The raw shape of `tax.yaml`, validated into [`TaxTables`].
#[derive(Debug, Clone, Deserialize)]
struct TaxTablesFile {
    brackets: Vec<TaxBracket>,
    medicare: MedicareConfig,
    lito: LitoConfig,
    super_guarantee_rate: Decimal,
}

/// Validated income tax, Medicare, LITO and super guarantee tables.
///
/// Brackets are guaranteed to be sorted, to start at zero, to be contiguous
/// with no gaps or overlaps, and to end with a single unbounded bracket.
/// Each bracket's base tax equals the tax payable at the top of the bracket
/// below it, so there is no jump at a seam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaxTablesFile")]
pub struct TaxTables {
    brackets: Vec<TaxBracket>,
    medicare: MedicareConfig,
    lito: LitoConfig,
    super_guarantee_rate: Decimal,
}

impl TryFrom<TaxTablesFile> for TaxTables {
    type Error = EngineError;

    fn try_from(file: TaxTablesFile) -> EngineResult<Self> {
        Self::new(file.brackets, file.medicare, file.lito, file.super_guarantee_rate)
    }
}

fn table_error(message: String) -> EngineError {
    EngineError::InvalidTaxTable { message }
}

fn ensure_rate(name: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(table_error(format!(
            "{} {} must be between 0 and 1",
            name,
            rate.normalize()
        )));
    }
    Ok(())
}

impl TaxTables {
    /// Builds validated tables.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTaxTable`] if the brackets do not
    /// partition [0, ∞), a rate lies outside [0, 1], or the LITO phase-out
    /// range is empty.
    pub fn new(
        brackets: Vec<TaxBracket>,
        medicare: MedicareConfig,
        lito: LitoConfig,
        super_guarantee_rate: Decimal,
    ) -> EngineResult<Self> {
        let first = brackets
            .first()
            .ok_or_else(|| table_error("at least one bracket is required".to_string()))?;
        if first.lower_bound != Decimal::ZERO {
            return Err(table_error(format!(
                "first bracket must start at 0, found {}",
                first.lower_bound.normalize()
            )));
        }
        if first.base_tax != Decimal::ZERO {
            return Err(table_error("first bracket must have zero base tax".to_string()));
        }

        for (index, bracket) in brackets.iter().enumerate() {
            ensure_rate("marginal rate", bracket.marginal_rate)?;
            let next = brackets.get(index + 1);
            match (bracket.upper_bound, next) {
                (Some(upper), Some(next)) => {
                    if upper <= bracket.lower_bound {
                        return Err(table_error(format!(
                            "bracket starting at {} has upper bound {} below its lower bound",
                            bracket.lower_bound.normalize(),
                            upper.normalize()
                        )));
                    }
                    if next.lower_bound != upper {
                        return Err(table_error(format!(
                            "bracket ending at {} is followed by one starting at {}",
                            upper.normalize(),
                            next.lower_bound.normalize()
                        )));
                    }
                    let seam_tax = bracket.tax_for(upper);
                    if next.base_tax != seam_tax {
                        return Err(table_error(format!(
                            "base tax {} at {} does not match {} accumulated below it",
                            next.base_tax.normalize(),
                            upper.normalize(),
                            seam_tax.normalize()
                        )));
                    }
                }
                (None, Some(_)) => {
                    return Err(table_error(format!(
                        "only the last bracket may be unbounded, found one at {}",
                        bracket.lower_bound.normalize()
                    )));
                }
                (Some(upper), None) => {
                    return Err(table_error(format!(
                        "last bracket must be unbounded, found upper bound {}",
                        upper.normalize()
                    )));
                }
                (None, None) => {}
            }
        }

        ensure_rate("Medicare levy rate", medicare.rate)?;
        ensure_rate("super guarantee rate", super_guarantee_rate)?;
        if lito.phase_out_start >= lito.phase_out_end {
            return Err(table_error(format!(
                "LITO phase-out start {} must be below end {}",
                lito.phase_out_start.normalize(),
                lito.phase_out_end.normalize()
            )));
        }

        Ok(Self {
            brackets,
            medicare,
            lito,
            super_guarantee_rate,
        })
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Finds the bracket containing `income`, or `None` for negative income.
    pub fn bracket_for(&self, income: Decimal) -> Option<&TaxBracket> {
        self.brackets.iter().find(|b| b.contains(income))
    }

    /// Returns the Medicare levy settings.
    pub fn medicare(&self) -> &MedicareConfig {
        &self.medicare
    }

    /// Returns the LITO settings.
    pub fn lito(&self) -> &LitoConfig {
        &self.lito
    }

    /// Returns the super guarantee rate.
    pub fn super_guarantee_rate(&self) -> Decimal {
        self.super_guarantee_rate
    }
}

/// Per-meal reasonable allowance amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRates {
    /// Breakfast amount per day.
    pub breakfast: Decimal,
    /// Lunch amount per day.
    pub lunch: Decimal,
    /// Dinner amount per day.
    pub dinner: Decimal,
}

/// Allowance reference amounts from `allowances.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceRates {
    /// Reasonable meal amounts.
    pub meal_rates: MealRates,
    /// Weekly tool allowance treated as tax free.
    pub tool_tax_free_per_week: Decimal,
}

/// FIFO reference amounts from `fifo.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FifoRates {
    /// Weekly LAFHA accommodation component.
    pub lafha_accommodation_per_week: Decimal,
    /// Weekly LAFHA food component.
    pub lafha_food_per_week: Decimal,
    /// Calendar weeks a roster cycles through each year.
    pub weeks_per_year: u32,
}

/// The raw shape of `presets.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetCatalogFile {
    /// Trade presets.
    pub trades: Vec<TradePreset>,
    /// Preset comparison scenarios.
    #[serde(default)]
    pub scenarios: Vec<PresetScenario>,
}

/// The complete reference configuration loaded from YAML files.
///
/// Loaded once at start-up and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: ReferenceMetadata,
    tax: TaxTables,
    allowances: AllowanceRates,
    fifo: FifoRates,
    trades: Vec<TradePreset>,
    scenarios: Vec<PresetScenario>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: ReferenceMetadata,
        tax: TaxTables,
        allowances: AllowanceRates,
        fifo: FifoRates,
        presets: PresetCatalogFile,
    ) -> Self {
        Self {
            metadata,
            tax,
            allowances,
            fifo,
            trades: presets.trades,
            scenarios: presets.scenarios,
        }
    }

    /// Returns the reference metadata.
    pub fn metadata(&self) -> &ReferenceMetadata {
        &self.metadata
    }

    /// Returns the tax tables.
    pub fn tax(&self) -> &TaxTables {
        &self.tax
    }

    /// Returns the allowance reference amounts.
    pub fn allowances(&self) -> &AllowanceRates {
        &self.allowances
    }

    /// Returns the FIFO reference amounts.
    pub fn fifo(&self) -> &FifoRates {
        &self.fifo
    }

    /// Returns all trade presets in catalog order.
    pub fn trades(&self) -> &[TradePreset] {
        &self.trades
    }

    /// Returns all preset scenarios in catalog order.
    pub fn scenarios(&self) -> &[PresetScenario] {
        &self.scenarios
    }
}
