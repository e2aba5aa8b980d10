//! In-memory store of saved scenarios for side-by-side comparison.
//!
//! A session holds at most [`MAX_SAVED_SCENARIOS`] snapshots. Only raw inputs
//! are kept, and results are recalculated on request so they always reflect
//! the reference tables passed in.

use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{ScenarioComparison, compare_scenarios};
use crate::config::TaxTables;
use crate::error::{EngineError, EngineResult};
use crate::models::{SavedScenario, ScenarioDraft};

/// Maximum number of scenarios a session can hold.
pub const MAX_SAVED_SCENARIOS: usize = 3;

/// Saved scenarios owned by a single caller.
///
/// # Example
///
/// ```
/// use take_home_engine::config::ConfigLoader;
/// use take_home_engine::models::ScenarioDraft;
/// use take_home_engine::session::ComparisonSession;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let mut session = ComparisonSession::new();
///
/// let id = session
///     .save(ScenarioDraft {
///         name: "Current job".to_string(),
///         trade: "general_labourer".to_string(),
///         hourly_rate: Decimal::from(35),
///         hours_per_week: Decimal::from(40),
///         weeks_per_year: Decimal::from(48),
///         expense_rate: Decimal::from_str("0.15").unwrap(),
///         include_super: true,
///     })
///     .unwrap()
///     .id;
///
/// let comparison = session.recalculate(id, config.tax_tables()).unwrap();
/// assert_eq!(comparison.tfn.net_take_home, Decimal::from(54_908));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComparisonSession {
    scenarios: Vec<SavedScenario>,
}

impl ComparisonSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a draft, stamping it with an id and timestamp.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the draft's values fail validation
    /// - `ScenarioLimitReached` if the session is already full
    pub fn save(&mut self, draft: ScenarioDraft) -> EngineResult<&SavedScenario> {
        draft.to_comparison_inputs().validate()?;
        if self.is_full() {
            return Err(EngineError::ScenarioLimitReached {
                limit: MAX_SAVED_SCENARIOS,
            });
        }

        let scenario = SavedScenario::from_draft(draft);
        info!(id = %scenario.id, name = %scenario.name, "Saved scenario");
        self.scenarios.push(scenario);

        let index = self.scenarios.len() - 1;
        Ok(&self.scenarios[index])
    }

    /// Removes a scenario and returns it.
    pub fn remove(&mut self, id: Uuid) -> EngineResult<SavedScenario> {
        let index = self
            .scenarios
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| EngineError::ScenarioNotFound { id: id.to_string() })?;

        debug!(id = %id, "Removed scenario");
        Ok(self.scenarios.remove(index))
    }

    /// Looks up a scenario by id.
    pub fn get(&self, id: Uuid) -> EngineResult<&SavedScenario> {
        self.scenarios
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::ScenarioNotFound { id: id.to_string() })
    }

    /// Saved scenarios in the order they were saved.
    pub fn list(&self) -> &[SavedScenario] {
        &self.scenarios
    }

    /// Removes every saved scenario.
    pub fn clear(&mut self) {
        self.scenarios.clear();
    }

    /// Number of saved scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the session holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Whether another scenario can no longer be saved.
    pub fn is_full(&self) -> bool {
        self.scenarios.len() >= MAX_SAVED_SCENARIOS
    }

    /// Recomputes the TFN/ABN comparison for a saved scenario.
    pub fn recalculate(&self, id: Uuid, tables: &TaxTables) -> EngineResult<ScenarioComparison> {
        let scenario = self.get(id)?;
        compare_scenarios(&scenario.to_comparison_inputs(), tables)
    }

    /// Recomputes every saved scenario, in saved order.
    pub fn recalculate_all(
        &self,
        tables: &TaxTables,
    ) -> EngineResult<Vec<(Uuid, ScenarioComparison)>> {
        self.scenarios
            .iter()
            .map(|s| Ok((s.id, compare_scenarios(&s.to_comparison_inputs(), tables)?)))
            .collect()
    }
}
