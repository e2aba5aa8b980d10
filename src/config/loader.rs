//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the reference
//! tables of a financial year from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{PresetScenario, TradePreset};

use super::types::{
    AllowanceRates, EngineConfig, FifoRates, PresetCatalogFile, ReferenceMetadata, TaxTables,
};

const META_FILE: &str = "meta.yaml";
const TAX_FILE: &str = "tax.yaml";
const ALLOWANCES_FILE: &str = "allowances.yaml";
const FIFO_FILE: &str = "fifo.yaml";
const PRESETS_FILE: &str = "presets.yaml";

/// Loads and provides access to the engine's reference tables.
///
/// The `ConfigLoader` reads YAML files from a directory and provides methods
/// to query tax tables, allowance rates, FIFO rates and trade presets.
///
/// # Directory Structure
///
/// ```text
/// config/fy2024_25/
/// ├── meta.yaml        # Financial year metadata
/// ├── tax.yaml         # Brackets, Medicare, LITO, super guarantee
/// ├── allowances.yaml  # Reasonable meal amounts, tool allowance cap
/// ├── fifo.yaml        # LAFHA weekly amounts
/// └── presets.yaml     # Trade presets and preset scenarios
/// ```
///
/// # Example
///
/// ```
/// use take_home_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// assert_eq!(loader.metadata().financial_year, "2024-25");
///
/// let preset = loader.get_trade_preset("carpenter").unwrap();
/// println!("Carpenter default rate: ${}", preset.default_hourly_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/fy2024_25")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The tax brackets are not contiguous
    /// - A trade preset or preset scenario is inconsistent
    ///
    /// # Example
    ///
    /// ```no_run
    /// use take_home_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/fy2024_25")?;
    /// # Ok::<(), take_home_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading reference tables");

        let read = |name: &str| -> EngineResult<(String, String)> {
            let file = path.join(name);
            let path_str = file.display().to_string();
            let content = fs::read_to_string(&file).map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;
            Ok((path_str, content))
        };

        Self::from_sources(
            read(META_FILE)?,
            read(TAX_FILE)?,
            read(ALLOWANCES_FILE)?,
            read(FIFO_FILE)?,
            read(PRESETS_FILE)?,
        )
    }

    /// Loads the 2024-25 tables compiled into the binary.
    ///
    /// These are the same files shipped under `config/fy2024_25/`.
    pub fn builtin() -> EngineResult<Self> {
        let source = |name: &str, content: &str| (format!("builtin:{}", name), content.to_string());
        Self::from_sources(
            source(META_FILE, include_str!("../../config/fy2024_25/meta.yaml")),
            source(TAX_FILE, include_str!("../../config/fy2024_25/tax.yaml")),
            source(
                ALLOWANCES_FILE,
                include_str!("../../config/fy2024_25/allowances.yaml"),
            ),
            source(FIFO_FILE, include_str!("../../config/fy2024_25/fifo.yaml")),
            source(
                PRESETS_FILE,
                include_str!("../../config/fy2024_25/presets.yaml"),
            ),
        )
    }

    fn from_sources(
        meta: (String, String),
        tax: (String, String),
        allowances: (String, String),
        fifo: (String, String),
        presets: (String, String),
    ) -> EngineResult<Self> {
        let metadata = Self::parse_yaml::<ReferenceMetadata>(&meta.0, &meta.1)?;
        let tax_tables = Self::parse_yaml::<TaxTables>(&tax.0, &tax.1)?;
        let allowance_rates = Self::parse_yaml::<AllowanceRates>(&allowances.0, &allowances.1)?;
        let fifo_rates = Self::parse_yaml::<FifoRates>(&fifo.0, &fifo.1)?;
        let catalog = Self::parse_yaml::<PresetCatalogFile>(&presets.0, &presets.1)?;

        if fifo_rates.weeks_per_year == 0 {
            return Err(EngineError::ConfigParseError {
                path: fifo.0,
                message: "weeks_per_year must be positive".to_string(),
            });
        }
        Self::validate_catalog(&presets.0, &catalog.trades, &catalog.scenarios)?;

        debug!(
            financial_year = %metadata.financial_year,
            brackets = tax_tables.brackets().len(),
            trades = catalog.trades.len(),
            scenarios = catalog.scenarios.len(),
            "Reference tables loaded"
        );

        let config = EngineConfig::new(metadata, tax_tables, allowance_rates, fifo_rates, catalog);
        Ok(Self { config })
    }

    /// Parses a YAML document.
    fn parse_yaml<T: serde::de::DeserializeOwned>(path: &str, content: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Checks preset ranges, id uniqueness and scenario trade references.
    fn validate_catalog(
        path: &str,
        trades: &[TradePreset],
        scenarios: &[PresetScenario],
    ) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.to_string(),
            message,
        };

        let mut trade_ids = HashSet::new();
        for trade in trades {
            trade.validate().map_err(|e| parse_error(e.to_string()))?;
            if !trade_ids.insert(trade.id.as_str()) {
                return Err(parse_error(format!("duplicate trade id '{}'", trade.id)));
            }
        }

        let mut scenario_ids = HashSet::new();
        for scenario in scenarios {
            if !scenario_ids.insert(scenario.id.as_str()) {
                return Err(parse_error(format!("duplicate scenario id '{}'", scenario.id)));
            }
            if !trade_ids.contains(scenario.trade_id.as_str()) {
                return Err(parse_error(format!(
                    "scenario '{}' refers to unknown trade '{}'",
                    scenario.id, scenario.trade_id
                )));
            }
            scenario
                .to_comparison_inputs()
                .validate()
                .map_err(|e| parse_error(format!("scenario '{}': {}", scenario.id, e)))?;
            scenario.check_rate_premium();
        }
        Ok(())
    }

    /// Returns the underlying reference configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the reference metadata.
    pub fn metadata(&self) -> &ReferenceMetadata {
        self.config.metadata()
    }

    /// Returns the tax tables.
    pub fn tax_tables(&self) -> &TaxTables {
        self.config.tax()
    }

    /// Returns the allowance reference amounts.
    pub fn allowance_rates(&self) -> &AllowanceRates {
        self.config.allowances()
    }

    /// Returns the FIFO reference amounts.
    pub fn fifo_rates(&self) -> &FifoRates {
        self.config.fifo()
    }

    /// Returns every trade preset.
    pub fn trade_presets(&self) -> &[TradePreset] {
        self.config.trades()
    }

    /// Returns every preset scenario.
    pub fn preset_scenarios(&self) -> &[PresetScenario] {
        self.config.scenarios()
    }

    /// Gets a trade preset by its id.
    ///
    /// # Example
    ///
    /// ```
    /// use take_home_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::builtin()?;
    /// let preset = loader.get_trade_preset("electrician")?;
    /// assert_eq!(preset.name, "Electrician");
    /// # Ok::<(), take_home_engine::error::EngineError>(())
    /// ```
    pub fn get_trade_preset(&self, id: &str) -> EngineResult<&TradePreset> {
        self.config
            .trades()
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| EngineError::PresetNotFound { id: id.to_string() })
    }

    /// Gets a preset scenario by its id.
    pub fn get_preset_scenario(&self, id: &str) -> EngineResult<&PresetScenario> {
        self.config
            .scenarios()
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::PresetNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/fy2024_25"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().financial_year, "2024-25");
        assert_eq!(loader.metadata().jurisdiction, "AU");
    }

    #[test]
    fn test_builtin_matches_files_on_disk() {
        let from_disk = ConfigLoader::load(config_path()).unwrap();
        let builtin = ConfigLoader::builtin().unwrap();

        assert_eq!(from_disk.tax_tables(), builtin.tax_tables());
        assert_eq!(from_disk.allowance_rates(), builtin.allowance_rates());
        assert_eq!(from_disk.fifo_rates(), builtin.fifo_rates());
        assert_eq!(from_disk.trade_presets(), builtin.trade_presets());
        assert_eq!(from_disk.preset_scenarios(), builtin.preset_scenarios());
    }

    #[test]
    fn test_tax_tables_loaded_correctly() {
        let loader = ConfigLoader::builtin().unwrap();
        let tables = loader.tax_tables();

        assert_eq!(tables.brackets().len(), 5);
        assert_eq!(tables.brackets()[2].base_tax, dec("4288"));
        assert_eq!(tables.brackets()[4].upper_bound, None);
        assert_eq!(tables.medicare().rate, dec("0.02"));
        assert_eq!(tables.medicare().threshold, dec("26000"));
        assert_eq!(tables.lito().max_offset, dec("700"));
        assert_eq!(tables.super_guarantee_rate(), dec("0.115"));
    }

    #[test]
    fn test_allowance_and_fifo_rates_loaded_correctly() {
        let loader = ConfigLoader::builtin().unwrap();

        assert_eq!(loader.allowance_rates().meal_rates.breakfast, dec("28.75"));
        assert_eq!(loader.allowance_rates().meal_rates.lunch, dec("33.25"));
        assert_eq!(loader.allowance_rates().meal_rates.dinner, dec("59.00"));
        assert_eq!(loader.allowance_rates().tool_tax_free_per_week, dec("12"));
        assert_eq!(loader.fifo_rates().lafha_accommodation_per_week, dec("350"));
        assert_eq!(loader.fifo_rates().lafha_food_per_week, dec("315"));
        assert_eq!(loader.fifo_rates().weeks_per_year, 52);
    }

    #[test]
    fn test_get_trade_preset() {
        let loader = ConfigLoader::builtin().unwrap();

        let preset = loader.get_trade_preset("general_labourer").unwrap();
        assert_eq!(preset.name, "General Labourer");
        assert_eq!(preset.default_hourly_rate, dec("35"));
        assert!(preset.hourly_rate_min <= preset.default_hourly_rate);
        assert!(preset.default_hourly_rate <= preset.hourly_rate_max);
    }

    #[test]
    fn test_get_trade_preset_unknown_returns_error() {
        let loader = ConfigLoader::builtin().unwrap();

        match loader.get_trade_preset("unknown") {
            Err(EngineError::PresetNotFound { id }) => assert_eq!(id, "unknown"),
            _ => panic!("Expected PresetNotFound error"),
        }
    }

    #[test]
    fn test_preset_scenarios_reference_known_trades() {
        let loader = ConfigLoader::builtin().unwrap();

        assert!(!loader.preset_scenarios().is_empty());
        for scenario in loader.preset_scenarios() {
            assert!(loader.get_trade_preset(&scenario.trade_id).is_ok());
        }
        let scenario = loader.get_preset_scenario("carpenter_experienced").unwrap();
        assert!(scenario.abn_hourly_rate > scenario.tfn_hourly_rate);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("meta.yaml"), "{}", path);
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_catalog_with_unknown_trade_reference_is_rejected() {
        let catalog: PresetCatalogFile = serde_yaml::from_str(
            r#"
trades: []
scenarios:
  - id: orphan
    name: "Orphan"
    trade_id: missing
    tfn_hourly_rate: "30"
    abn_hourly_rate: "35"
    hours_per_week: "38"
    weeks_per_year: "48"
    expense_rate: "0.1"
    include_super: true
    description: ""
"#,
        )
        .unwrap();

        let result =
            ConfigLoader::validate_catalog("presets.yaml", &catalog.trades, &catalog.scenarios);
        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "presets.yaml");
                assert!(message.contains("unknown trade 'missing'"), "{}", message);
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_invalid_tax_table_surfaces_as_parse_error() {
        let result = ConfigLoader::parse_yaml::<TaxTables>(
            "tax.yaml",
            r#"
brackets:
  - lower_bound: "100"
    marginal_rate: "0.1"
    base_tax: "0"
medicare: { rate: "0.02", threshold: "26000" }
lito: { max_offset: "700", phase_out_start: "37500", phase_out_end: "45000" }
super_guarantee_rate: "0.115"
"#,
        );
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("first bracket must start at 0"), "{}", message)
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }
}
