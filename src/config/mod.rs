//! Reference table loading for the take-home pay engine.
//!
//! This module loads the tax, allowance, FIFO and trade preset reference
//! tables for a financial year from YAML files. The tables are loaded once
//! and are read-only afterwards.
//!
//! # Example
//!
//! ```
//! use take_home_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::builtin().unwrap();
//! println!("Loaded tables for {}", config.metadata().financial_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllowanceRates, EngineConfig, FifoRates, LitoConfig, MealRates, MedicareConfig,
    PresetCatalogFile, ReferenceMetadata, TaxTables,
};
