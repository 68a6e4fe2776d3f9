//! # Settings Module
//!
//! ## Purpose
//! Run configuration of the `ChemKin` binary: which mechanism and NASA library to load,
//! at which state (temperature, concentrations) the rates are computed, and the optional
//! temperature sweep.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "mechanism_file": "mechanism.json",
//!   "thermo_file": "nasa.json",
//!   "temperature": 1500.0,
//!   "concentrations": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
//!   "sweep": {"T0": 500.0, "Tend": 2500.0, "n": 5},
//!   "log_level": "info"
//! }
//! ```
//! Missing files fall back to the built-in hydrogen-oxygen demo data.
//!
//! ## Usage Pattern
//! ```rust
//! use ChemKin::settings::KineticsConfig;
//!
//! let config = KineticsConfig::load("no_such_config.json");
//! assert_eq!(config, KineticsConfig::default());
//! ```

use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// default location of the configuration file
pub const CONFIG_FILE: &str = "kinetics_config.json";

/// temperature sweep: n points from T0 to Tend, both included
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub T0: f64,
    pub Tend: f64,
    pub n: usize,
}

/// Configuration of one run.
///
/// # Fields
/// * `mechanism_file` - JSON mechanism, demo mechanism when None
/// * `thermo_file` - JSON NASA library, demo GRI-Mech data when None
/// * `temperature` - temperature of the single-point calculation, K
/// * `concentrations` - one value per species, in species order of the mechanism
/// * `sweep` - optional temperature sweep
/// * `log_level` - "error", "warn", "info", "debug" or "trace"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KineticsConfig {
    pub mechanism_file: Option<String>,
    pub thermo_file: Option<String>,
    pub temperature: f64,
    pub concentrations: Vec<f64>,
    pub sweep: Option<SweepConfig>,
    pub log_level: String,
}

impl Default for KineticsConfig {
    /// demo state: six species of the hydrogen-oxygen mechanism at 1500 K
    fn default() -> Self {
        Self {
            mechanism_file: None,
            thermo_file: None,
            temperature: 1500.0,
            concentrations: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            sweep: Some(SweepConfig {
                T0: 500.0,
                Tend: 2500.0,
                n: 5,
            }),
            log_level: "info".to_string(),
        }
    }
}

impl KineticsConfig {
    /// Loads configuration from a JSON file.
    ///
    /// If the file doesn't exist the default configuration is returned, if it exists
    /// but cannot be read or parsed a warning is logged and defaults are used as well.
    pub fn load<P: AsRef<Path>>(config_file: P) -> Self {
        Self::try_load(config_file.as_ref()).unwrap_or_else(|e| {
            warn!(
                "config file '{}' is invalid ({}), using defaults",
                config_file.as_ref().display(),
                e
            );
            Self::default()
        })
    }

    fn try_load(config_file: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if config_file.exists() {
            let content = fs::read_to_string(config_file)?;
            let config: KineticsConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(KineticsConfig::default())
        }
    }

    /// Saves configuration as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, config_file: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_file, content)?;
        Ok(())
    }

    /// log level for the terminal logger, Info if the string is not recognized
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
