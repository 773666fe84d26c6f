//! TOML-based park configuration and preset definitions.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::registry::{InMemoryRegistry, RegistryError};
use crate::turbine::Turbine;

/// Top-level park configuration parsed from TOML.
///
/// All sections have defaults. Load from TOML with
/// [`ParkConfig::from_toml_file`] or use [`ParkConfig::reference`] for the
/// built-in five-turbine fleet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParkConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Initial market conditions.
    #[serde(default)]
    pub market: MarketConfig,
    /// Turbines to register, in registry order.
    #[serde(default, rename = "turbine")]
    pub turbines: Vec<TurbineConfig>,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Market price and production target applied at startup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketConfig {
    /// Initial market price (€/MWh).
    pub market_price: i64,
    /// Initial production target (MWh).
    pub production_target: i64,
}

/// A single turbine entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TurbineConfig {
    /// Unique identifier.
    pub identifier: String,
    /// Capacity (MWh).
    pub capacity: u32,
    /// Production cost (€/MWh).
    pub production_cost: u32,
}

impl From<&TurbineConfig> for Turbine {
    fn from(t: &TurbineConfig) -> Self {
        Turbine::new(t.identifier.clone(), t.capacity, t.production_cost)
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"market.market_price"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ParkConfig {
    /// Returns the reference fleet: turbines A..E with no market activity.
    pub fn reference() -> Self {
        let fleet = [("A", 2, 15), ("B", 2, 5), ("C", 6, 5), ("D", 6, 5), ("E", 5, 3)];
        Self {
            turbines: fleet
                .into_iter()
                .map(|(identifier, capacity, production_cost)| TurbineConfig {
                    identifier: identifier.to_string(),
                    capacity,
                    production_cost,
                })
                .collect(),
            ..Self::default()
        }
    }

    /// Returns a park with no turbines.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["reference", "empty"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "reference" => Ok(Self::reference()),
            "empty" => Ok(Self::empty()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid. The production
    /// target is checked against the configured fleet's total capacity.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for (i, t) in self.turbines.iter().enumerate() {
            if t.identifier.trim().is_empty() {
                errors.push(ConfigError {
                    field: format!("turbine[{i}].identifier"),
                    message: "must not be empty".into(),
                });
            }
            if !seen.insert(t.identifier.as_str()) {
                errors.push(ConfigError {
                    field: format!("turbine[{i}].identifier"),
                    message: format!("duplicate identifier \"{}\"", t.identifier),
                });
            }
        }

        let m = &self.market;
        if m.market_price < 0 {
            errors.push(ConfigError {
                field: "market.market_price".into(),
                message: "must be >= 0".into(),
            });
        }
        let max_capacity = self.total_capacity();
        if !(0..=max_capacity).contains(&m.production_target) {
            errors.push(ConfigError {
                field: "market.production_target".into(),
                message: format!("must be in [0, {max_capacity}]"),
            });
        }

        errors
    }

    /// Sum of configured turbine capacities.
    pub fn total_capacity(&self) -> i64 {
        self.turbines.iter().map(|t| i64::from(t.capacity)).sum()
    }

    /// Builds the turbine registry described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateIdentifier` if two turbines share an
    /// identifier.
    pub fn build_registry(&self) -> Result<InMemoryRegistry, RegistryError> {
        InMemoryRegistry::from_turbines(self.turbines.iter().map(Turbine::from))
    }
}
