//! Turbine records as stored in the registry.

use serde::{Deserialize, Serialize};

/// A production unit with a fixed capacity and a fixed cost per unit of output.
///
/// Turbines are immutable once created. A turbine is either fully online at
/// `capacity` or fully offline; there is no partial output.
///
/// # Examples
///
/// ```
/// use windpark::turbine::Turbine;
///
/// let t = Turbine::new("E", 5, 3);
/// assert_eq!(t.identifier(), "E");
/// assert!(t.is_profitable_at(4));
/// assert!(!t.is_profitable_at(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turbine {
    identifier: String,
    capacity: u32,
    production_cost: u32,
}

impl Turbine {
    /// Creates a new turbine.
    ///
    /// # Arguments
    ///
    /// * `identifier` - Unique key within a registry
    /// * `capacity` - Output per period when online (MWh)
    /// * `production_cost` - Cost per unit of energy (€/MWh)
    pub fn new(identifier: impl Into<String>, capacity: u32, production_cost: u32) -> Self {
        Self {
            identifier: identifier.into(),
            capacity,
            production_cost,
        }
    }

    /// Returns the unique identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the capacity in MWh.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the production cost in €/MWh.
    pub fn production_cost(&self) -> u32 {
        self.production_cost
    }

    /// Whether running this turbine earns money at `market_price`.
    ///
    /// Strict: a turbine whose cost equals the price yields no profit and is
    /// not eligible.
    pub fn is_profitable_at(&self, market_price: i64) -> bool {
        i64::from(self.production_cost) < market_price
    }
}
