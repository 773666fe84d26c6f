//! Turbine registry: the store the planner reads its fleet from.

use thiserror::Error;

use crate::turbine::Turbine;

/// Errors raised when mutating a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A turbine with this identifier is already registered.
    #[error("turbine \"{0}\" is already registered")]
    DuplicateIdentifier(String),
}

/// Read access to the full turbine fleet.
///
/// Implementations must return turbines in a stable order for a given
/// registry state; the production plan is emitted in this order.
pub trait TurbineRegistry {
    /// Returns a snapshot of every known turbine.
    fn list_all(&self) -> Vec<Turbine>;

    /// Number of registered turbines.
    fn turbine_count(&self) -> usize {
        self.list_all().len()
    }

    /// Sum of all turbine capacities, recomputed from the current snapshot.
    fn total_capacity(&self) -> i64 {
        self.list_all()
            .iter()
            .map(|t| i64::from(t.capacity()))
            .sum()
    }
}

/// Insertion-ordered in-memory registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    turbines: Vec<Turbine>,
}

impl InMemoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from turbines in iteration order.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateIdentifier` on the first repeated
    /// identifier.
    pub fn from_turbines(turbines: impl IntoIterator<Item = Turbine>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for t in turbines {
            registry.insert(t)?;
        }
        Ok(registry)
    }

    /// Adds a turbine at the end of the iteration order.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateIdentifier` if the identifier is
    /// taken; the registry is left unchanged.
    pub fn insert(&mut self, turbine: Turbine) -> Result<(), RegistryError> {
        if self.get(turbine.identifier()).is_some() {
            return Err(RegistryError::DuplicateIdentifier(
                turbine.identifier().to_string(),
            ));
        }
        tracing::debug!(
            identifier = turbine.identifier(),
            capacity = turbine.capacity(),
            production_cost = turbine.production_cost(),
            "registered turbine"
        );
        self.turbines.push(turbine);
        Ok(())
    }

    /// Removes and returns the turbine with `identifier`, if present.
    ///
    /// Remaining turbines keep their relative order.
    pub fn remove(&mut self, identifier: &str) -> Option<Turbine> {
        let idx = self
            .turbines
            .iter()
            .position(|t| t.identifier() == identifier)?;
        Some(self.turbines.remove(idx))
    }

    /// Looks up a turbine by identifier.
    pub fn get(&self, identifier: &str) -> Option<&Turbine> {
        self.turbines.iter().find(|t| t.identifier() == identifier)
    }

    /// Number of registered turbines.
    pub fn len(&self) -> usize {
        self.turbines.len()
    }

    /// Whether the registry has no turbines.
    pub fn is_empty(&self) -> bool {
        self.turbines.is_empty()
    }
}

impl TurbineRegistry for InMemoryRegistry {
    fn list_all(&self) -> Vec<Turbine> {
        self.turbines.clone()
    }

    fn turbine_count(&self) -> usize {
        self.turbines.len()
    }

    fn total_capacity(&self) -> i64 {
        self.turbines.iter().map(|t| i64::from(t.capacity())).sum()
    }
}
