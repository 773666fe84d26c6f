//! A wind park: one turbine registry plus its market price and production target.
//!
//! `Park` is the entry point callers use. It owns its state explicitly, so any
//! number of independent parks can coexist. Callers sharing a park across
//! threads must serialize access to it (the HTTP layer holds a mutex for the
//! duration of each operation).

pub mod state;

use crate::planner::{self, PlanEntry, PlanSummary};
use crate::registry::TurbineRegistry;

pub use state::{ParkError, ParkState};

/// A turbine fleet together with the price and target it is planned against.
#[derive(Debug, Clone)]
pub struct Park<R> {
    registry: R,
    state: ParkState,
}

impl<R: TurbineRegistry> Park<R> {
    /// Creates a park over `registry` with price and target at zero.
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            state: ParkState::new(),
        }
    }

    /// Returns the turbine registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Returns the turbine registry for adding or removing turbines.
    ///
    /// The stored target is not re-validated when the fleet changes; the next
    /// target update is checked against the new capacity.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Returns the current price and target.
    pub fn state(&self) -> ParkState {
        self.state
    }

    /// Returns the market price.
    pub fn market_price(&self) -> i64 {
        self.state.market_price()
    }

    /// Returns the production target.
    pub fn production_target(&self) -> i64 {
        self.state.production_target()
    }

    /// Sum of all turbine capacities, recomputed from the registry.
    pub fn max_capacity(&self) -> i64 {
        self.registry.total_capacity()
    }

    /// Sets the market price.
    ///
    /// # Errors
    ///
    /// Returns `ParkError::InvalidArgument` if `price` is negative.
    pub fn set_market_price(&mut self, price: i64) -> Result<(), ParkError> {
        self.state.set_market_price(price).inspect_err(|e| {
            tracing::warn!(price, error = %e, "rejected market price");
        })?;
        tracing::info!(market_price = price, "market price set");
        Ok(())
    }

    /// Sets the production target, validated against the live fleet capacity.
    ///
    /// # Errors
    ///
    /// Returns `ParkError::InvalidArgument` if `target` is outside
    /// `[0, max_capacity]`.
    pub fn set_production_target(&mut self, target: i64) -> Result<(), ParkError> {
        let max_capacity = self.max_capacity();
        self.state
            .set_production_target(target, max_capacity)
            .inspect_err(|e| {
                tracing::warn!(target, max_capacity, error = %e, "rejected production target");
            })?;
        tracing::info!(production_target = target, "production target set");
        Ok(())
    }

    /// Shifts the production target by `delta`, validated against the live
    /// fleet capacity.
    ///
    /// # Errors
    ///
    /// Returns `ParkError::InvalidArgument` if the resulting target is outside
    /// `[0, max_capacity]`; the target is then unchanged.
    pub fn update_production_target(&mut self, delta: i64) -> Result<(), ParkError> {
        let max_capacity = self.max_capacity();
        self.state
            .update_production_target(delta, max_capacity)
            .inspect_err(|e| {
                tracing::warn!(delta, max_capacity, error = %e, "rejected production target update");
            })?;
        tracing::info!(
            delta,
            production_target = self.state.production_target(),
            "production target updated"
        );
        Ok(())
    }

    /// Computes the plan for the current fleet, price, and target.
    pub fn compute_production_plan(&self) -> Vec<PlanEntry> {
        let turbines = self.registry.list_all();
        let plan = planner::compute_production_plan(
            &turbines,
            self.state.market_price(),
            self.state.production_target(),
        );
        let summary = self.summarize(&plan);
        tracing::info!(
            turbines = turbines.len(),
            online = summary.online_count,
            total_production = summary.total_production,
            production_target = summary.production_target,
            market_price = summary.market_price,
            "production plan computed"
        );
        plan
    }

    /// Summarizes `plan` against the current price and target.
    pub fn summarize(&self, plan: &[PlanEntry]) -> PlanSummary {
        PlanSummary::new(
            plan,
            self.state.market_price(),
            self.state.production_target(),
        )
    }
}
