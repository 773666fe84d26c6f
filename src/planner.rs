//! Cost-ordered allocation of production across the turbine fleet.
//!
//! The planner is a pure function of `(turbines, market_price, target)`:
//!
//! 1. Keep only turbines with `production_cost < market_price`.
//! 2. Order them by ascending cost. Equal-cost turbines keep registry order.
//! 3. Walk the ordered list, bringing each turbine online while its full
//!    capacity still fits into the remaining target. Stop at the first
//!    turbine that would overshoot; later, smaller turbines are not tried.
//! 4. Emit one entry per turbine in registry order.

use std::fmt;

use serde::Serialize;

use crate::turbine::Turbine;

/// Expected output of one turbine in a production plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    /// Identifier of the turbine.
    pub identifier: String,
    /// Full capacity if the turbine runs, `0` if it stays offline.
    pub expected_production: u32,
}

impl PlanEntry {
    /// Whether the entry contributes output. A selected zero-capacity
    /// turbine counts as offline.
    pub fn is_online(&self) -> bool {
        self.expected_production > 0
    }
}

/// Computes the production plan for a fleet.
///
/// Never fails: an empty fleet, a zero or negative target, or a price at or
/// below every turbine's cost all produce an all-zero plan.
///
/// # Arguments
///
/// * `turbines` - Registry snapshot; output follows this order
/// * `market_price` - Sale price per unit of energy
/// * `production_target` - Desired total output for the period
///
/// # Examples
///
/// ```
/// use windpark::planner::compute_production_plan;
/// use windpark::turbine::Turbine;
///
/// let fleet = [Turbine::new("X", 4, 1), Turbine::new("Y", 3, 2)];
/// let plan = compute_production_plan(&fleet, 5, 4);
/// assert_eq!(plan[0].expected_production, 4);
/// assert_eq!(plan[1].expected_production, 0);
/// ```
pub fn compute_production_plan(
    turbines: &[Turbine],
    market_price: i64,
    production_target: i64,
) -> Vec<PlanEntry> {
    let online = select_online(turbines, market_price, production_target);

    turbines
        .iter()
        .zip(online)
        .map(|(t, on)| PlanEntry {
            identifier: t.identifier().to_string(),
            expected_production: if on { t.capacity() } else { 0 },
        })
        .collect()
}

/// Returns an online flag per turbine, indexed like `turbines`.
fn select_online(turbines: &[Turbine], market_price: i64, production_target: i64) -> Vec<bool> {
    let mut eligible: Vec<usize> = (0..turbines.len())
        .filter(|&i| turbines[i].is_profitable_at(market_price))
        .collect();
    // `sort_by_key` is stable, so equal costs stay in registry order.
    eligible.sort_by_key(|&i| turbines[i].production_cost());

    let mut online = vec![false; turbines.len()];
    let mut remaining = production_target;

    for i in eligible {
        let turbine = &turbines[i];
        let capacity = i64::from(turbine.capacity());
        if capacity > remaining {
            tracing::debug!(
                identifier = turbine.identifier(),
                capacity,
                remaining,
                "turbine overshoots remaining target, stopping selection"
            );
            break;
        }
        online[i] = true;
        remaining -= capacity;
    }

    online
}

/// Aggregate view of a plan against the state it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Sum of expected production over all entries.
    pub total_production: i64,
    /// Number of entries with non-zero expected production.
    pub online_count: usize,
    /// Target the plan was computed for.
    pub production_target: i64,
    /// Market price the plan was computed for.
    pub market_price: i64,
}

impl PlanSummary {
    /// Summarizes `plan` for the given price and target.
    pub fn new(plan: &[PlanEntry], market_price: i64, production_target: i64) -> Self {
        Self {
            total_production: plan.iter().map(|e| i64::from(e.expected_production)).sum(),
            online_count: plan.iter().filter(|e| e.is_online()).count(),
            production_target,
            market_price,
        }
    }

    /// Part of the target the plan leaves uncovered.
    pub fn shortfall(&self) -> i64 {
        self.production_target - self.total_production
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sum production: {}MWh. Target production: {}MWh. Price limit: {}€.",
            self.total_production, self.production_target, self.market_price
        )
    }
}
