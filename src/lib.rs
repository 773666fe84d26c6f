//! Production planning for a wind turbine park.
//!
//! A [`park::Park`] owns a turbine registry together with a market price and a
//! production target. [`planner::compute_production_plan`] decides which
//! turbines run: only profitable ones, cheapest first, stopping at the first
//! turbine that would overshoot the target.

#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod config;
/// Plan export to CSV.
pub mod io;
pub mod logging;
pub mod park;
pub mod planner;
pub mod registry;
pub mod reporting;
pub mod turbine;
