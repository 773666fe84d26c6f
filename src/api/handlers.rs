//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use super::AppState;
use super::types::{DeltaQuery, MarketPriceQuery, StateResponse};
use crate::park::ParkError;
use crate::planner::PlanEntry;
use crate::registry::TurbineRegistry;
use crate::reporting::format_plan_table;

/// Sets the market price.
///
/// `POST /set-market-price?marketPrice=N` → 200
/// `POST /set-market-price?marketPrice=-1` → 400 + `ErrorResponse`
pub async fn set_market_price(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MarketPriceQuery>,
) -> Result<StatusCode, ParkError> {
    state.park.lock().set_market_price(query.market_price)?;
    Ok(StatusCode::OK)
}

/// Shifts the production target by `delta`.
///
/// `POST /update-production-target?delta=N` → 200
/// Out-of-range result → 400 + `ErrorResponse`, target unchanged
pub async fn update_production_target(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DeltaQuery>,
) -> Result<StatusCode, ParkError> {
    state.park.lock().update_production_target(query.delta)?;
    Ok(StatusCode::OK)
}

/// Returns the production plan for the current fleet, price, and target.
///
/// `GET /production-plan` → 200 + `Vec<PlanEntry>` JSON in registry order
pub async fn get_production_plan(State(state): State<Arc<AppState>>) -> Json<Vec<PlanEntry>> {
    let park = state.park.lock();
    let plan = park.compute_production_plan();
    let summary = park.summarize(&plan);
    drop(park);

    tracing::info!("production plan\n{}", format_plan_table(&plan, &summary));
    Json(plan)
}

/// Returns the current price, target, and fleet size.
///
/// `GET /state` → 200 + `StateResponse` JSON
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    let park = state.park.lock();
    Json(StateResponse {
        market_price: park.market_price(),
        production_target: park.production_target(),
        max_capacity: park.max_capacity(),
        turbine_count: park.registry().turbine_count(),
    })
}
