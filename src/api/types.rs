//! API request, response, and error types.
//!
//! Field names use camelCase on the wire.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::park::ParkError;

/// Query parameters for `POST /set-market-price`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPriceQuery {
    /// New market price (€/MWh).
    pub market_price: i64,
}

/// Query parameters for `POST /update-production-target`.
#[derive(Debug, Deserialize)]
pub struct DeltaQuery {
    /// Signed change to the production target (MWh).
    pub delta: i64,
}

/// Current park state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateResponse {
    /// Market price (€/MWh).
    pub market_price: i64,
    /// Production target (MWh).
    pub production_target: i64,
    /// Sum of all turbine capacities (MWh).
    pub max_capacity: i64,
    /// Number of registered turbines.
    pub turbine_count: usize,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for ParkError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "client error");
        let status = match self {
            ParkError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
