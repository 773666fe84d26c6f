//! Market price and production target with their validation rules.

use thiserror::Error;

/// Rejected input to a park state setter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkError {
    /// The value is outside its allowed range. The message is user-facing.
    #[error("{0}")]
    InvalidArgument(String),
}

/// Current market price and production target of a park.
///
/// Starts at `(0, 0)`. Setters either replace the stored value or fail and
/// leave it untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParkState {
    market_price: i64,
    production_target: i64,
}

impl ParkState {
    /// Creates a state with price and target at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the market price.
    pub fn market_price(&self) -> i64 {
        self.market_price
    }

    /// Replaces the market price.
    ///
    /// # Errors
    ///
    /// Returns `ParkError::InvalidArgument` if `value` is negative.
    pub fn set_market_price(&mut self, value: i64) -> Result<(), ParkError> {
        if value < 0 {
            return Err(ParkError::InvalidArgument(
                "Market price must be non-negative.".to_string(),
            ));
        }
        self.market_price = value;
        Ok(())
    }

    /// Returns the production target.
    pub fn production_target(&self) -> i64 {
        self.production_target
    }

    /// Replaces the production target.
    ///
    /// # Arguments
    ///
    /// * `value` - New target
    /// * `max_capacity` - Sum of all turbine capacities at call time
    ///
    /// # Errors
    ///
    /// Returns `ParkError::InvalidArgument` if `value` is outside
    /// `[0, max_capacity]`.
    pub fn set_production_target(&mut self, value: i64, max_capacity: i64) -> Result<(), ParkError> {
        if value < 0 || value > max_capacity {
            return Err(ParkError::InvalidArgument(format!(
                "Production target must be in range [0, {max_capacity}] but is {value}."
            )));
        }
        self.production_target = value;
        Ok(())
    }

    /// Shifts the production target by `delta`.
    ///
    /// The sum saturates at the `i64` bounds and is then validated like
    /// [`set_production_target`](Self::set_production_target).
    ///
    /// # Errors
    ///
    /// Returns `ParkError::InvalidArgument` if the shifted target is outside
    /// `[0, max_capacity]`; the stored target is unchanged.
    pub fn update_production_target(&mut self, delta: i64, max_capacity: i64) -> Result<(), ParkError> {
        self.set_production_target(self.production_target.saturating_add(delta), max_capacity)
    }
}
