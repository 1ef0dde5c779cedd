//! Turnout projection and forecasting

pub mod estimate;
pub mod forecast;

pub use estimate::{base_turnout_rate, estimate_turnout, turnout_rate, CoalitionTurnout, TurnoutReport};
pub use forecast::{forecast_turnout, ForecastOptions, ForecastReport};
