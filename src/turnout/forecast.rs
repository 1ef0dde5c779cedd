//! Uncertainty-bearing turnout forecast
//!
//! Same projection as the estimator, with zero-mean noise injected into
//! the mobilization input (scaled per-coalition by volatility) and into the
//! final rate, plus a fixed historical bias for systematic under-polling.
//! Noise comes from the injected RNG, so forecasts reproduce under a seed.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::coalition::store::CoalitionStore;
use crate::core::config::EngineConfig;
use crate::turnout::estimate::turnout_rate;

/// Half-width of the raw mobilization noise before volatility scaling
const MOBILIZATION_NOISE: f32 = 0.1;

#[derive(Debug, Clone, Copy)]
pub struct ForecastOptions {
    /// Relative half-width of the final-rate noise (0.10 = +/-10%)
    pub uncertainty_factor: f32,
    /// Fixed additive rate bias modeling systematic under-polling
    pub historical_bias: f32,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            uncertainty_factor: 0.10,
            historical_bias: 0.02,
        }
    }
}

/// Forecast with a confidence interval
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub projected_votes: u64,
    pub projected_rate: f32,
    pub confidence_low: f32,
    pub confidence_high: f32,
    /// Mean per-coalition uncertainty magnitude behind the interval
    pub avg_uncertainty: f32,
}

/// Produce one forecast draw for a jurisdiction
pub fn forecast_turnout(
    store: &CoalitionStore,
    eligible_voters: u64,
    options: &ForecastOptions,
    config: &EngineConfig,
    rng: &mut ChaCha8Rng,
) -> ForecastReport {
    let mut projected_votes = 0u64;
    let mut covered = 0u64;
    let mut uncertainty_total = 0.0f32;

    for slot in 0..store.len() {
        let volatility = store.volatilities[slot];
        let mobilization_noise =
            rng.gen_range(-MOBILIZATION_NOISE..=MOBILIZATION_NOISE) * volatility;
        let noisy_mobilization = (store.mobilizations[slot] + mobilization_noise).clamp(0.0, 1.0);

        let base = turnout_rate(&store.demographics[slot], noisy_mobilization, config);
        let rate_noise =
            rng.gen_range(-options.uncertainty_factor..=options.uncertainty_factor);
        let rate = (base * (1.0 + rate_noise) + options.historical_bias)
            .clamp(config.turnout_min, config.turnout_max);

        let eligible = (store.support_bases[slot] as f64 * eligible_voters as f64).round() as u64;
        projected_votes += (eligible as f64 * rate as f64).round() as u64;
        covered += eligible;

        uncertainty_total += mobilization_noise.abs() * config.mobilization_turnout_factor
            + base * rate_noise.abs();
    }

    let projected_rate = if covered > 0 {
        projected_votes as f32 / covered as f32
    } else {
        0.0
    };
    let avg_uncertainty = if store.is_empty() {
        0.0
    } else {
        uncertainty_total / store.len() as f32
    };

    ForecastReport {
        projected_votes,
        projected_rate,
        confidence_low: (projected_rate - avg_uncertainty).max(0.0),
        confidence_high: (projected_rate + avg_uncertainty).min(1.0),
        avg_uncertainty,
    }
}
