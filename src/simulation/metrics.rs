//! Performance metrics for the tick loop.

use std::collections::VecDeque;
use std::time::Duration;

use crate::core::config::EngineConfig;

/// Tracks tick durations over time.
pub struct TickMetrics {
    durations: VecDeque<Duration>,
    pub last: Duration,
    pub over_budget: u32,
}

impl Default for TickMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TickMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            durations: VecDeque::with_capacity(120),
            last: Duration::ZERO,
            over_budget: 0,
        }
    }

    /// Record one completed tick.
    pub fn record(&mut self, duration: Duration, config: &EngineConfig) {
        self.last = duration;
        self.durations.push_back(duration);
        if self.durations.len() > 120 {
            self.durations.pop_front();
        }
        if duration > config.tick_budget {
            self.over_budget += 1;
            tracing::warn!(
                tick_ms = duration.as_secs_f64() * 1000.0,
                budget_ms = config.tick_budget.as_secs_f64() * 1000.0,
                "tick exceeded budget"
            );
        }
    }

    /// Average tick time in milliseconds (over last 120 ticks).
    pub fn avg_tick_ms(&self) -> f64 {
        if self.durations.is_empty() {
            return 0.0;
        }
        let total: Duration = self.durations.iter().sum();
        total.as_secs_f64() * 1000.0 / self.durations.len() as f64
    }

    /// Worst tick time in milliseconds (over last 120 ticks).
    pub fn worst_tick_ms(&self) -> f64 {
        self.durations
            .iter()
            .max()
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}
