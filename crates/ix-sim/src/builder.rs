//! Fluent builder for constructing a [`Sim`].

use ix_admission::{AdmissionScheduler, ZoneConfig};
use ix_core::SimConfig;
use ix_traffic::{MotionSource, VehicleController};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<T>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, tick delta, seed, snapshot interval
/// - [`ZoneConfig`] — conflict-zone geometry and concurrency limit
/// - `T` — the traffic model ([`MotionSource`] + [`VehicleController`])
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, ZoneConfig::new(center), traffic)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<T: MotionSource + VehicleController> {
    config:  SimConfig,
    zone:    ZoneConfig,
    traffic: T,
}

impl<T: MotionSource + VehicleController> SimBuilder<T> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, zone: ZoneConfig, traffic: T) -> Self {
        Self { config, zone, traffic }
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<T>> {
        if !self.config.delta_secs.is_finite() || self.config.delta_secs <= 0.0 {
            return Err(SimError::Config(format!(
                "delta_secs must be positive and finite, got {}",
                self.config.delta_secs
            )));
        }
        if self.config.total_ticks == 0 {
            return Err(SimError::Config("total_ticks must be at least 1".into()));
        }

        let clock = self.config.make_clock();
        Ok(Sim {
            scheduler: AdmissionScheduler::new(self.zone),
            traffic:   self.traffic,
            config:    self.config,
            clock,
        })
    }
}
