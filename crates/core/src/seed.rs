//! Reproducible description of a simulation run.
//!
//! A [`Seed`] records the bounds, parameter overrides, PRNG seed and frame
//! count. Replaying the same `Seed` with the same binary produces
//! bit-identical particle trajectories.

use crate::bounds::Bounds;
use crate::error::SimError;
use crate::params::SimParams;
use crate::simulation::Simulation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub width: f64,
    pub height: f64,
    /// Parameter overrides in the format [`SimParams::from_json`] reads.
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
    pub seed: u64,
    #[serde(default)]
    pub steps: usize,
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Seed {
    /// Creates a Seed with no parameter overrides and zero steps.
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        Self {
            width,
            height,
            params: empty_params(),
            seed,
            steps: 0,
        }
    }

    /// Checks the bounds and parameters without building anything.
    pub fn validate(&self) -> Result<(), SimError> {
        self.bounds()?;
        SimParams::from_json(&self.params)?;
        Ok(())
    }

    pub fn bounds(&self) -> Result<Bounds, SimError> {
        Bounds::new(self.width, self.height)
    }

    /// Builds the simulation at frame 1, before any step.
    pub fn instantiate(&self) -> Result<Simulation, SimError> {
        let params = SimParams::from_json(&self.params)?;
        Simulation::new(self.bounds()?, params, self.seed)
    }

    /// Builds the simulation and runs it for `steps` frames.
    pub fn replay(&self) -> Result<Simulation, SimError> {
        let mut sim = self.instantiate()?;
        sim.run(self.steps);
        Ok(sim)
    }
}
