use async_trait::async_trait;

use super::errors::EnvError;
use super::types::{BrainSpec, StepOutcome};

/// The simulation side of the loop. One brain, vector observations,
/// discrete-ish actions; the driver never looks past this seam.
#[async_trait]
pub trait Env: Send {
    type Obs: Send + Clone + 'static;
    type Act: Send + Clone + 'static;

    fn brain(&self) -> &BrainSpec;

    /// Reset for a new episode. `train_mode` is forwarded to simulators
    /// that run faster without rendering.
    async fn reset(&mut self, train_mode: bool) -> Result<Self::Obs, EnvError>;

    async fn step(&mut self, act: Self::Act) -> Result<StepOutcome<Self::Obs>, EnvError>;

    async fn close(&mut self) -> Result<(), EnvError>;
}
