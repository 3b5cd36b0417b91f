use serde::{Deserialize, Serialize};

/// Metadata for the environment's single brain: what the driver needs to
/// size an agent before the first episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrainSpec {
    pub name: String,
    pub state_size: usize,
    pub action_size: usize,
}

/// What one environment step hands back to the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutcome<O> {
    pub next_obs: O,
    pub reward: f32,
    pub done: bool,
}
