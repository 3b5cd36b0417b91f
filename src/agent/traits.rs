use std::path::Path;

use async_trait::async_trait;

use super::errors::AgentError;
use super::types::Transition;

/// The learning side of the loop, treated as a black box: epsilon-greedy
/// action selection plus an experience hand-off. Network, replay memory,
/// and optimizer all live behind this seam.
#[async_trait]
pub trait Agent: Send {
    type Obs: Send + Clone + 'static;
    type Act: Send + Clone + 'static;

    async fn act(&mut self, obs: &Self::Obs, epsilon: f32) -> Result<Self::Act, AgentError>;

    async fn step(
        &mut self,
        transition: Transition<Self::Obs, Self::Act>,
    ) -> Result<(), AgentError>;

    /// Persist whatever the agent considers its learned parameters. The
    /// driver calls this once, when the run is solved.
    async fn save(&self, path: &Path) -> Result<(), AgentError>;
}
