use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::TrainError;
use crate::schedule::EpsilonSchedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunMode {
    /// Learn: feed transitions to the agent, decay epsilon, checkpoint on
    /// solve.
    Train,
    /// Greedy rollout: epsilon pinned to 0, agent left untouched.
    Eval,
}

impl RunMode {
    pub fn is_train(self) -> bool {
        matches!(self, RunMode::Train)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub mode: RunMode,
    pub max_episodes: u64,
    /// Step cap per episode; an episode that never reports `done` is cut
    /// here and still counts.
    pub max_steps: u64,
    pub eps_start: f32,
    pub eps_end: f32,
    pub eps_decay: f32,
    /// Averaging window length, also the summary log cadence.
    pub window: usize,
    /// Windowed mean that counts as solved. Train mode only.
    pub target_score: Option<f32>,
    /// Where the agent checkpoints when the run is solved.
    pub checkpoint_path: Option<PathBuf>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Train,
            max_episodes: 10_000,
            max_steps: 1_000,
            eps_start: 1.0,
            eps_end: 0.01,
            eps_decay: 0.999,
            window: 100,
            target_score: Some(13.0),
            checkpoint_path: Some(PathBuf::from("checkpoints/checkpoint.json")),
        }
    }
}

impl TrainConfig {
    /// Config for a greedy evaluation pass over `max_episodes` episodes.
    pub fn eval(max_episodes: u64) -> Self {
        Self {
            mode: RunMode::Eval,
            max_episodes,
            target_score: None,
            checkpoint_path: None,
            ..Self::default()
        }
    }

    pub fn schedule(&self) -> EpsilonSchedule {
        EpsilonSchedule::new(self.eps_start, self.eps_end, self.eps_decay)
    }

    /// Load a config from a JSON file, for script entry points.
    pub async fn from_path(path: &Path) -> Result<Self, TrainError> {
        let bytes = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
