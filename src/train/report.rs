use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::RunMode;

/// Recorded when the windowed mean first reaches the target score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solved {
    /// Episode on which the window crossed the target.
    pub episode: u64,
    /// Episode count the run is conventionally reported as solved in:
    /// the crossing episode minus the window length, floored at zero.
    pub reported_episode: u64,
    pub window_mean: f32,
    pub checkpoint: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub run_id: Uuid,
    pub mode: RunMode,
    pub total_episodes: u64,
    pub total_steps: u64,
    /// Score of every episode, in order.
    pub scores: Vec<f32>,
    pub final_window_mean: Option<f32>,
    pub final_epsilon: f32,
    pub solved: Option<Solved>,
    pub elapsed: Duration,
}
