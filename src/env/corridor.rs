use async_trait::async_trait;

use super::errors::EnvError;
use super::traits::Env;
use super::types::{BrainSpec, StepOutcome};

/// Deterministic 1-D corridor for tests and the demo driver.
///
/// The agent starts in the middle cell and moves left (0) or right (1).
/// The right end pays +1 and ends the episode, the left end pays -1, and
/// every other move costs a small step penalty. Observations are the
/// position as a one-hot vector.
pub struct CorridorEnv {
    brain: BrainSpec,
    length: usize,
    pos: usize,
    started: bool,
}

impl CorridorEnv {
    pub fn new(length: usize) -> Self {
        let length = length.max(3);
        Self {
            brain: BrainSpec {
                name: "corridor".to_string(),
                state_size: length,
                action_size: 2,
            },
            length,
            pos: length / 2,
            started: false,
        }
    }

    fn observe(&self) -> Vec<f32> {
        let mut obs = vec![0.0; self.length];
        obs[self.pos] = 1.0;
        obs
    }
}

#[async_trait]
impl Env for CorridorEnv {
    type Obs = Vec<f32>;
    type Act = usize;

    fn brain(&self) -> &BrainSpec {
        &self.brain
    }

    async fn reset(&mut self, _train_mode: bool) -> Result<Self::Obs, EnvError> {
        self.pos = self.length / 2;
        self.started = true;
        Ok(self.observe())
    }

    async fn step(&mut self, act: usize) -> Result<StepOutcome<Vec<f32>>, EnvError> {
        if !self.started {
            return Err(EnvError::NotReset);
        }
        if act == 0 {
            self.pos = self.pos.saturating_sub(1);
        } else {
            self.pos = (self.pos + 1).min(self.length - 1);
        }
        let (reward, done) = if self.pos == self.length - 1 {
            (1.0, true)
        } else if self.pos == 0 {
            (-1.0, true)
        } else {
            (-0.01, false)
        };
        Ok(StepOutcome {
            next_obs: self.observe(),
            reward,
            done,
        })
    }

    async fn close(&mut self) -> Result<(), EnvError> {
        self.started = false;
        Ok(())
    }
}
