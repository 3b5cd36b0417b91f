use std::path::Path;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::errors::AgentError;
use super::traits::Agent;
use super::types::Transition;

#[derive(Debug, Serialize, Deserialize)]
struct TableCheckpoint {
    alpha: f32,
    gamma: f32,
    q: Vec<Vec<f32>>,
}

/// Epsilon-greedy tabular Q-learner over one-hot observations.
///
/// A stand-in for the external deep agent: same seam, trivially small
/// internals. Used by the demo driver and the loop tests.
pub struct TabularAgent {
    q: Vec<Vec<f32>>,
    alpha: f32,
    gamma: f32,
    rng: StdRng,
}

impl TabularAgent {
    pub fn new(state_size: usize, action_size: usize, seed: u64) -> Self {
        Self {
            q: vec![vec![0.0; action_size]; state_size],
            alpha: 0.5,
            gamma: 0.99,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restore a saved Q-table, e.g. for an eval-only run.
    pub async fn load(path: &Path, seed: u64) -> Result<Self, AgentError> {
        let bytes = tokio::fs::read(path).await?;
        let ckpt: TableCheckpoint = serde_json::from_slice(&bytes)?;
        Ok(Self {
            q: ckpt.q,
            alpha: ckpt.alpha,
            gamma: ckpt.gamma,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn state_of(obs: &[f32]) -> usize {
        obs.iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn greedy(&self, state: usize) -> usize {
        self.q[state]
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[async_trait]
impl Agent for TabularAgent {
    type Obs = Vec<f32>;
    type Act = usize;

    async fn act(&mut self, obs: &Self::Obs, epsilon: f32) -> Result<usize, AgentError> {
        let state = Self::state_of(obs);
        let actions = self.q[state].len();
        if actions > 1 && self.rng.gen_range(0.0f32..1.0) < epsilon {
            Ok(self.rng.gen_range(0..actions))
        } else {
            Ok(self.greedy(state))
        }
    }

    async fn step(&mut self, t: Transition<Vec<f32>, usize>) -> Result<(), AgentError> {
        let s = Self::state_of(&t.obs);
        let s2 = Self::state_of(&t.next_obs);
        let max_next = self.q[s2]
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);
        let max_next = if t.done || !max_next.is_finite() {
            0.0
        } else {
            max_next
        };
        let target = t.reward + self.gamma * max_next;
        let cell = &mut self.q[s][t.act];
        *cell += self.alpha * (target - *cell);
        Ok(())
    }

    async fn save(&self, path: &Path) -> Result<(), AgentError> {
        let ckpt = TableCheckpoint {
            alpha: self.alpha,
            gamma: self.gamma,
            q: self.q.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&ckpt)?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_hot(i: usize, n: usize) -> Vec<f32> {
        let mut v = vec![0.0; n];
        v[i] = 1.0;
        v
    }

    #[tokio::test]
    async fn greedy_action_follows_the_table() {
        let mut agent = TabularAgent::new(3, 2, 0);
        agent.q[1] = vec![0.0, 5.0];
        let act = agent.act(&one_hot(1, 3), 0.0).await.unwrap();
        assert_eq!(act, 1);
    }

    #[tokio::test]
    async fn terminal_update_moves_toward_the_reward() {
        let mut agent = TabularAgent::new(3, 2, 0);
        agent
            .step(Transition {
                obs: one_hot(1, 3),
                act: 1,
                reward: 1.0,
                next_obs: one_hot(2, 3),
                done: true,
            })
            .await
            .unwrap();
        // alpha = 0.5, so one update covers half the distance to the target
        assert!((agent.q[1][1] - 0.5).abs() < 1e-6);
    }

    #[tokio::test]
    async fn checkpoint_round_trips() {
        let mut agent = TabularAgent::new(2, 2, 0);
        agent.q[0][1] = 3.5;

        let path = std::env::temp_dir().join(format!("tabular-{}.json", uuid::Uuid::new_v4()));
        agent.save(&path).await.unwrap();
        let restored = TabularAgent::load(&path, 0).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(restored.q[0][1], 3.5);
    }
}
