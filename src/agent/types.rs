use serde::{Deserialize, Serialize};

/// One (s, a, r, s', done) experience handed to the agent after an
/// environment step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transition<O, A> {
    pub obs: O,
    pub act: A,
    pub reward: f32,
    pub next_obs: O,
    pub done: bool,
}
