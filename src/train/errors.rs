use thiserror::Error;

use crate::agent::AgentError;
use crate::env::EnvError;

#[derive(Error, Debug)]
pub enum TrainError {
    #[error("Environment error: {0}")]
    Env(#[from] EnvError),

    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("checkpoint io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
