use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Agent error: {0}")]
    AgentError(#[from] Box<dyn std::error::Error + Send + Sync>),

    #[error("checkpoint io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("checkpoint encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}
