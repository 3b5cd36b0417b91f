mod corridor;
mod errors;
mod traits;
mod types;

pub use corridor::CorridorEnv;
pub use errors::EnvError;
pub use traits::Env;
pub use types::{BrainSpec, StepOutcome};
