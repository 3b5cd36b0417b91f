mod errors;
mod tabular;
mod traits;
mod types;

pub use errors::AgentError;
pub use tabular::TabularAgent;
pub use traits::Agent;
pub use types::Transition;
