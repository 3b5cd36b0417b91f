mod config;
mod driver;
mod errors;
mod report;

pub use config::{RunMode, TrainConfig};
pub use driver::run;
pub use errors::TrainError;
pub use report::{Solved, TrainingReport};
