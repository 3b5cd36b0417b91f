pub mod agent;
pub mod env;
pub mod schedule;
pub mod train;
pub mod window;
