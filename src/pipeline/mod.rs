pub mod assemble;
pub mod orchestrator;
pub mod render;

pub use orchestrator::run;
