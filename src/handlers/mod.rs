pub mod global;
pub mod queue;
