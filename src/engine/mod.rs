pub mod order;
pub mod pipeline;
pub mod scanner;

pub use order::derive_recommended;
pub use pipeline::{analyze, log_priorities, HeadReport};
pub use scanner::{scan, PriorityAssignment};
