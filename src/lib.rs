pub mod dom;
pub mod engine;
pub mod error;
pub mod net;
pub mod priority;
pub mod render;
pub mod report;
pub mod source;

pub use error::{HeadOrderError, Result};
