pub mod palette;
pub mod visualize;

pub use palette::{color_for, Rgba, PRIORITY_COLORS};
pub use visualize::{visualize_priorities, visualize_priority, Style, StyledMessage};
