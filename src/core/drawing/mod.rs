pub mod fill;
pub mod thick_line;

pub use fill::{Fill, GradientStop, LinearGradient};
pub use thick_line::ThickLine;
