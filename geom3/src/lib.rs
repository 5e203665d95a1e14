mod color;
mod plane;
mod v3;

pub use color::*;
pub use plane::*;
pub use v3::*;
