//! Debug overlay for plane queries: builds a plane from three points and emits
//! gizmo orders (axes, the plane quad, projections, a front/back test) for an
//! external renderer to draw.

mod immediate;
mod visualizer;

pub use immediate::*;
pub use visualizer::*;
