//! Planar output geometry: paths, primitives, and the curve conversions
//! used while interpreting DXF entities.

pub mod bulge;
pub mod catmull;
pub mod path;

pub use bulge::bulge_arc;
pub use catmull::catmull_to_bezier;
pub use path::{ArcSeg, EllipticalArcSeg, Path, PathCmd, Shape};
