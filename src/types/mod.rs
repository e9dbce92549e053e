//! Basic geometric types

pub mod bounds;
pub mod transform;
pub mod vector;

pub use bounds::Bounds;
pub use transform::{Transform2, TransformKind};
pub use vector::Vector2;
