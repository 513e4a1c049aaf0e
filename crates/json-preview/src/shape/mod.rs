//! Shape descriptors for typed decoding.

pub mod builder;
pub mod shape;

pub use builder::ShapeBuilder;
pub use shape::{ArrShape, FieldShape, ObjShape, Shape};
