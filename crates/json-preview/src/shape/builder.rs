//! Fluent constructors for shape values.

use super::shape::*;

/// Builder for constructing shape values.
#[derive(Debug, Clone, Default)]
pub struct ShapeBuilder;

impl ShapeBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn any(&self) -> Shape {
        Shape::Any
    }

    pub fn bool(&self) -> Shape {
        Shape::Bool
    }

    pub fn num(&self) -> Shape {
        Shape::Num
    }

    pub fn str(&self) -> Shape {
        Shape::Str
    }

    pub fn arr(&self, element: Shape) -> Shape {
        Shape::Arr(ArrShape {
            element: Box::new(element),
        })
    }

    pub fn obj(&self, fields: Vec<FieldShape>) -> Shape {
        Shape::Obj(ObjShape { fields })
    }

    /// A required field.
    pub fn field(&self, key: &str, shape: Shape) -> FieldShape {
        FieldShape {
            key: key.to_string(),
            shape,
            optional: false,
        }
    }

    /// An optional field: may be absent or `null`.
    pub fn optional(&self, key: &str, shape: Shape) -> FieldShape {
        FieldShape {
            key: key.to_string(),
            shape,
            optional: true,
        }
    }
}
