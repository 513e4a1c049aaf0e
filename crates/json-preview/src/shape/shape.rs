//! Shape AST describing the expected structure of a JSON document.

/// Homogeneous array shape: every element must match `element`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrShape {
    pub element: Box<Shape>,
}

/// A single named field of an object shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    pub key: String,
    pub shape: Shape,
    /// An optional field may be absent or `null`; when present with a
    /// non-null value it is still validated against `shape`.
    pub optional: bool,
}

/// Object shape with named fields in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjShape {
    pub fields: Vec<FieldShape>,
}

/// The expected type of a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Any value, including `null`.
    Any,
    Bool,
    Num,
    Str,
    Arr(ArrShape),
    Obj(ObjShape),
}

impl Shape {
    /// Human-readable name of the expected type, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Bool => "boolean",
            Self::Num => "number",
            Self::Str => "string",
            Self::Arr(_) => "array",
            Self::Obj(_) => "object",
        }
    }
}
