//! JSON preview core: pretty-printing and shape-driven typed decoding.
//!
//! Takes a raw candidate JSON string and produces a single display-safe
//! string. The [`format()`] path parses the text as generic JSON and
//! re-serializes it with stable indentation, collapsing every failure to
//! the [`INVALID_JSON`] sentinel. The [`decode()`] path validates the text
//! against a caller-supplied [`Shape`] and reports the first structural
//! problem as a tagged [`DecodeDiagnostic`]. The [`preview()`] pipeline
//! ties the two together and hands the resulting string to an injected
//! [`PreviewSink`].

pub mod decode;
pub mod diagnostic;
pub mod format;
pub mod preview;
pub mod shape;

pub use decode::decode;
pub use diagnostic::{DecodeDiagnostic, DiagnosticKind, PathSegment};
pub use format::{format, format_bytes, INVALID_JSON};
pub use preview::{preview, NullSink, PreviewSink, StdoutSink, TracingSink, LOG_TARGET};
pub use shape::{ArrShape, FieldShape, ObjShape, Shape, ShapeBuilder};
