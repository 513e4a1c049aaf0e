//! Preview pipeline and injected log sinks.

use crate::decode::decode;
use crate::format::format;
use crate::shape::Shape;

/// Category identifier carried by [`TracingSink`] events.
pub const LOG_TARGET: &str = "json_preview";

/// Side-effect hook receiving every display string the pipeline produces.
///
/// Emission is best-effort and never affects the returned value.
pub trait PreviewSink {
    fn emit(&self, text: &str);
}

/// Writes the display string to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl PreviewSink for StdoutSink {
    fn emit(&self, text: &str) {
        println!("📜 Formatted JSON:\n{text}");
    }
}

/// Emits the display string as a `tracing` debug event under the
/// [`LOG_TARGET`] category.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl PreviewSink for TracingSink {
    fn emit(&self, text: &str) {
        tracing::debug!(target: LOG_TARGET, "{text}");
    }
}

/// Discards everything; for callers that only want the returned string.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PreviewSink for NullSink {
    fn emit(&self, _text: &str) {}
}

/// Produce the display string for `raw`.
///
/// With a shape, the text is first decoded against it: a failed decode
/// yields the diagnostic message prefixed with `❌`, a successful decode
/// falls through to [`format`]. Without a shape the text is formatted
/// directly. The result is emitted to `sink` and returned; it is never
/// empty — either pretty-printed JSON or an error message carrying the
/// failure marker.
pub fn preview(raw: &str, shape: Option<&Shape>, sink: &dyn PreviewSink) -> String {
    let text = match shape {
        Some(shape) => match decode(raw, shape) {
            Ok(_) => format(raw),
            Err(diagnostic) => format!("❌ {diagnostic}"),
        },
        None => format(raw),
    };
    sink.emit(&text);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::INVALID_JSON;
    use crate::shape::ShapeBuilder;
    use std::sync::Mutex;

    struct RecordingSink(Mutex<Vec<String>>);

    impl RecordingSink {
        fn new() -> Self {
            Self(Mutex::new(Vec::new()))
        }

        fn emitted(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl PreviewSink for RecordingSink {
        fn emit(&self, text: &str) {
            self.0.lock().unwrap().push(text.to_string());
        }
    }

    fn person() -> Shape {
        let t = ShapeBuilder::new();
        t.obj(vec![t.field("name", t.str()), t.field("age", t.num())])
    }

    #[test]
    fn preview_without_shape_formats() {
        let sink = RecordingSink::new();
        let out = preview(r#"{"a":1}"#, None, &sink);
        assert_eq!(out, "{\n  \"a\": 1\n}");
        assert_eq!(sink.emitted(), vec![out]);
    }

    #[test]
    fn preview_without_shape_invalid_input_is_sentinel() {
        let out = preview("{nope", None, &NullSink);
        assert_eq!(out, INVALID_JSON);
    }

    #[test]
    fn preview_with_shape_success_pretty_prints() {
        let sink = RecordingSink::new();
        let out = preview(r#"{"name":"Alice","age":30}"#, Some(&person()), &sink);
        assert!(out.contains("\"name\": \"Alice\""));
        assert_eq!(sink.emitted(), vec![out]);
    }

    #[test]
    fn preview_with_shape_failure_carries_marker() {
        let out = preview(r#"{"name":"Alice"}"#, Some(&person()), &NullSink);
        assert!(out.starts_with("❌ "));
        assert!(out.contains("missing key `age`"));
    }

    #[test]
    fn preview_never_returns_empty() {
        for raw in ["", "{bad", "null", r#"{"name":1}"#] {
            assert!(!preview(raw, Some(&person()), &NullSink).is_empty());
            assert!(!preview(raw, None, &NullSink).is_empty());
        }
    }

    #[test]
    fn sinks_do_not_change_the_returned_value() {
        let raw = r#"{"name":"Alice","age":30}"#;
        let a = preview(raw, Some(&person()), &NullSink);
        let b = preview(raw, Some(&person()), &TracingSink);
        let c = preview(raw, Some(&person()), &StdoutSink);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }
}
