//! Structured decode failure reports.

use std::fmt;

use thiserror::Error;

/// Tag identifying the kind of decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    MissingKey,
    TypeMismatch,
    MissingValue,
    DataCorrupted,
    Unknown,
}

impl DiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingKey => "missing-key",
            Self::TypeMismatch => "type-mismatch",
            Self::MissingValue => "missing-value",
            Self::DataCorrupted => "data-corrupted",
            Self::Unknown => "unknown",
        }
    }
}

/// One step of the path from the document root to the failing location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{key}"),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// Renders a path in dotted form: keys joined by `.`, indices as `[i]`.
pub fn dotted(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in path {
        match segment {
            PathSegment::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            PathSegment::Index(i) => {
                out.push('[');
                out.push_str(&i.to_string());
                out.push(']');
            }
        }
    }
    out
}

fn at(path: &[PathSegment]) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at `{}`", dotted(path))
    }
}

/// Why a typed decode failed.
///
/// Exactly one variant is produced per failed decode; the decoder stops at
/// the first structural problem it finds. Each variant carries the failing
/// location (where one exists) and a human-readable context string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeDiagnostic {
    /// A required field has no corresponding key in the input object.
    #[error("missing key `{key}`{} ({context})", at(.path))]
    MissingKey {
        key: String,
        path: Vec<PathSegment>,
        context: String,
    },
    /// A field is present but its JSON value has the wrong type.
    #[error("type mismatch{}: expected {expected}, found {found}", at(.path))]
    TypeMismatch {
        path: Vec<PathSegment>,
        expected: &'static str,
        found: &'static str,
    },
    /// A required value slot holds `null`.
    #[error("missing value{}: found null where a value was required", at(.path))]
    MissingValue { path: Vec<PathSegment> },
    /// The input is not well-formed JSON.
    #[error("data corrupted: {message}")]
    DataCorrupted { message: String },
    /// Any other decode failure, described best-effort.
    #[error("unknown decode failure: {message}")]
    Unknown { message: String },
}

impl DecodeDiagnostic {
    pub fn missing_key(
        path: Vec<PathSegment>,
        key: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::MissingKey {
            key: key.into(),
            path,
            context: context.into(),
        }
    }

    pub fn type_mismatch(
        path: Vec<PathSegment>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            path,
            expected,
            found,
        }
    }

    pub fn missing_value(path: Vec<PathSegment>) -> Self {
        Self::MissingValue { path }
    }

    pub fn data_corrupted(message: impl Into<String>) -> Self {
        Self::DataCorrupted {
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// The kind tag for this diagnostic.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::MissingKey { .. } => DiagnosticKind::MissingKey,
            Self::TypeMismatch { .. } => DiagnosticKind::TypeMismatch,
            Self::MissingValue { .. } => DiagnosticKind::MissingValue,
            Self::DataCorrupted { .. } => DiagnosticKind::DataCorrupted,
            Self::Unknown { .. } => DiagnosticKind::Unknown,
        }
    }

    /// Path to the failing location; empty for document-level failures.
    pub fn path(&self) -> &[PathSegment] {
        match self {
            Self::MissingKey { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::MissingValue { path } => path,
            Self::DataCorrupted { .. } | Self::Unknown { .. } => &[],
        }
    }

    /// Dotted rendering of [`path`](Self::path).
    pub fn dotted_path(&self) -> String {
        dotted(self.path())
    }
}
