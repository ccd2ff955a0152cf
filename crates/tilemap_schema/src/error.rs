//! Error types for tilemap loading

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Result type for schema validation
pub type Result<T, E = SchemaError> = std::result::Result<T, E>;

/// Runtime kind of a JSON value, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) if n.is_f64() => ValueKind::Float,
            Value::Number(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// A field of the document does not match the tilemap schema.
///
/// `context` is the dotted path of the offending field, e.g.
/// `payload.data.layers[2].tiles.0;0.ttype`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("{context}: expected {expected}, found {found}")]
    WrongType {
        context: String,
        expected: &'static str,
        found: ValueKind,
    },
    #[error("{context}: missing required field")]
    MissingField { context: String },
    #[error("{context}: malformed point '{text}', expected \"x;y\"")]
    MalformedPoint { context: String, text: String },
    #[error("{context}: {reason}")]
    MalformedElement { context: String, reason: String },
    #[error("{context}: integer {text} does not fit in 64 bits")]
    OutOfRange { context: String, text: String },
}

impl SchemaError {
    /// Dotted path of the field that failed
    pub fn context(&self) -> &str {
        match self {
            SchemaError::WrongType { context, .. }
            | SchemaError::MissingField { context }
            | SchemaError::MalformedPoint { context, .. }
            | SchemaError::MalformedElement { context, .. }
            | SchemaError::OutOfRange { context, .. } => context,
        }
    }

    pub(crate) fn wrong_type(context: &str, expected: &'static str, found: &Value) -> Self {
        SchemaError::WrongType {
            context: context.to_string(),
            expected,
            found: ValueKind::of(found),
        }
    }
}

/// The input is not a usable JSON document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("top-level value must be an object, found {found}")]
    NotAnObject { found: ValueKind },
}

/// Error type for tilemap loading failures
#[derive(Debug, Error)]
pub enum LoadError {
    /// Only raised by the file entry point, before any parsing
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A resolved tileset path cannot be stored as UTF-8
    #[error("resolved path is not valid UTF-8: {}", .path.display())]
    InvalidPath { path: PathBuf },
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Document(DocumentError::Json(err))
    }
}
