//! Error types for CCL access and diagnostics.
//!
//! Tokenizing and building a hierarchy never fail: statements that do not fit
//! the grammar are dropped. Errors come from the typed accessors, from the
//! opt-in strict parsing mode and from serde deserialization.
//!
//! ## Error Categories
//!
//! - **KeyNotFound**: a path segment is absent
//! - **NotAnObject**: a path tried to descend through a scalar or a list
//! - **TypeMismatch**: the addressed node has the wrong shape
//! - **InvalidFormat**: a scalar does not match the requested grammar
//! - **Syntax**: a statement the tokenizer would drop (strict mode only)
//!
//! Every accessor error carries the full path that was requested, so it can be
//! reported without further context.
//!
//! ## Examples
//!
//! ```rust
//! use ccl::{get_int, load, ErrorKind};
//!
//! let doc = load("port = eighty");
//! let err = get_int(&doc, &["port"]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidFormat);
//! assert!(err.to_string().contains("port"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A path segment does not exist in the object being searched
    #[error("Key not found: '{key}' in path '{path}'")]
    KeyNotFound { path: String, key: String },

    /// A path segment was looked up in a node that is not an object
    #[error("Not an object: cannot look up '{key}' in {found} at path '{path}'")]
    NotAnObject {
        path: String,
        key: String,
        found: String,
    },

    /// The addressed node has a different shape than requested
    #[error("Type mismatch at path '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// A scalar could not be interpreted as the requested type
    #[error("Invalid format at path '{path}': expected {expected}, found '{value}'")]
    InvalidFormat {
        path: String,
        expected: String,
        value: String,
    },

    /// A statement the tokenizer would silently drop
    #[error("Syntax error at line {line}, column {col}:\n{context}\n{msg}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
        context: String,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

/// The category of an [`Error`], for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    KeyNotFound,
    NotAnObject,
    TypeMismatch,
    InvalidFormat,
    Syntax,
    Custom,
}

impl Error {
    /// Creates a key-not-found error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ccl::Error;
    ///
    /// let err = Error::key_not_found("db.host", "host");
    /// assert!(err.to_string().contains("'host'"));
    /// ```
    pub fn key_not_found(path: &str, key: &str) -> Self {
        Error::KeyNotFound {
            path: path.to_string(),
            key: key.to_string(),
        }
    }

    /// Creates a not-an-object error; `found` names the node kind that was hit.
    pub fn not_an_object(path: &str, key: &str, found: &str) -> Self {
        Error::NotAnObject {
            path: path.to_string(),
            key: key.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ccl::Error;
    ///
    /// let err = Error::type_mismatch("servers", "scalar", "list");
    /// assert!(err.to_string().contains("expected scalar"));
    /// ```
    pub fn type_mismatch(path: &str, expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            path: path.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an invalid format error for a scalar that failed to convert.
    pub fn invalid_format(path: &str, expected: &str, value: &str) -> Self {
        Error::InvalidFormat {
            path: path.to_string(),
            expected: expected.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a syntax error pointing at a 1-based line and column.
    pub fn syntax(line: usize, col: usize, msg: &str, context: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            Error::NotAnObject { .. } => ErrorKind::NotAnObject,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns the dotted path an accessor error refers to.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::KeyNotFound { path, .. }
            | Error::NotAnObject { path, .. }
            | Error::TypeMismatch { path, .. }
            | Error::InvalidFormat { path, .. } => Some(path),
            Error::Syntax { .. } | Error::Custom(_) => None,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
