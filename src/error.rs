use std::fmt::Display;
use std::io;
use std::path::PathBuf;

/// An error loading or decoding a benchmark document.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) kind: ErrorKind,
}

impl Error {
    /// Returns the kind of the error.
    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns true if the document could not be read from disk.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        matches!(self.kind, ErrorKind::Read { .. })
    }

    pub(crate) fn read(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self::from(ErrorKind::Read {
            path: path.into(),
            kind: err.kind(),
        })
    }

    pub(crate) fn unexpected_shape(message: impl Into<String>) -> Self {
        Self::from(ErrorKind::UnexpectedShape {
            message: message.into(),
        })
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let kind = match err.classify() {
            // A well-formed document whose root or elements don't fit the
            // requested type.
            Category::Data => ErrorKind::UnexpectedShape {
                message: err.to_string(),
            },
            Category::Io | Category::Syntax | Category::Eof => ErrorKind::Syntax {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            },
        };
        Self { kind }
    }
}

/// The reason a document could not be benchmarked.
#[derive(Debug, Eq, PartialEq, Clone)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The document file could not be read.
    Read {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error kind.
        kind: io::ErrorKind,
    },
    /// The document is not valid JSON.
    Syntax {
        /// The 1-based line nearest to where the error occurred.
        line: usize,
        /// The 1-based column nearest to where the error occurred.
        column: usize,
        /// A description of the problem.
        message: String,
    },
    /// The document is valid JSON but is not an array of records.
    UnexpectedShape {
        /// A description of what was expected.
        message: String,
    },
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Read { path, kind } => {
                write!(f, "error reading {}: {kind}", path.display())
            }
            ErrorKind::Syntax {
                line,
                column,
                message,
            } => write!(f, "invalid json at {line}:{column}: {message}"),
            ErrorKind::UnexpectedShape { message } => {
                write!(f, "unexpected document shape: {message}")
            }
        }
    }
}

#[test]
fn serde_errors_are_classified() {
    let syntax = Error::from(serde_json::from_str::<serde_json::Value>("[1,").unwrap_err());
    assert!(matches!(syntax.kind(), ErrorKind::Syntax { line: 1, .. }));

    let shape = Error::from(serde_json::from_str::<Vec<bool>>("{}").unwrap_err());
    assert!(matches!(shape.kind(), ErrorKind::UnexpectedShape { .. }));
}

#[test]
fn display() {
    let err = Error::read("missing.json", &io::Error::from(io::ErrorKind::NotFound));
    assert!(err.is_read());
    assert_eq!(err.to_string(), "error reading missing.json: entity not found");
}
