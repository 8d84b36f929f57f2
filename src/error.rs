//! The common error type for catalog construction.

use std::fmt;

/// An error that can occur while building an icon catalog.
///
/// Lookup misses are not errors; an unknown icon name surfaces as `None`
/// from [`Selector::render`](crate::Selector::render).
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

#[derive(Debug)]
pub enum ErrorKind {
    /// An icon was given an empty name.
    EmptyName,
    /// Two icons were registered under the same name.
    DuplicateIcon(String),
    /// An icon was registered with no variants at all.
    NoVariants(String),
    /// Two variants of the same icon share a natural height.
    DuplicateHeight(String),
    /// A variant was given a zero natural width or height.
    ZeroDimension,
    /// A template does not carry exactly two size slots.
    BadTemplate(String),
    /// A height key in catalog data is not a positive integer.
    BadHeightKey(String),
    /// Decoding catalog data failed.
    DataError(Box<dyn std::error::Error>),
}

/// Create a new error of the given kind.
pub fn new_error(kind: ErrorKind) -> Error {
    Error(Box::new(kind))
}

impl Error {
    /// The kind of failure, for callers that branch on it.
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::EmptyName => write!(f, "Icon name is empty"),
            ErrorKind::DuplicateIcon(ref name) => write!(f, "Duplicate icon name: {}", name),
            ErrorKind::NoVariants(ref name) => write!(f, "Icon has no variants: {}", name),
            ErrorKind::DuplicateHeight(ref name) => {
                write!(f, "Icon has two variants at the same height: {}", name)
            }
            ErrorKind::ZeroDimension => write!(f, "Variant has a zero natural dimension"),
            ErrorKind::BadTemplate(ref template) => {
                write!(f, "Template does not carry exactly two size slots: {}", template)
            }
            ErrorKind::BadHeightKey(ref key) => write!(f, "Bad height key: {}", key),
            ErrorKind::DataError(ref e) => {
                write!(f, "Data error: ")?;
                e.fmt(f)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Box<dyn std::error::Error>> for Error {
    fn from(e: Box<dyn std::error::Error>) -> Error {
        new_error(ErrorKind::DataError(e))
    }
}
