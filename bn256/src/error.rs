//! Error types.

use core::fmt;

/// Errors produced when deserializing a field element.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The 32-byte value decodes to an integer strictly greater than the
    /// field modulus.
    CoordinateExceedsModulus,

    /// The 32-byte value decodes to the field modulus itself, which is not a
    /// valid residue.
    MalformedPoint,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CoordinateExceedsModulus => f.write_str("coordinate exceeds modulus"),
            Error::MalformedPoint => f.write_str("malformed point"),
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
