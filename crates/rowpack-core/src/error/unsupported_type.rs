use super::Error;
use crate::stmt::ValueKind;

/// Error when no type mapper is registered for a value's kind.
///
/// Raised by registry lookup when a value kind has no mapper for the active
/// dialect and is not an enumeration whose underlying integer kind is mapped.
#[derive(Debug)]
pub(super) struct UnsupportedTypeError {
    pub(super) kind: ValueKind,
}

impl std::error::Error for UnsupportedTypeError {}

impl core::fmt::Display for UnsupportedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no type mapper registered for {:?}", self.kind)
    }
}

impl Error {
    /// Creates an unsupported type error for the given value kind.
    pub fn unsupported_type(kind: ValueKind) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedTypeError {
            kind,
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
