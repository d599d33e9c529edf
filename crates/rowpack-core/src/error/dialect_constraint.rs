use super::Error;

/// Error when an insert request violates a dialect's structural rules.
///
/// This occurs when:
/// - PostgreSQL is asked for an update-set together with error-ignoring
/// - PostgreSQL is asked for an update-set without a named constraint
///
/// Validated before any statement text is written, so a partially built
/// command is never returned.
#[derive(Debug)]
pub(super) struct DialectConstraintError {
    message: Box<str>,
}

impl std::error::Error for DialectConstraintError {}

impl core::fmt::Display for DialectConstraintError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "dialect constraint violation: {}", self.message)
    }
}

impl Error {
    /// Creates a dialect constraint violation error.
    pub fn dialect_constraint(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DialectConstraint(
            DialectConstraintError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a dialect constraint violation.
    pub fn is_dialect_constraint(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DialectConstraint(_))
    }
}
