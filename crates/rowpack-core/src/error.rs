mod dialect_constraint;
mod format;
mod invalid_statement;
mod unsupported_type;

use dialect_constraint::DialectConstraintError;
use format::FormatError;
use invalid_statement::InvalidStatementError;
use std::sync::Arc;
use unsupported_type::UnsupportedTypeError;

/// Creates an [`Error`] from format arguments, analogous to `anyhow::anyhow!`.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// Returns early with an [`Error`] built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// An error produced while building a bulk statement.
///
/// The type stays one word wide; the payload lives behind an `Arc` so errors
/// are cheap to clone and return through deep call stacks.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(String),
    DialectConstraint(DialectConstraintError),
    Format(FormatError),
    InvalidStatement(InvalidStatementError),
    UnsupportedType(UnsupportedTypeError),
}

impl Error {
    pub fn from_args(args: std::fmt::Arguments<'_>) -> Error {
        match args.as_str() {
            Some(s) => Error::from(ErrorKind::Adhoc(s.to_string())),
            None => Error::from(ErrorKind::Adhoc(std::fmt::format(args))),
        }
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self.kind() {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(msg) => f.write_str(msg),
            DialectConstraint(err) => core::fmt::Display::fmt(err, f),
            Format(err) => core::fmt::Display::fmt(err, f),
            InvalidStatement(err) => core::fmt::Display::fmt(err, f),
            UnsupportedType(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.inner).finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(kind),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_one_word() {
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>()
        );
    }

    #[test]
    fn error_from_args() {
        let err = err!("bad row at line {}", 7);
        assert_eq!(err.to_string(), "bad row at line 7");
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("driver exploded").into();
        assert_eq!(err.to_string(), "driver exploded");
    }

    #[test]
    fn predicates_do_not_cross() {
        let err = Error::invalid_statement("no rows");
        assert!(err.is_invalid_statement());
        assert!(!err.is_dialect_constraint());
        assert!(!err.is_unsupported_type());
    }
}
