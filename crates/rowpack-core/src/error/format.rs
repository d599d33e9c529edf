use super::Error;

/// Error when a low-level encoder cannot produce its output.
///
/// Fixed-buffer encoders report insufficient space to their caller, which
/// normally retries on an allocating path. This error surfaces only when the
/// fallback path cannot satisfy the request either.
#[derive(Debug)]
pub(super) struct FormatError {
    message: Box<str>,
}

impl std::error::Error for FormatError {}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "format error: {}", self.message)
    }
}

impl Error {
    /// Creates a formatting error.
    pub fn format(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Format(FormatError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a formatting error.
    pub fn is_format(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Format(_))
    }
}
