use alloc::string::String;
use core::fmt;

use crate::result::Content;

/// A failure description: a human readable message paired with a machine
/// readable code taken from a caller-defined enumeration.
///
/// `ErrorInfo` has no setters. Build a new one instead of changing an
/// existing one.
///
/// # Examples
///
/// ```
/// use tristate::ErrorInfo;
///
/// #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// enum Code {
///     #[default]
///     Unknown,
///     Invalid,
/// }
///
/// let info = ErrorInfo::new("bad input", Code::Invalid);
/// assert_eq!(info.message(), "bad input");
/// assert_eq!(info.code(), &Code::Invalid);
///
/// let info: ErrorInfo<Code> = ErrorInfo::from_message("no code");
/// assert_eq!(info.code(), &Code::Unknown);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ErrorInfo<Code> {
    message: String,
    code: Code,
}

impl<Code> ErrorInfo<Code> {
    pub fn new(message: impl Into<String>, code: Code) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    /// Creates an error carrying `code` and an empty message.
    pub const fn from_code(code: Code) -> Self {
        Self {
            message: String::new(),
            code,
        }
    }

    /// Creates an error carrying `message` and the default code.
    pub fn from_message(message: impl Into<String>) -> Self
    where
        Code: Default,
    {
        Self::new(message, Code::default())
    }

    /// The human readable message. Empty unless one was supplied.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The machine readable code.
    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.code
    }

    #[must_use]
    pub fn into_parts(self) -> (String, Code) {
        (self.message, self.code)
    }
}

impl<Code> From<Code> for ErrorInfo<Code> {
    fn from(code: Code) -> Self {
        Self::from_code(code)
    }
}

impl<Code: fmt::Debug> fmt::Display for ErrorInfo<Code> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{:?}", self.code)
        } else {
            write!(f, "{:?}: {}", self.code, self.message)
        }
    }
}

impl<Code: fmt::Debug> core::error::Error for ErrorInfo<Code> {}

/// Raised when a [`Result`](crate::Result) is read as a state it does not hold.
///
/// The checked accessors return it; `get` and `error` panic with its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("invalid state access: expected a value, but the result holds {actual}")]
    NotValue { actual: Content },

    #[error("invalid state access: expected an error, but the result holds {actual}")]
    NotError { actual: Content },
}

impl AccessError {
    /// The state the result actually held.
    #[must_use]
    pub const fn actual(&self) -> Content {
        match self {
            Self::NotValue { actual } | Self::NotError { actual } => *actual,
        }
    }
}
