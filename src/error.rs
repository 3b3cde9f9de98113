//! This module implements `JalaaliError`.

use core::fmt;

/// `JalaaliError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// RangeError
    Range,
    /// SyntaxError
    Syntax,
    /// Assert
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `jalaali_rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaaliError {
    kind: ErrorKind,
    msg: ErrorMessage,
}

impl JalaaliError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    #[cfg_attr(debug_assertions, track_caller)]
    pub(crate) const fn assert() -> Self {
        #[cfg(not(debug_assertions))]
        {
            Self::new(ErrorKind::Assert)
        }
        #[cfg(debug_assertions)]
        Self {
            kind: ErrorKind::Assert,
            msg: ErrorMessage::String(core::panic::Location::caller().file()),
        }
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = ErrorMessage::String(msg);
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns this error's message record.
    ///
    /// Parse failures can be told apart by matching on the returned value.
    #[inline]
    #[must_use]
    pub const fn message(&self) -> ErrorMessage {
        self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> &'static str {
        self.msg.as_str()
    }
}

impl fmt::Display for JalaaliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.as_str();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl std::error::Error for JalaaliError {}

/// The error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorMessage {
    // Parsing
    LayoutEmpty,
    InputEmpty,
    LayoutInvalid,
    InputMismatch,
    InvalidDate,

    // Range
    InstantOutOfRange,
    CivilDateOutOfRange,
    CivilTimeOutOfRange,

    // Typed
    None,
    String(&'static str),
}

impl ErrorMessage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LayoutEmpty => "layout cannot be empty",
            Self::InputEmpty => "datetime cannot be empty",
            Self::LayoutInvalid => "invalid layout",
            Self::InputMismatch => "input does not match layout",
            Self::InvalidDate => "invalid jalaali date input",
            Self::InstantOutOfRange => "Instant nanoseconds are not within a valid epoch range.",
            Self::CivilDateOutOfRange => "Civil date is not a valid date.",
            Self::CivilTimeOutOfRange => "Civil time is not a valid time.",
            Self::None => "",
            Self::String(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, ErrorMessage, JalaaliError};

    #[test]
    fn display_includes_kind_and_message() {
        let err = JalaaliError::syntax().with_enum(ErrorMessage::LayoutEmpty);
        assert_eq!(err.to_string(), "SyntaxError: layout cannot be empty");
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.message(), ErrorMessage::LayoutEmpty);

        let bare = JalaaliError::range();
        assert_eq!(bare.to_string(), "RangeError");
    }
}
