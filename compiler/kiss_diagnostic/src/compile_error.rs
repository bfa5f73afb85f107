//! The fatal error raised by every compiler phase.
//!
//! There is no recoverable category: the first [`CompileError`] unwinds
//! through `?` to the driver, which reports it once and stops.

use std::fmt;

use crate::ErrorCode;

/// Result alias threaded through the scanner, parser and code generator.
pub type CompileResult<T> = Result<T, CompileError>;

/// One-based line and column of a character in the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// The first character of the source.
    pub const START: Location = Location { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// The lookahead does not match the token the grammar requires.
    #[error("\"{0}\" Expected")]
    Expected(String),
    /// A reserved word where no declaration or statement accepts it.
    #[error("Unrecognized Keyword {0}")]
    UnrecognizedKeyword(String),
    /// A character outside every lexical class.
    #[error("Unrecognized Character '{}'", .0.escape_default())]
    UnrecognizedCharacter(char),
    #[error("Undefined Identifier {0}")]
    UndefinedIdentifier(String),
    #[error("Duplicate Identifier {0}")]
    DuplicateIdentifier(String),
    /// A procedure name where a variable is required.
    #[error("{0} is not a variable")]
    NotAVariable(String),
    #[error("No loop to break from")]
    NoEnclosingLoop,
}

impl ErrorKind {
    /// Shorthand for [`ErrorKind::Expected`].
    pub fn expected(what: impl Into<String>) -> Self {
        ErrorKind::Expected(what.into())
    }

    /// The searchable code for this kind of error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ErrorKind::UnrecognizedCharacter(_) => ErrorCode::E0001,
            ErrorKind::Expected(_) => ErrorCode::E1001,
            ErrorKind::UnrecognizedKeyword(_) => ErrorCode::E1002,
            ErrorKind::UndefinedIdentifier(_) => ErrorCode::E2001,
            ErrorKind::DuplicateIdentifier(_) => ErrorCode::E2002,
            ErrorKind::NotAVariable(_) => ErrorCode::E2003,
            ErrorKind::NoEnclosingLoop => ErrorCode::E2004,
        }
    }

    /// Anchor this error at a source location.
    pub fn at(self, location: Location) -> CompileError {
        CompileError {
            kind: self,
            location,
        }
    }
}

/// An [`ErrorKind`] at the location of the token that triggered it.
///
/// Renders as two lines:
///
/// ```text
/// error[E2002]: Duplicate Identifier A
///   --> 2:6
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("error[{}]: {kind}\n  --> {location}", .kind.code())]
pub struct CompileError {
    pub kind: ErrorKind,
    pub location: Location,
}

impl CompileError {
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

#[cfg(test)]
mod tests;
