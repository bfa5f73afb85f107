//! One character of lookahead over a [`CharSource`].

use kiss_diagnostic::Location;

use crate::CharSource;

/// The scanner's view of the input: the current character and where it is.
///
/// Lines and columns are 1-based. A `'\n'` belongs to the line it ends; the
/// character after it starts the next line at column 1.
pub struct Cursor<S> {
    source: S,
    current: Option<char>,
    location: Location,
}

impl<S: CharSource> Cursor<S> {
    /// Prime the cursor with the first character of `source`.
    pub fn new(mut source: S) -> Self {
        let current = source.read_char();
        Cursor {
            source,
            current,
            location: Location::START,
        }
    }

    /// Current lookahead character, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Location of the current character.
    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Move to the next character. Does nothing at end of input.
    pub fn advance(&mut self) {
        match self.current {
            Some('\n') => {
                self.location.line += 1;
                self.location.column = 1;
            }
            Some(_) => self.location.column += 1,
            None => return,
        }
        self.current = self.source.read_char();
    }

    /// Advance past the current character if it is `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }
}
