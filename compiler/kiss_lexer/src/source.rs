//! Character sources feeding the scanner.

use std::io::{Bytes, Read};
use std::str::Chars;

use tracing::debug;

/// Anything that can hand out source characters one at a time.
///
/// `None` means end of input; a source never yields a character after its
/// first `None`.
pub trait CharSource {
    fn read_char(&mut self) -> Option<char>;
}

/// Source text held in memory.
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        StrSource { chars: text.chars() }
    }
}

impl CharSource for StrSource<'_> {
    #[inline]
    fn read_char(&mut self) -> Option<char> {
        self.chars.next()
    }
}

/// Source text read from a byte stream.
///
/// Each byte is taken as one character. The language is pure ASCII, so any
/// byte outside it is reported by the scanner as an unrecognized character.
/// A read error ends the input.
pub struct ReadSource<R> {
    bytes: Bytes<R>,
    done: bool,
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        ReadSource {
            bytes: reader.bytes(),
            done: false,
        }
    }
}

impl<R: Read> CharSource for ReadSource<R> {
    fn read_char(&mut self) -> Option<char> {
        if self.done {
            return None;
        }
        match self.bytes.next() {
            Some(Ok(byte)) => Some(char::from(byte)),
            Some(Err(err)) => {
                debug!(%err, "source read failed; treating as end of input");
                self.done = true;
                None
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}
