//! Scanner for the KISS language.
//!
//! Input arrives one character at a time through a [`CharSource`]; the
//! [`Cursor`] adds one character of lookahead and tracks line/column, and the
//! [`Scanner`] turns that stream into [`Token`]s on demand. There is no token
//! buffer: the parser pulls exactly one token ahead.

mod cursor;
mod scanner;
mod source;
mod token;

pub use cursor::Cursor;
pub use scanner::Scanner;
pub use source::{CharSource, ReadSource, StrSource};
pub use token::{Keyword, Op, Token};
