//! Turns characters into tokens on demand.

use kiss_diagnostic::{CompileResult, ErrorKind, Location};
use tracing::trace;

use crate::{CharSource, Cursor, Keyword, Op, Token};

/// Pull-based scanner. Each [`Scanner::next_token`] call consumes exactly
/// one token from the input.
pub struct Scanner<S> {
    cursor: Cursor<S>,
    token_start: Location,
}

impl<S: CharSource> Scanner<S> {
    pub fn new(source: S) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            token_start: Location::START,
        }
    }

    /// Where the most recently returned token starts.
    #[inline]
    pub fn location(&self) -> Location {
        self.token_start
    }

    /// Skip blanks and comments, then scan one token.
    ///
    /// Returns [`Token::Eof`] at end of input, and keeps returning it.
    pub fn next_token(&mut self) -> CompileResult<Token> {
        self.skip_trivia()?;
        self.token_start = self.cursor.location();

        let token = match self.cursor.current() {
            None => Token::Eof,
            Some(c) if c.is_ascii_alphabetic() => self.ident_or_keyword(),
            Some(c) if c.is_ascii_digit() => self.number(),
            Some(c) => self.operator(c)?,
        };
        trace!(%token, location = %self.token_start, "token");
        Ok(token)
    }

    fn skip_trivia(&mut self) -> CompileResult<()> {
        loop {
            match self.cursor.current() {
                Some(' ' | '\t' | '\r' | '\n') => self.cursor.advance(),
                Some('{') => self.skip_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Skip a `{ ... }` comment. Comments nest.
    fn skip_comment(&mut self) -> CompileResult<()> {
        let open = self.cursor.location();
        let mut depth = 0_u32;
        loop {
            match self.cursor.current() {
                None => return Err(ErrorKind::expected("}").at(open)),
                Some('{') => depth += 1,
                Some('}') => {
                    depth -= 1;
                    if depth == 0 {
                        self.cursor.advance();
                        return Ok(());
                    }
                }
                Some(_) => {}
            }
            self.cursor.advance();
        }
    }

    fn ident_or_keyword(&mut self) -> Token {
        let mut name = String::new();
        while let Some(c) = self.cursor.current().filter(char::is_ascii_alphanumeric) {
            name.push(c.to_ascii_uppercase());
            self.cursor.advance();
        }
        match Keyword::lookup(&name) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Ident(name),
        }
    }

    /// Decimal literal. Overflow wraps silently.
    fn number(&mut self) -> Token {
        let mut value = 0_i64;
        while let Some(digit) = self.cursor.current().and_then(|c| c.to_digit(10)) {
            value = value.wrapping_mul(10).wrapping_add(i64::from(digit));
            self.cursor.advance();
        }
        Token::Number(value)
    }

    fn operator(&mut self, c: char) -> CompileResult<Token> {
        let Some(op) = Op::from_char(c) else {
            return Err(ErrorKind::UnrecognizedCharacter(c).at(self.token_start));
        };
        self.cursor.advance();
        let op = match op {
            Op::Less if self.cursor.eat('=') => Op::LessEqual,
            Op::Less if self.cursor.eat('>') => Op::NotEqual,
            Op::Greater if self.cursor.eat('=') => Op::GreaterEqual,
            op => op,
        };
        Ok(Token::Op(op))
    }
}

#[cfg(test)]
mod tests;
