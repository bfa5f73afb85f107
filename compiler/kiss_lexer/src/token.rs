//! Tokens produced by the scanner.

use std::fmt;

/// One lexical unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Identifier, already uppercased.
    Ident(String),
    Number(i64),
    Op(Op),
    Keyword(Keyword),
    Eof,
}

impl Token {
    #[inline]
    pub fn is_op(&self, op: Op) -> bool {
        *self == Token::Op(op)
    }

    #[inline]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        *self == Token::Keyword(keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => f.write_str(name),
            Token::Number(value) => write!(f, "{value}"),
            Token::Op(op) => f.write_str(op.as_str()),
            Token::Keyword(keyword) => f.write_str(keyword.as_str()),
            Token::Eof => f.write_str("end of input"),
        }
    }
}

/// Operator and punctuation tokens.
///
/// `<>` scans as [`Op::NotEqual`], the same token as `#`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Equal,
    /// `#` or `<>`
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    /// `&`: boolean and
    Amp,
    /// `|`: boolean or
    Pipe,
    /// `~`: boolean exclusive or
    Tilde,
    /// `!`: boolean not
    Bang,
    Comma,
    Semicolon,
    Dot,
}

impl Op {
    pub const fn as_str(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
            Op::LParen => "(",
            Op::RParen => ")",
            Op::Equal => "=",
            Op::NotEqual => "#",
            Op::Less => "<",
            Op::Greater => ">",
            Op::LessEqual => "<=",
            Op::GreaterEqual => ">=",
            Op::Amp => "&",
            Op::Pipe => "|",
            Op::Tilde => "~",
            Op::Bang => "!",
            Op::Comma => ",",
            Op::Semicolon => ";",
            Op::Dot => ".",
        }
    }

    /// Single-character operators. `<` and `>` may still extend to two.
    pub fn from_char(c: char) -> Option<Op> {
        Some(match c {
            '+' => Op::Plus,
            '-' => Op::Minus,
            '*' => Op::Star,
            '/' => Op::Slash,
            '(' => Op::LParen,
            ')' => Op::RParen,
            '=' => Op::Equal,
            '#' => Op::NotEqual,
            '<' => Op::Less,
            '>' => Op::Greater,
            '&' => Op::Amp,
            '|' => Op::Pipe,
            '~' => Op::Tilde,
            '!' => Op::Bang,
            ',' => Op::Comma,
            ';' => Op::Semicolon,
            '.' => Op::Dot,
            _ => return None,
        })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words. They can never be used as identifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Program,
    Begin,
    End,
    Var,
    Byte,
    Word,
    Long,
    Procedure,
    If,
    Else,
    EndIf,
    While,
    Loop,
    Repeat,
    Until,
    For,
    To,
    Do,
    Break,
    Read,
    Write,
    And,
    Or,
    Xor,
    Not,
}

impl Keyword {
    #[cfg(test)]
    pub(crate) const ALL: [Keyword; 25] = [
        Keyword::Program,
        Keyword::Begin,
        Keyword::End,
        Keyword::Var,
        Keyword::Byte,
        Keyword::Word,
        Keyword::Long,
        Keyword::Procedure,
        Keyword::If,
        Keyword::Else,
        Keyword::EndIf,
        Keyword::While,
        Keyword::Loop,
        Keyword::Repeat,
        Keyword::Until,
        Keyword::For,
        Keyword::To,
        Keyword::Do,
        Keyword::Break,
        Keyword::Read,
        Keyword::Write,
        Keyword::And,
        Keyword::Or,
        Keyword::Xor,
        Keyword::Not,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Program => "PROGRAM",
            Keyword::Begin => "BEGIN",
            Keyword::End => "END",
            Keyword::Var => "VAR",
            Keyword::Byte => "BYTE",
            Keyword::Word => "WORD",
            Keyword::Long => "LONG",
            Keyword::Procedure => "PROCEDURE",
            Keyword::If => "IF",
            Keyword::Else => "ELSE",
            Keyword::EndIf => "ENDIF",
            Keyword::While => "WHILE",
            Keyword::Loop => "LOOP",
            Keyword::Repeat => "REPEAT",
            Keyword::Until => "UNTIL",
            Keyword::For => "FOR",
            Keyword::To => "TO",
            Keyword::Do => "DO",
            Keyword::Break => "BREAK",
            Keyword::Read => "READ",
            Keyword::Write => "WRITE",
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Xor => "XOR",
            Keyword::Not => "NOT",
        }
    }

    /// Look up an uppercased identifier.
    ///
    /// Reserved words are 2 to 9 characters long; anything else is rejected
    /// before comparing.
    pub fn lookup(text: &str) -> Option<Keyword> {
        if !(2..=9).contains(&text.len()) {
            return None;
        }
        Some(match text {
            "PROGRAM" => Keyword::Program,
            "BEGIN" => Keyword::Begin,
            "END" => Keyword::End,
            "VAR" => Keyword::Var,
            "BYTE" => Keyword::Byte,
            "WORD" => Keyword::Word,
            "LONG" => Keyword::Long,
            "PROCEDURE" => Keyword::Procedure,
            "IF" => Keyword::If,
            "ELSE" => Keyword::Else,
            "ENDIF" => Keyword::EndIf,
            "WHILE" => Keyword::While,
            "LOOP" => Keyword::Loop,
            "REPEAT" => Keyword::Repeat,
            "UNTIL" => Keyword::Until,
            "FOR" => Keyword::For,
            "TO" => Keyword::To,
            "DO" => Keyword::Do,
            "BREAK" => Keyword::Break,
            "READ" => Keyword::Read,
            "WRITE" => Keyword::Write,
            "AND" => Keyword::And,
            "OR" => Keyword::Or,
            "XOR" => Keyword::Xor,
            "NOT" => Keyword::Not,
            _ => return None,
        })
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
