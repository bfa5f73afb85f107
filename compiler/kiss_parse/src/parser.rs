//! Parser state and token-level helpers.
//!
//! The grammar rules themselves live in `grammar/`.

use kiss_codegen::{CodeGen, Output};
use kiss_diagnostic::{CompileError, CompileResult, ErrorKind, Location};
use kiss_lexer::{CharSource, Keyword, Op, Scanner, Token};

use crate::SymbolTable;

/// One compilation's worth of parser state.
///
/// `token` is the lookahead: the next token not yet consumed, starting at
/// `location`.
pub struct Parser<S, O> {
    scanner: Scanner<S>,
    pub(crate) token: Token,
    pub(crate) location: Location,
    pub(crate) symbols: SymbolTable,
    pub(crate) cg: CodeGen<O>,
}

impl<S: CharSource, O: Output> Parser<S, O> {
    /// Create a parser and scan the first token.
    ///
    /// `symbols` holds any names declared before the source starts.
    pub fn new(source: S, cg: CodeGen<O>, symbols: SymbolTable) -> CompileResult<Self> {
        let mut scanner = Scanner::new(source);
        let token = scanner.next_token()?;
        Ok(Parser {
            location: scanner.location(),
            scanner,
            token,
            symbols,
            cg,
        })
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Hand back the code generator and symbol table.
    pub fn into_parts(self) -> (CodeGen<O>, SymbolTable) {
        (self.cg, self.symbols)
    }

    // Token helpers

    /// Consume the lookahead and scan the next token.
    pub(crate) fn advance(&mut self) -> CompileResult<()> {
        self.token = self.scanner.next_token()?;
        self.location = self.scanner.location();
        Ok(())
    }

    /// An error at the lookahead token.
    pub(crate) fn error(&self, kind: ErrorKind) -> CompileError {
        kind.at(self.location)
    }

    /// `"what" Expected` at the lookahead token.
    pub(crate) fn expected(&self, what: &str) -> CompileError {
        self.error(ErrorKind::expected(what))
    }

    #[inline]
    pub(crate) fn at_op(&self, op: Op) -> bool {
        self.token.is_op(op)
    }

    #[inline]
    pub(crate) fn at_keyword(&self, keyword: Keyword) -> bool {
        self.token.is_keyword(keyword)
    }

    /// Consume `op` if it is next.
    pub(crate) fn eat_op(&mut self, op: Op) -> CompileResult<bool> {
        if self.at_op(op) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(crate) fn eat_keyword(&mut self, keyword: Keyword) -> CompileResult<bool> {
        if self.at_keyword(keyword) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(crate) fn expect_op(&mut self, op: Op) -> CompileResult<()> {
        if self.eat_op(op)? {
            Ok(())
        } else {
            Err(self.expected(op.as_str()))
        }
    }

    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> CompileResult<()> {
        if self.eat_keyword(keyword)? {
            Ok(())
        } else {
            Err(self.expected(keyword.as_str()))
        }
    }

    /// Consume an identifier; returns its name and where it was.
    pub(crate) fn ident(&mut self) -> CompileResult<(String, Location)> {
        let Token::Ident(name) = &self.token else {
            return Err(self.expected("Identifier"));
        };
        let name = name.clone();
        let location = self.location;
        self.advance()?;
        Ok((name, location))
    }

    /// Consume an integer literal.
    pub(crate) fn number(&mut self) -> CompileResult<i64> {
        let Token::Number(value) = self.token else {
            return Err(self.expected("Integer"));
        };
        self.advance()?;
        Ok(value)
    }
}
