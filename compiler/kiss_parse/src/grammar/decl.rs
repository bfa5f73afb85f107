//! Program structure and declarations.
//!
//! ```text
//! program     ::= [ PROGRAM ident ] { declaration } ( BEGIN block END | block ) '.'
//! declaration ::= (VAR | BYTE | WORD | LONG) var { ',' var }
//!               | PROCEDURE ident BEGIN block END
//! var         ::= ident [ '=' [ '-' ] number ]
//! ```
//!
//! Declarations emit as they are parsed: a data line per variable and the
//! code of each procedure. The main program follows under `MAIN:`.

use kiss_asm::Size;
use kiss_codegen::Output;
use kiss_diagnostic::{CompileResult, ErrorKind};
use kiss_lexer::{CharSource, Keyword, Op, Token};
use tracing::debug;

use crate::{Parser, SymbolKind};

impl<S: CharSource, O: Output> Parser<S, O> {
    /// Parse a whole program, from the optional header through the final `.`.
    pub fn program(&mut self) -> CompileResult<()> {
        if self.eat_keyword(Keyword::Program)? {
            let (name, _) = self.ident()?;
            debug!(%name, "program");
        }
        self.declarations()?;

        self.cg.main_entry();
        if self.eat_keyword(Keyword::Begin)? {
            self.block(None)?;
            self.expect_keyword(Keyword::End)?;
        } else {
            self.block(None)?;
        }
        self.cg.ret();

        if let Token::Keyword(keyword) = self.token {
            return Err(self.error(ErrorKind::UnrecognizedKeyword(keyword.to_string())));
        }
        self.expect_op(Op::Dot)
    }

    fn declarations(&mut self) -> CompileResult<()> {
        loop {
            let size = match self.token {
                Token::Keyword(Keyword::Var | Keyword::Word) => Size::Word,
                Token::Keyword(Keyword::Byte) => Size::Byte,
                Token::Keyword(Keyword::Long) => Size::Long,
                Token::Keyword(Keyword::Procedure) => {
                    self.procedure()?;
                    continue;
                }
                _ => return Ok(()),
            };
            self.advance()?;
            self.variables(size)?;
        }
    }

    /// One or more comma-separated variables of `size`.
    fn variables(&mut self, size: Size) -> CompileResult<()> {
        loop {
            let (name, location) = self.ident()?;
            self.symbols
                .declare(&name, SymbolKind::Variable(size))
                .map_err(|kind| kind.at(location))?;
            let init = if self.eat_op(Op::Equal)? {
                let negative = self.eat_op(Op::Minus)?;
                let value = self.number()?;
                if negative {
                    value.wrapping_neg()
                } else {
                    value
                }
            } else {
                0
            };
            debug!(%name, %size, init, "variable");
            self.cg.data(&name, size, init);
            if !self.eat_op(Op::Comma)? {
                return Ok(());
            }
        }
    }

    /// `PROCEDURE name BEGIN block END`
    ///
    /// The name is declared before the body, so a procedure may call itself.
    fn procedure(&mut self) -> CompileResult<()> {
        self.advance()?;
        let (name, location) = self.ident()?;
        self.symbols
            .declare(&name, SymbolKind::Procedure)
            .map_err(|kind| kind.at(location))?;
        debug!(%name, "procedure");

        self.cg.procedure_entry(&name);
        self.expect_keyword(Keyword::Begin)?;
        self.block(None)?;
        self.expect_keyword(Keyword::End)?;
        self.cg.ret();
        Ok(())
    }
}
