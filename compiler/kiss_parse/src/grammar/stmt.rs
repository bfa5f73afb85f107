//! Blocks and statements.
//!
//! Each loop allocates its labels when it is entered and hands its exit
//! label down as the break target. `IF` passes its caller's target through.

use kiss_asm::{Cond, Reg};
use kiss_codegen::Output;
use kiss_diagnostic::{CompileResult, ErrorKind};
use kiss_lexer::{CharSource, Keyword, Op, Token};
use tracing::debug;

use crate::{ensure_sufficient_stack, Parser, SymbolKind};

impl<S: CharSource, O: Output> Parser<S, O> {
    /// Statements up to `END`, `ENDIF`, `ELSE`, `UNTIL`, `.` or end of input.
    /// `;` between statements is optional.
    pub(crate) fn block(&mut self, break_target: Option<&str>) -> CompileResult<()> {
        ensure_sufficient_stack(|| loop {
            match self.token {
                Token::Keyword(Keyword::End | Keyword::EndIf | Keyword::Else | Keyword::Until)
                | Token::Op(Op::Dot)
                | Token::Eof => return Ok(()),
                Token::Op(Op::Semicolon) => self.advance()?,
                _ => self.statement(break_target)?,
            }
        })
    }

    fn statement(&mut self, break_target: Option<&str>) -> CompileResult<()> {
        match self.token {
            Token::Keyword(keyword) => {
                debug!(%keyword, location = %self.location, "statement");
                match keyword {
                    Keyword::If => self.if_statement(break_target),
                    Keyword::While => self.while_statement(),
                    Keyword::Loop => self.loop_statement(),
                    Keyword::Repeat => self.repeat_statement(),
                    Keyword::For => self.for_statement(),
                    Keyword::Do => self.do_statement(),
                    Keyword::Break => self.break_statement(break_target),
                    Keyword::Read => self.read_statement(),
                    Keyword::Write => self.write_statement(),
                    _ => Err(self.error(ErrorKind::UnrecognizedKeyword(keyword.to_string()))),
                }
            }
            Token::Ident(_) => self.assignment_or_call(),
            _ => Err(self.expected("Identifier")),
        }
    }

    /// `name = bool-expr`, or a bare procedure name.
    fn assignment_or_call(&mut self) -> CompileResult<()> {
        let (name, location) = self.ident()?;
        if self.eat_op(Op::Equal)? {
            let size = self
                .symbols
                .variable(&name)
                .map_err(|kind| kind.at(location))?;
            let value = self.bool_expr()?;
            self.cg.store(&name, value, size);
            return Ok(());
        }
        match self.symbols.lookup(&name).map_err(|kind| kind.at(location))? {
            SymbolKind::Procedure => {
                self.cg.call(&name);
                Ok(())
            }
            SymbolKind::Variable(_) => Err(self.expected("=")),
        }
    }

    /// `IF cond block [ELSE block] ENDIF`
    fn if_statement(&mut self, break_target: Option<&str>) -> CompileResult<()> {
        self.advance()?;
        let cond = self.bool_expr()?;
        let skip = self.cg.new_label();
        self.cg.branch_if_false(cond, &skip);
        self.block(break_target)?;
        if self.eat_keyword(Keyword::Else)? {
            let end = self.cg.new_label();
            self.cg.branch(&end);
            self.cg.post_label(&skip);
            self.block(break_target)?;
            self.cg.post_label(&end);
        } else {
            self.cg.post_label(&skip);
        }
        self.expect_keyword(Keyword::EndIf)
    }

    /// `WHILE cond block END`
    fn while_statement(&mut self) -> CompileResult<()> {
        self.advance()?;
        let top = self.cg.new_label();
        let exit = self.cg.new_label();
        self.cg.post_label(&top);
        let cond = self.bool_expr()?;
        self.cg.branch_if_false(cond, &exit);
        self.block(Some(&exit))?;
        self.expect_keyword(Keyword::End)?;
        self.cg.branch(&top);
        self.cg.post_label(&exit);
        Ok(())
    }

    /// `LOOP block END`; left only by `BREAK`.
    fn loop_statement(&mut self) -> CompileResult<()> {
        self.advance()?;
        let top = self.cg.new_label();
        let exit = self.cg.new_label();
        self.cg.post_label(&top);
        self.block(Some(&exit))?;
        self.expect_keyword(Keyword::End)?;
        self.cg.branch(&top);
        self.cg.post_label(&exit);
        Ok(())
    }

    /// `REPEAT block UNTIL cond`
    fn repeat_statement(&mut self) -> CompileResult<()> {
        self.advance()?;
        let top = self.cg.new_label();
        let exit = self.cg.new_label();
        self.cg.post_label(&top);
        self.block(Some(&exit))?;
        self.expect_keyword(Keyword::Until)?;
        let cond = self.bool_expr()?;
        self.cg.branch_if_false(cond, &top);
        self.cg.post_label(&exit);
        Ok(())
    }

    /// `FOR name = lower TO upper block END`
    ///
    /// The variable is set to `lower - 1` and incremented before each test,
    /// so the test sits at the top and a range with `lower > upper` runs the
    /// body zero times. The limit stays on the stack for the whole loop.
    /// An upper bound at the largest value of the variable's size never
    /// exits, since the increment wraps.
    fn for_statement(&mut self) -> CompileResult<()> {
        self.advance()?;
        let top = self.cg.new_label();
        let exit = self.cg.new_label();

        let (name, location) = self.ident()?;
        let size = self
            .symbols
            .variable(&name)
            .map_err(|kind| kind.at(location))?;
        self.expect_op(Op::Equal)?;
        let lower = self.expression()?;
        self.cg.convert(Reg::D0, lower, size);
        self.cg.decrement(size);
        self.cg.store(&name, size, size);
        self.expect_keyword(Keyword::To)?;
        let upper = self.expression()?;
        self.cg.convert(Reg::D0, upper, size);
        self.cg.push(size);

        self.cg.post_label(&top);
        self.cg.load_var(&name, size);
        self.cg.increment(size);
        self.cg.store(&name, size, size);
        self.cg.compare_top(size);
        self.cg.branch_if(Cond::Gt, &exit);
        self.block(Some(&exit))?;
        self.expect_keyword(Keyword::End)?;
        self.cg.branch(&top);
        self.cg.post_label(&exit);
        self.cg.pop(size);
        Ok(())
    }

    /// `DO count block END`
    ///
    /// Runs the body `count` times; a count of zero or less skips it. The
    /// remaining count lives on the stack.
    fn do_statement(&mut self) -> CompileResult<()> {
        self.advance()?;
        let top = self.cg.new_label();
        let exit = self.cg.new_label();

        let size = self.expression()?;
        self.cg.push(size);
        self.cg.test(size);
        self.cg.branch_if(Cond::Le, &exit);
        self.cg.post_label(&top);
        self.block(Some(&exit))?;
        self.expect_keyword(Keyword::End)?;
        self.cg.count_down(size, &top);
        self.cg.post_label(&exit);
        self.cg.pop(size);
        Ok(())
    }

    fn break_statement(&mut self, break_target: Option<&str>) -> CompileResult<()> {
        let Some(target) = break_target else {
            return Err(self.error(ErrorKind::NoEnclosingLoop));
        };
        self.advance()?;
        self.cg.branch(target);
        Ok(())
    }

    /// `READ(a, b, ...)`: each value arrives as a long.
    fn read_statement(&mut self) -> CompileResult<()> {
        self.advance()?;
        self.expect_op(Op::LParen)?;
        loop {
            let (name, location) = self.ident()?;
            let size = self
                .symbols
                .variable(&name)
                .map_err(|kind| kind.at(location))?;
            let value = self.cg.read();
            self.cg.store(&name, value, size);
            if !self.eat_op(Op::Comma)? {
                break;
            }
        }
        self.expect_op(Op::RParen)
    }

    /// `WRITE(expr, ...)`
    fn write_statement(&mut self) -> CompileResult<()> {
        self.advance()?;
        self.expect_op(Op::LParen)?;
        loop {
            let size = self.bool_expr()?;
            self.cg.write(size);
            if !self.eat_op(Op::Comma)? {
                break;
            }
        }
        self.expect_op(Op::RParen)
    }
}

