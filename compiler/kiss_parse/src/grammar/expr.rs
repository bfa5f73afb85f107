//! Expressions.
//!
//! ```text
//! bool-expr     ::= bool-term { ('|' | OR | '~' | XOR) bool-term }
//! bool-term     ::= not-factor { ('&' | AND) not-factor }
//! not-factor    ::= [ '!' | NOT ] relation
//! relation      ::= expression [ relop expression ]
//! expression    ::= term { ('+' | '-') term }
//! term          ::= signed-factor { ('*' | '/') signed-factor }
//! signed-factor ::= [ '+' | '-' ] factor
//! factor        ::= number | ident | '(' bool-expr ')'
//! ```
//!
//! Every binary step has the same shape: push the left value, parse the
//! right one into `D0`, then let the code generator pop and combine.

use kiss_asm::{Cond, Size};
use kiss_codegen::Output;
use kiss_diagnostic::CompileResult;
use kiss_lexer::{CharSource, Keyword, Op, Token};
use tracing::trace;

use crate::{ensure_sufficient_stack, Parser};

#[derive(Copy, Clone)]
enum BoolOp {
    Or,
    Xor,
}

impl<S: CharSource, O: Output> Parser<S, O> {
    pub(crate) fn bool_expr(&mut self) -> CompileResult<Size> {
        ensure_sufficient_stack(|| {
            let mut left = self.bool_term()?;
            loop {
                let op = match self.token {
                    Token::Op(Op::Pipe) | Token::Keyword(Keyword::Or) => BoolOp::Or,
                    Token::Op(Op::Tilde) | Token::Keyword(Keyword::Xor) => BoolOp::Xor,
                    _ => return Ok(left),
                };
                self.advance()?;
                self.cg.push(left);
                let right = self.bool_term()?;
                left = match op {
                    BoolOp::Or => self.cg.or(left, right),
                    BoolOp::Xor => self.cg.xor(left, right),
                };
            }
        })
    }

    fn bool_term(&mut self) -> CompileResult<Size> {
        let mut left = self.not_factor()?;
        while matches!(
            self.token,
            Token::Op(Op::Amp) | Token::Keyword(Keyword::And)
        ) {
            self.advance()?;
            self.cg.push(left);
            let right = self.not_factor()?;
            left = self.cg.and(left, right);
        }
        Ok(left)
    }

    fn not_factor(&mut self) -> CompileResult<Size> {
        if matches!(
            self.token,
            Token::Op(Op::Bang) | Token::Keyword(Keyword::Not)
        ) {
            self.advance()?;
            let size = self.relation()?;
            self.cg.not(size);
            Ok(size)
        } else {
            self.relation()
        }
    }

    /// An expression, optionally compared with a second one.
    fn relation(&mut self) -> CompileResult<Size> {
        let left = self.expression()?;
        let cond = match self.token {
            Token::Op(Op::Equal) => Cond::Eq,
            Token::Op(Op::NotEqual) => Cond::Ne,
            Token::Op(Op::Less) => Cond::Lt,
            Token::Op(Op::Greater) => Cond::Gt,
            Token::Op(Op::LessEqual) => Cond::Le,
            Token::Op(Op::GreaterEqual) => Cond::Ge,
            _ => return Ok(left),
        };
        trace!(cond = cond.mnemonic(), "relation");
        self.advance()?;
        self.cg.push(left);
        let right = self.expression()?;
        Ok(self.cg.compare(cond, left, right))
    }

    /// Arithmetic expression. Also the rule for `FOR` bounds and `DO` counts.
    pub(crate) fn expression(&mut self) -> CompileResult<Size> {
        let mut left = self.term()?;
        loop {
            let subtract = match self.token {
                Token::Op(Op::Plus) => false,
                Token::Op(Op::Minus) => true,
                _ => return Ok(left),
            };
            self.advance()?;
            self.cg.push(left);
            let right = self.term()?;
            left = if subtract {
                self.cg.subtract(left, right)
            } else {
                self.cg.add(left, right)
            };
        }
    }

    fn term(&mut self) -> CompileResult<Size> {
        let mut left = self.signed_factor()?;
        loop {
            let divide = match self.token {
                Token::Op(Op::Star) => false,
                Token::Op(Op::Slash) => true,
                _ => return Ok(left),
            };
            self.advance()?;
            self.cg.push(left);
            let right = self.signed_factor()?;
            left = if divide {
                self.cg.divide(left, right)
            } else {
                self.cg.multiply(left, right)
            };
        }
    }

    /// A factor with an optional sign. `-` before a literal folds into the
    /// constant instead of emitting a negate.
    fn signed_factor(&mut self) -> CompileResult<Size> {
        if self.eat_op(Op::Plus)? {
            return self.factor();
        }
        if !self.eat_op(Op::Minus)? {
            return self.factor();
        }
        if let Token::Number(value) = self.token {
            self.advance()?;
            return Ok(self.cg.load_const(value.wrapping_neg()));
        }
        let size = self.factor()?;
        self.cg.negate(size);
        Ok(size)
    }

    fn factor(&mut self) -> CompileResult<Size> {
        match self.token {
            Token::Op(Op::LParen) => {
                self.advance()?;
                let size = self.bool_expr()?;
                self.expect_op(Op::RParen)?;
                Ok(size)
            }
            Token::Number(_) => {
                let value = self.number()?;
                Ok(self.cg.load_const(value))
            }
            Token::Ident(_) => {
                let (name, location) = self.ident()?;
                let size = self
                    .symbols
                    .variable(&name)
                    .map_err(|kind| kind.at(location))?;
                Ok(self.cg.load_var(&name, size))
            }
            _ => Err(self.expected("Factor")),
        }
    }
}
