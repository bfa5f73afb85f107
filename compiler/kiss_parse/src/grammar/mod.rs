//! Grammar rules, one method per production.
//!
//! - `decl`: program structure and declarations
//! - `stmt`: blocks and control constructs
//! - `expr`: boolean and arithmetic expressions
//!
//! Expression rules return the [`Size`](kiss_asm::Size) of the value they
//! leave in `D0`.

mod decl;
mod expr;
mod stmt;
