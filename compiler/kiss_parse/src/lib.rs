//! Parser for the KISS language.
//!
//! Syntax-directed translation: each grammar rule is a method on [`Parser`]
//! that recognizes its construct and calls the code generator as it goes.
//! No tree is built. The parser keeps one token of lookahead and stops at the
//! first error, which propagates through `?` to the caller.
//!
//! ```text
//! Parser
//!   ├── Scanner      (kiss_lexer)     one token of lookahead
//!   ├── SymbolTable                   declared names and their kinds
//!   └── CodeGen      (kiss_codegen)   instruction text + label counter
//! ```

mod grammar;
mod parser;
mod stack;
mod symbols;

pub use parser::Parser;
pub use stack::ensure_sufficient_stack;
pub use symbols::{SymbolKind, SymbolTable};
