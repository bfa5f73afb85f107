//! Error reporting for the KISS compiler.
//!
//! Every error the compiler can raise is fatal: the first one detected stops
//! compilation. This crate owns the taxonomy shared by the scanner, parser,
//! code generator and driver:
//!
//! - [`ErrorCode`]: stable, searchable identifiers (`E1001`, ...)
//! - [`ErrorKind`]: what went wrong, with the offending name or symbol
//! - [`CompileError`]: an [`ErrorKind`] anchored at a source [`Location`]
//! - [`ErrorDocs`]: long-form explanations for `kissc explain`

mod compile_error;
mod error_code;
pub mod errors;

pub use compile_error::{CompileError, CompileResult, ErrorKind, Location};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
