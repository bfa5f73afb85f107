//! KISS compiler driver.
//!
//! Runs one compilation: primes the scanner, installs any predeclared
//! variables, parses the program and emits its code to an injected
//! [`Output`]. IO-free; the CLI and the tests supply the source and the sink.
//!
//! # Usage
//!
//! ```
//! use kiss_compiler::{compile_str, CompileConfig};
//!
//! let output = compile_str("WORD X\nBEGIN X = 2 + 3 END.", &CompileConfig::default());
//! assert!(output.success);
//! assert!(output.text.contains("MAIN:"));
//! ```
//!
//! # Architecture
//!
//! ```text
//! kiss_diagnostic, kiss_asm, kiss_lexer, kiss_codegen, kiss_parse
//!                          ↓
//!                   kiss_compiler  ← this crate
//!                          ↓
//!                        kissc
//! ```
//!
//! # Errors
//!
//! The first error stops compilation. The driver writes it to the output as
//!
//! ```text
//! error[E2002]: Duplicate Identifier A
//!   --> 2:6
//! ```
//!
//! calls [`Output::halt`] once, and returns it.

mod config;
mod output;
mod pipeline;

pub use config::CompileConfig;
pub use kiss_codegen::Output;
pub use output::{BufferOutput, CompileOutput};
pub use pipeline::{compile_str, Compiler};

#[cfg(test)]
mod tests;
