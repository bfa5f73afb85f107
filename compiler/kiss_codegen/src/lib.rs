//! Code generation for the KISS compiler.
//!
//! Grammar rules call into [`CodeGen`] as they recognize constructs; there is
//! no intermediate representation. The generator owns two things only: the
//! label counter and the [`Output`] sink. It never decides control flow.
//!
//! # Sizes
//!
//! Loads always happen at a variable's declared size. Conversions are emitted
//! only where two values of different sizes meet (a combine) or where a value
//! is stored into a variable of another size. The rules for each case live in
//! [`coerce`] as explicit size-pair tables.

pub mod coerce;
mod context;
mod output;

pub use context::{procedure_label, CodeGen};
pub use output::Output;
