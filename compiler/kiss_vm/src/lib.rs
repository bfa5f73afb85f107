//! Simulator for the KISS abstract machine.
//!
//! Takes the program text the compiler emits, assembles it into a
//! [`Program`] (labels resolved, variables laid out), and runs it on a
//! [`Machine`]. Used to check emitted code by executing it:
//!
//! ```text
//! text ──Program::assemble──▶ Program ──Machine::run──▶ Outcome
//!                                 ▲
//!                             VmConfig (input values, step limit)
//! ```
//!
//! # Machine model
//!
//! - `D0`, `D7`: registers. An operation of size `s` leaves its result
//!   sign-extended from `s` bits.
//! - a value stack for pushed operands, loop limits and counts
//! - a separate return stack for `JSR`/`RTS`
//! - flags: the ordering recorded by the last `CMP` or `TST`
//! - named variables, each with the size of its `DC` line
//!
//! `RTS` with an empty return stack halts.

mod config;
mod error;
mod machine;
mod program;

pub use config::VmConfig;
pub use error::{VmError, VmResult};
pub use machine::{Machine, Outcome};
pub use program::Program;

/// Assemble `text` and run it from its entry label.
pub fn run(text: &str, config: VmConfig) -> VmResult<Outcome> {
    let program = Program::assemble(text)?;
    Machine::new(&program, config).run()
}
