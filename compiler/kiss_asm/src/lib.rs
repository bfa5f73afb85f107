//! The KISS abstract machine's instruction set.
//!
//! The compiler targets a minimal stack-plus-accumulator machine with a
//! 68000 flavour: an accumulator `D0`, a secondary register `D7`, a value
//! stack addressed as `(SP)`, condition flags, and named variables of three
//! signed sizes. Programs are plain text, one line per item:
//!
//! ```text
//! X:      DC.W    0           variable storage
//! MAIN:                       label
//!         MOVE.B  #5,D0       instruction (tab + opcode + operands)
//!         MOVE.W  D0,X(PC)
//!         RTS
//! ```
//!
//! [`Line`] renders to exactly that text via `Display` and parses back via
//! `FromStr`, so the code generator and the simulator agree on one format.

mod instr;
mod parse;
mod size;

pub use instr::{Cond, Conversion, Instr, Line, Reg};
pub use parse::AsmParseError;
pub use size::Size;

/// Label of the main program's entry point.
pub const ENTRY_LABEL: &str = "MAIN";

/// Library routines reached through `JSR`.
pub mod routine {
    /// `D0 := D7 * D0` on longs.
    pub const MUL32: &str = "MUL32";
    /// `D0 := D7 / D0` on longs.
    pub const DIV32: &str = "DIV32";
    /// `D0 :=` next input value, as a long.
    pub const READ: &str = "READ";
    /// Output `D0` as a long.
    pub const WRITE: &str = "WRITE";
}
