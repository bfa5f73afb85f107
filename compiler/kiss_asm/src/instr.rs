//! Instructions, program lines, and their text form.

use std::cmp::Ordering;
use std::fmt;

use crate::Size;

/// Machine registers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Reg {
    /// Accumulator: every expression leaves its value here.
    D0,
    /// Secondary: the left operand popped for a combine.
    D7,
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Reg::D0 => "D0",
            Reg::D7 => "D7",
        })
    }
}

/// Condition tested against the flags of the last compare or test.
///
/// Flags record the sign of `destination - source`, so after `CMP D0,D7`
/// (left in `D7`, right in `D0`) `LT` means "left < right".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cond {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl Cond {
    pub const ALL: [Cond; 6] = [Cond::Eq, Cond::Ne, Cond::Lt, Cond::Gt, Cond::Le, Cond::Ge];

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Cond::Eq => "EQ",
            Cond::Ne => "NE",
            Cond::Lt => "LT",
            Cond::Gt => "GT",
            Cond::Le => "LE",
            Cond::Ge => "GE",
        }
    }

    pub fn from_mnemonic(text: &str) -> Option<Cond> {
        Cond::ALL.into_iter().find(|c| c.mnemonic() == text)
    }

    /// Whether the condition holds for flags recording `ordering`.
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Cond::Eq => ordering == Ordering::Equal,
            Cond::Ne => ordering != Ordering::Equal,
            Cond::Lt => ordering == Ordering::Less,
            Cond::Gt => ordering == Ordering::Greater,
            Cond::Le => ordering != Ordering::Greater,
            Cond::Ge => ordering != Ordering::Less,
        }
    }
}

/// Size conversion applied to a register in place.
///
/// Widening is a single sign extension, narrowing a single truncation, so
/// any `(from, to)` pair needs at most one of these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// `EXT.W`: byte to word.
    ExtendByteToWord,
    /// `EXT.L`: word to long.
    ExtendWordToLong,
    /// `EXTB.L`: byte to long.
    ExtendByteToLong,
    /// `TRUNC.B`: word or long to byte.
    TruncateToByte,
    /// `TRUNC.W`: long to word.
    TruncateToWord,
}

impl Conversion {
    pub const ALL: [Conversion; 5] = [
        Conversion::ExtendByteToWord,
        Conversion::ExtendWordToLong,
        Conversion::ExtendByteToLong,
        Conversion::TruncateToByte,
        Conversion::TruncateToWord,
    ];

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Conversion::ExtendByteToWord => "EXT.W",
            Conversion::ExtendWordToLong => "EXT.L",
            Conversion::ExtendByteToLong => "EXTB.L",
            Conversion::TruncateToByte => "TRUNC.B",
            Conversion::TruncateToWord => "TRUNC.W",
        }
    }

    pub fn from_mnemonic(text: &str) -> Option<Conversion> {
        Conversion::ALL.into_iter().find(|c| c.mnemonic() == text)
    }

    /// Size of the register contents after the conversion.
    pub const fn result_size(self) -> Size {
        match self {
            Conversion::ExtendByteToWord | Conversion::TruncateToWord => Size::Word,
            Conversion::ExtendWordToLong | Conversion::ExtendByteToLong => Size::Long,
            Conversion::TruncateToByte => Size::Byte,
        }
    }

    /// Apply the conversion to a register value.
    ///
    /// Extensions read only the low bits of the source width; truncations
    /// keep only the low bits of the target width.
    pub fn apply(self, value: i64) -> i64 {
        match self {
            Conversion::ExtendByteToWord
            | Conversion::ExtendByteToLong
            | Conversion::TruncateToByte => Size::Byte.wrap(value),
            Conversion::ExtendWordToLong | Conversion::TruncateToWord => Size::Word.wrap(value),
        }
    }
}

/// One machine instruction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Instr {
    /// `MOVE.s #n,D0`
    LoadConst { size: Size, value: i64 },
    /// `MOVE.s X(PC),D0`
    Load { size: Size, name: String },
    /// `MOVE.s D0,X(PC)`
    Store { size: Size, name: String },
    /// `MOVE.s D0,-(SP)`
    Push { size: Size },
    /// `MOVE.s (SP)+,D7`
    Pop { size: Size },
    /// `MOVE.s D7,D0`
    MoveSecondary { size: Size },
    /// `EXT.W D0`, `TRUNC.B D7`, ...
    Convert { conversion: Conversion, reg: Reg },
    /// `ADD.s D7,D0`: `D0 := D0 + D7`
    Add { size: Size },
    /// `SUB.s D7,D0`: `D0 := D0 - D7`
    Sub { size: Size },
    /// `NEG.s D0`
    Neg { size: Size },
    /// `MULS D7,D0`: word × word, long product in `D0`.
    Mul,
    /// `DIVS D0,D7`: long `D7` ÷ word `D0`, quotient in `D7`.
    Div,
    /// `AND.s D7,D0`
    And { size: Size },
    /// `OR.s D7,D0`
    Or { size: Size },
    /// `EOR.s D7,D0`
    Xor { size: Size },
    /// `NOT.s D0`: bitwise complement.
    Not { size: Size },
    /// `CMP.s D0,D7`: flags from `D7 - D0`.
    Compare { size: Size },
    /// `CMP.s (SP),D0`: flags from `D0 - top of stack`.
    CompareTop { size: Size },
    /// `TST.s D0`: flags from `D0 - 0`.
    Test { size: Size },
    /// `Scc D0`: `D0 := -1` if the condition holds, else `0`.
    Set(Cond),
    /// `ADDQ.s #n,D0`
    AddQuick { size: Size, value: u8 },
    /// `SUBQ.s #n,D0`
    SubQuick { size: Size, value: u8 },
    /// `BRA L`
    Branch(String),
    /// `Bcc L`
    BranchIf(Cond, String),
    /// `DBNZ.s (SP),L`: decrement the top of stack, branch if non-zero.
    DecBranchNonZero { size: Size, label: String },
    /// `JSR NAME`
    Call(String),
    /// `RTS`
    Return,
}

impl Instr {
    /// Label this instruction may transfer control to, if any.
    ///
    /// Calls are not branches: they may target library routines.
    pub fn branch_target(&self) -> Option<&str> {
        match self {
            Instr::Branch(label)
            | Instr::BranchIf(_, label)
            | Instr::DecBranchNonZero { label, .. } => Some(label),
            _ => None,
        }
    }
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::LoadConst { size, value } => write!(f, "MOVE.{size}\t#{value},D0"),
            Instr::Load { size, name } => write!(f, "MOVE.{size}\t{name}(PC),D0"),
            Instr::Store { size, name } => write!(f, "MOVE.{size}\tD0,{name}(PC)"),
            Instr::Push { size } => write!(f, "MOVE.{size}\tD0,-(SP)"),
            Instr::Pop { size } => write!(f, "MOVE.{size}\t(SP)+,D7"),
            Instr::MoveSecondary { size } => write!(f, "MOVE.{size}\tD7,D0"),
            Instr::Convert { conversion, reg } => write!(f, "{}\t{reg}", conversion.mnemonic()),
            Instr::Add { size } => write!(f, "ADD.{size}\tD7,D0"),
            Instr::Sub { size } => write!(f, "SUB.{size}\tD7,D0"),
            Instr::Neg { size } => write!(f, "NEG.{size}\tD0"),
            Instr::Mul => f.write_str("MULS\tD7,D0"),
            Instr::Div => f.write_str("DIVS\tD0,D7"),
            Instr::And { size } => write!(f, "AND.{size}\tD7,D0"),
            Instr::Or { size } => write!(f, "OR.{size}\tD7,D0"),
            Instr::Xor { size } => write!(f, "EOR.{size}\tD7,D0"),
            Instr::Not { size } => write!(f, "NOT.{size}\tD0"),
            Instr::Compare { size } => write!(f, "CMP.{size}\tD0,D7"),
            Instr::CompareTop { size } => write!(f, "CMP.{size}\t(SP),D0"),
            Instr::Test { size } => write!(f, "TST.{size}\tD0"),
            Instr::Set(cond) => write!(f, "S{}\tD0", cond.mnemonic()),
            Instr::AddQuick { size, value } => write!(f, "ADDQ.{size}\t#{value},D0"),
            Instr::SubQuick { size, value } => write!(f, "SUBQ.{size}\t#{value},D0"),
            Instr::Branch(label) => write!(f, "BRA\t{label}"),
            Instr::BranchIf(cond, label) => write!(f, "B{}\t{label}", cond.mnemonic()),
            Instr::DecBranchNonZero { size, label } => write!(f, "DBNZ.{size}\t(SP),{label}"),
            Instr::Call(name) => write!(f, "JSR\t{name}"),
            Instr::Return => f.write_str("RTS"),
        }
    }
}

/// One line of a program.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    /// `NAME:` on its own line.
    Label(String),
    /// `NAME:\tDC.s\tn`: storage for a variable with its initial value.
    Data { name: String, size: Size, init: i64 },
    /// Tab-indented instruction.
    Instr(Instr),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Label(name) => write!(f, "{name}:"),
            Line::Data { name, size, init } => write!(f, "{name}:\tDC.{size}\t{init}"),
            Line::Instr(instr) => write!(f, "\t{instr}"),
        }
    }
}

impl From<Instr> for Line {
    fn from(instr: Instr) -> Self {
        Line::Instr(instr)
    }
}
