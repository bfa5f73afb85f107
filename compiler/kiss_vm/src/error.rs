//! Assembly and run-time errors.

use kiss_asm::AsmParseError;
use thiserror::Error;

pub type VmResult<T> = Result<T, VmError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VmError {
    // Assembly
    #[error("line {line}: {source}")]
    Parse { line: usize, source: AsmParseError },
    #[error("label `{0}` is defined twice")]
    DuplicateLabel(String),
    #[error("variable `{0}` is defined twice")]
    DuplicateVariable(String),
    #[error("jump to undefined label `{0}`")]
    UndefinedLabel(String),
    #[error("access to undefined variable `{0}`")]
    UndefinedVariable(String),
    #[error("no `{0}` entry label")]
    MissingEntry(&'static str),

    // Execution
    #[error("stack underflow at instruction {pc}")]
    StackUnderflow { pc: usize },
    #[error("division by zero at instruction {pc}")]
    DivideByZero { pc: usize },
    #[error("READ with no input left")]
    InputExhausted,
    #[error("program ran past its last instruction")]
    RanOffEnd,
    #[error("no halt after {0} steps")]
    StepLimit(u64),
}
