//! Executing an assembled program.

use std::cmp::Ordering;

use kiss_asm::{routine, Cond, Instr, Reg, Size};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{Program, VmConfig, VmError, VmResult};

/// What a halted program left behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Values passed to `WRITE`, in order.
    pub output: Vec<i64>,
    /// `D0` at the final `RTS`.
    pub accumulator: i64,
    /// Final value of every variable.
    pub variables: FxHashMap<String, i64>,
    /// Instructions executed.
    pub steps: u64,
}

impl Outcome {
    pub fn variable(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }
}

/// One run of a [`Program`].
pub struct Machine<'p> {
    program: &'p Program,
    d0: i64,
    d7: i64,
    flags: Ordering,
    stack: Vec<i64>,
    returns: Vec<usize>,
    memory: Vec<i64>,
    input: std::vec::IntoIter<i64>,
    output: Vec<i64>,
    max_steps: u64,
}

impl<'p> Machine<'p> {
    pub fn new(program: &'p Program, config: VmConfig) -> Self {
        Machine {
            program,
            d0: 0,
            d7: 0,
            flags: Ordering::Equal,
            stack: Vec::new(),
            returns: Vec::new(),
            memory: program
                .variables
                .iter()
                .map(|var| var.size.wrap(var.init))
                .collect(),
            input: config.input.into_iter(),
            output: Vec::new(),
            max_steps: config.max_steps,
        }
    }

    /// Run from the entry label until the outermost `RTS`.
    pub fn run(mut self) -> VmResult<Outcome> {
        let program = self.program;
        let mut pc = program.entry;
        let mut steps = 0_u64;
        loop {
            if steps == self.max_steps {
                return Err(VmError::StepLimit(self.max_steps));
            }
            steps += 1;

            let instr = program.instrs.get(pc).ok_or(VmError::RanOffEnd)?;
            trace!(pc, %instr, d0 = self.d0, d7 = self.d7, "step");
            match self.step(pc, instr)? {
                Flow::Next => pc += 1,
                Flow::Jump(target) => pc = target,
                Flow::Halt => break,
            }
        }
        debug!(steps, output = ?self.output, "halted");

        let variables = program
            .variables
            .iter()
            .zip(&self.memory)
            .map(|(var, value)| (var.name.clone(), *value))
            .collect();
        Ok(Outcome {
            output: self.output,
            accumulator: self.d0,
            variables,
            steps,
        })
    }

    fn step(&mut self, pc: usize, instr: &Instr) -> VmResult<Flow> {
        match instr {
            Instr::LoadConst { size, value } => self.d0 = size.wrap(*value),
            Instr::Load { size, name } => self.d0 = size.wrap(self.memory[self.slot(name)?]),
            Instr::Store { size, name } => {
                let slot = self.slot(name)?;
                self.memory[slot] = size.wrap(self.d0);
            }
            Instr::Push { size } => self.stack.push(size.wrap(self.d0)),
            Instr::Pop { size } => {
                let value = self.stack.pop().ok_or(VmError::StackUnderflow { pc })?;
                self.d7 = size.wrap(value);
            }
            Instr::MoveSecondary { size } => self.d0 = size.wrap(self.d7),
            Instr::Convert { conversion, reg } => {
                let reg = match reg {
                    Reg::D0 => &mut self.d0,
                    Reg::D7 => &mut self.d7,
                };
                *reg = conversion.apply(*reg);
            }
            Instr::Add { size } => self.d0 = size.wrap(self.d0.wrapping_add(self.d7)),
            Instr::Sub { size } => self.d0 = size.wrap(self.d0.wrapping_sub(self.d7)),
            Instr::Neg { size } => self.d0 = size.wrap(self.d0.wrapping_neg()),
            Instr::Mul => {
                let product = Size::Word.wrap(self.d7) * Size::Word.wrap(self.d0);
                self.d0 = Size::Long.wrap(product);
            }
            Instr::Div => {
                let divisor = Size::Word.wrap(self.d0);
                if divisor == 0 {
                    return Err(VmError::DivideByZero { pc });
                }
                self.d7 = Size::Long.wrap(Size::Long.wrap(self.d7).wrapping_div(divisor));
            }
            Instr::And { size } => self.d0 = size.wrap(self.d0 & self.d7),
            Instr::Or { size } => self.d0 = size.wrap(self.d0 | self.d7),
            Instr::Xor { size } => self.d0 = size.wrap(self.d0 ^ self.d7),
            Instr::Not { size } => self.d0 = size.wrap(!self.d0),
            Instr::Compare { size } => self.flags = size.wrap(self.d7).cmp(&size.wrap(self.d0)),
            Instr::CompareTop { size } => {
                let top = *self.stack.last().ok_or(VmError::StackUnderflow { pc })?;
                self.flags = size.wrap(self.d0).cmp(&size.wrap(top));
            }
            Instr::Test { size } => self.flags = size.wrap(self.d0).cmp(&0),
            Instr::Set(cond) => self.d0 = if cond.holds(self.flags) { -1 } else { 0 },
            Instr::AddQuick { size, value } => {
                self.d0 = size.wrap(self.d0.wrapping_add(i64::from(*value)));
            }
            Instr::SubQuick { size, value } => {
                self.d0 = size.wrap(self.d0.wrapping_sub(i64::from(*value)));
            }
            Instr::Branch(label) => return Ok(Flow::Jump(self.label(label)?)),
            Instr::BranchIf(cond, label) => {
                if self.holds(*cond) {
                    return Ok(Flow::Jump(self.label(label)?));
                }
            }
            Instr::DecBranchNonZero { size, label } => {
                let top = self.stack.last_mut().ok_or(VmError::StackUnderflow { pc })?;
                *top = size.wrap(top.wrapping_sub(1));
                if *top != 0 {
                    return Ok(Flow::Jump(self.label(label)?));
                }
            }
            Instr::Call(name) => {
                if let Some(&target) = self.program.labels.get(name) {
                    self.returns.push(pc + 1);
                    return Ok(Flow::Jump(target));
                }
                self.library(pc, name)?;
            }
            Instr::Return => {
                return Ok(match self.returns.pop() {
                    Some(target) => Flow::Jump(target),
                    None => Flow::Halt,
                });
            }
        }
        Ok(Flow::Next)
    }

    /// The library routines reached through `JSR`.
    fn library(&mut self, pc: usize, name: &str) -> VmResult<()> {
        match name {
            routine::MUL32 => {
                let product = Size::Long.wrap(self.d7).wrapping_mul(Size::Long.wrap(self.d0));
                self.d0 = Size::Long.wrap(product);
            }
            routine::DIV32 => {
                let divisor = Size::Long.wrap(self.d0);
                if divisor == 0 {
                    return Err(VmError::DivideByZero { pc });
                }
                self.d0 = Size::Long.wrap(Size::Long.wrap(self.d7).wrapping_div(divisor));
            }
            routine::READ => {
                let value = self.input.next().ok_or(VmError::InputExhausted)?;
                self.d0 = Size::Long.wrap(value);
            }
            routine::WRITE => self.output.push(Size::Long.wrap(self.d0)),
            _ => return Err(VmError::UndefinedLabel(name.to_owned())),
        }
        Ok(())
    }

    #[inline]
    fn holds(&self, cond: Cond) -> bool {
        cond.holds(self.flags)
    }

    fn label(&self, name: &str) -> VmResult<usize> {
        self.program
            .labels
            .get(name)
            .copied()
            .ok_or_else(|| VmError::UndefinedLabel(name.to_owned()))
    }

    fn slot(&self, name: &str) -> VmResult<usize> {
        self.program
            .slots
            .get(name)
            .copied()
            .ok_or_else(|| VmError::UndefinedVariable(name.to_owned()))
    }
}

enum Flow {
    Next,
    Jump(usize),
    Halt,
}
