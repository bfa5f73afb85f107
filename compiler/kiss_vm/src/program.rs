//! Assembling program text.

use kiss_asm::{routine, Instr, Line, Size, ENTRY_LABEL};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{VmError, VmResult};

/// Storage declared by a `DC` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Variable {
    pub name: String,
    pub size: Size,
    pub init: i64,
}

/// An assembled program: instructions in order, labels resolved to
/// instruction indices, and the variables it declares.
///
/// Data and code labels live in separate namespaces, so a variable and a
/// label may share a name.
#[derive(Clone, Debug)]
pub struct Program {
    pub(crate) instrs: Vec<Instr>,
    pub(crate) labels: FxHashMap<String, usize>,
    pub(crate) variables: Vec<Variable>,
    pub(crate) slots: FxHashMap<String, usize>,
    pub(crate) entry: usize,
}

impl Program {
    /// Parse and link `text`.
    ///
    /// Blank lines are skipped. Fails on unparsable lines, duplicate labels
    /// or variables, references to labels or variables that are never
    /// defined, and a missing entry label.
    pub fn assemble(text: &str) -> VmResult<Program> {
        let mut instrs = Vec::new();
        let mut labels = FxHashMap::default();
        let mut variables = Vec::new();
        let mut slots = FxHashMap::default();

        for (index, raw) in text.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }
            let line = raw.parse::<Line>().map_err(|source| VmError::Parse {
                line: index + 1,
                source,
            })?;
            match line {
                Line::Label(name) => {
                    if labels.insert(name.clone(), instrs.len()).is_some() {
                        return Err(VmError::DuplicateLabel(name));
                    }
                }
                Line::Data { name, size, init } => {
                    if slots.insert(name.clone(), variables.len()).is_some() {
                        return Err(VmError::DuplicateVariable(name));
                    }
                    variables.push(Variable { name, size, init });
                }
                Line::Instr(instr) => instrs.push(instr),
            }
        }

        let entry = *labels
            .get(ENTRY_LABEL)
            .ok_or(VmError::MissingEntry(ENTRY_LABEL))?;
        let program = Program {
            instrs,
            labels,
            variables,
            slots,
            entry,
        };
        program.link()?;
        debug!(
            instrs = program.instrs.len(),
            labels = program.labels.len(),
            variables = program.variables.len(),
            "assembled"
        );
        Ok(program)
    }

    /// Check every jump, call and variable access has somewhere to go.
    fn link(&self) -> VmResult<()> {
        for instr in &self.instrs {
            if let Some(label) = instr.branch_target() {
                if !self.labels.contains_key(label) {
                    return Err(VmError::UndefinedLabel(label.to_owned()));
                }
            }
            match instr {
                Instr::Call(name) if !self.labels.contains_key(name) && !is_routine(name) => {
                    return Err(VmError::UndefinedLabel(name.clone()));
                }
                Instr::Load { name, .. } | Instr::Store { name, .. }
                    if !self.slots.contains_key(name) =>
                {
                    return Err(VmError::UndefinedVariable(name.clone()));
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.instrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instrs.is_empty()
    }

    /// Declared variables with their sizes and initial values, in order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, Size, i64)> {
        self.variables
            .iter()
            .map(|var| (var.name.as_str(), var.size, var.init))
    }
}

pub(crate) fn is_routine(name: &str) -> bool {
    [routine::MUL32, routine::DIV32, routine::READ, routine::WRITE].contains(&name)
}

#[cfg(test)]
mod tests;
