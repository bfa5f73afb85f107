//! The code generator: instruction emission plus the label counter.

use kiss_asm::{routine, Cond, Instr, Line, Reg, Size, ENTRY_LABEL};
use tracing::trace;

use crate::coerce::{self, Via};
use crate::Output;

/// Code label of a user procedure.
///
/// Procedure names share the identifier space with variables but not with
/// generated labels or library routines; the prefix keeps `PROCEDURE L0` or
/// `PROCEDURE READ` from colliding with either.
pub fn procedure_label(name: &str) -> String {
    format!("_{name}")
}

/// Emits program text to an [`Output`].
///
/// Every combine method expects the left operand on the stack (pushed at its
/// own size) and the right operand in `D0`, and leaves the result in `D0`.
pub struct CodeGen<O> {
    out: O,
    label_counter: u32,
}

impl<O: Output> CodeGen<O> {
    pub fn new(out: O) -> Self {
        CodeGen {
            out,
            label_counter: 0,
        }
    }

    /// Give back the output sink.
    pub fn into_output(self) -> O {
        self.out
    }

    /// Number of labels handed out so far.
    pub fn labels_allocated(&self) -> u32 {
        self.label_counter
    }

    /// Allocate a fresh label: `L0`, `L1`, ...
    ///
    /// Labels are allocated when a construct is entered and may be posted
    /// much later; a label is never handed out twice.
    pub fn new_label(&mut self) -> String {
        let n = self.label_counter;
        self.label_counter += 1;
        format!("L{n}")
    }

    /// Write `label:` on its own line.
    pub fn post_label(&mut self, label: &str) {
        self.line(&Line::Label(label.to_owned()));
    }

    /// Storage for a variable with its initial value.
    pub fn data(&mut self, name: &str, size: Size, init: i64) {
        self.line(&Line::Data {
            name: name.to_owned(),
            size,
            init: size.wrap(init),
        });
    }

    pub fn emit(&mut self, instr: Instr) {
        self.line(&Line::Instr(instr));
    }

    fn line(&mut self, line: &Line) {
        let text = line.to_string();
        trace!(line = %text.trim_start(), "emit");
        self.out.write_line(&text);
    }

    // Program structure

    pub fn main_entry(&mut self) {
        self.post_label(ENTRY_LABEL);
    }

    pub fn procedure_entry(&mut self, name: &str) {
        self.post_label(&procedure_label(name));
    }

    pub fn ret(&mut self) {
        self.emit(Instr::Return);
    }

    pub fn call(&mut self, procedure: &str) {
        self.emit(Instr::Call(procedure_label(procedure)));
    }

    // Loads and stores

    /// Load a constant at the narrowest size that holds it.
    pub fn load_const(&mut self, value: i64) -> Size {
        let size = Size::of_constant(value);
        self.emit(Instr::LoadConst {
            size,
            value: size.wrap(value),
        });
        size
    }

    /// Load a variable at its declared size. Never converts.
    pub fn load_var(&mut self, name: &str, size: Size) -> Size {
        self.emit(Instr::Load {
            size,
            name: name.to_owned(),
        });
        size
    }

    /// Store `D0`, holding a value of size `from`, into a variable of size `to`.
    pub fn store(&mut self, name: &str, from: Size, to: Size) {
        self.convert(Reg::D0, from, to);
        self.emit(Instr::Store {
            size: to,
            name: name.to_owned(),
        });
    }

    /// Emit the table conversion from `from` to `to` on `reg`, if any.
    pub fn convert(&mut self, reg: Reg, from: Size, to: Size) {
        if let Some(conversion) = coerce::conversion(from, to) {
            self.emit(Instr::Convert { conversion, reg });
        }
    }

    // Stack

    pub fn push(&mut self, size: Size) {
        self.emit(Instr::Push { size });
    }

    /// Pop the top of stack into `D7`.
    pub fn pop(&mut self, size: Size) {
        self.emit(Instr::Pop { size });
    }

    /// Pop the left operand into `D7` and bring both operands to `size`.
    fn operands_to(&mut self, left: Size, right: Size, size: Size) {
        self.pop(left);
        self.convert(Reg::D7, left, size);
        self.convert(Reg::D0, right, size);
    }

    // Unary

    pub fn negate(&mut self, size: Size) {
        self.emit(Instr::Neg { size });
    }

    /// Bitwise complement; turns the true flag (all ones) into false (zero).
    pub fn not(&mut self, size: Size) {
        self.emit(Instr::Not { size });
    }

    // Combines

    pub fn add(&mut self, left: Size, right: Size) -> Size {
        let size = coerce::additive(left, right);
        self.operands_to(left, right, size);
        self.emit(Instr::Add { size });
        size
    }

    /// `left - right`. The machine subtracts `D0 - D7`, so negate after.
    pub fn subtract(&mut self, left: Size, right: Size) -> Size {
        let size = coerce::additive(left, right);
        self.operands_to(left, right, size);
        self.emit(Instr::Sub { size });
        self.emit(Instr::Neg { size });
        size
    }

    pub fn and(&mut self, left: Size, right: Size) -> Size {
        let size = coerce::additive(left, right);
        self.operands_to(left, right, size);
        self.emit(Instr::And { size });
        size
    }

    pub fn or(&mut self, left: Size, right: Size) -> Size {
        let size = coerce::additive(left, right);
        self.operands_to(left, right, size);
        self.emit(Instr::Or { size });
        size
    }

    pub fn xor(&mut self, left: Size, right: Size) -> Size {
        let size = coerce::additive(left, right);
        self.operands_to(left, right, size);
        self.emit(Instr::Xor { size });
        size
    }

    pub fn multiply(&mut self, left: Size, right: Size) -> Size {
        let plan = coerce::multiply(left, right);
        self.operands_to(left, right, plan.operands);
        match plan.via {
            Via::Hardware => self.emit(Instr::Mul),
            Via::Library => self.emit(Instr::Call(routine::MUL32.to_owned())),
        }
        plan.result
    }

    /// `left / right`, truncating toward zero.
    pub fn divide(&mut self, left: Size, right: Size) -> Size {
        let plan = coerce::divide(left, right);
        self.pop(left);
        self.convert(Reg::D7, left, Size::Long);
        self.convert(Reg::D0, right, plan.divisor);
        match plan.via {
            Via::Hardware => {
                self.emit(Instr::Div);
                self.emit(Instr::MoveSecondary {
                    size: plan.quotient,
                });
            }
            Via::Library => {
                self.emit(Instr::Call(routine::DIV32.to_owned()));
                self.convert(Reg::D0, Size::Long, plan.quotient);
            }
        }
        plan.quotient
    }

    /// Compare `left` with `right` and leave a byte flag: `-1` if `cond`
    /// holds, `0` otherwise.
    pub fn compare(&mut self, cond: Cond, left: Size, right: Size) -> Size {
        let size = coerce::additive(left, right);
        self.operands_to(left, right, size);
        self.emit(Instr::Compare { size });
        self.emit(Instr::Set(cond));
        Size::Byte
    }

    // Branches

    pub fn test(&mut self, size: Size) {
        self.emit(Instr::Test { size });
    }

    pub fn branch(&mut self, label: &str) {
        self.emit(Instr::Branch(label.to_owned()));
    }

    pub fn branch_if(&mut self, cond: Cond, label: &str) {
        self.emit(Instr::BranchIf(cond, label.to_owned()));
    }

    /// Test the flag in `D0` and branch if it is false.
    pub fn branch_if_false(&mut self, size: Size, label: &str) {
        self.test(size);
        self.branch_if(Cond::Eq, label);
    }

    // Counted loops

    pub fn increment(&mut self, size: Size) {
        self.emit(Instr::AddQuick { size, value: 1 });
    }

    pub fn decrement(&mut self, size: Size) {
        self.emit(Instr::SubQuick { size, value: 1 });
    }

    /// Compare `D0` with the loop limit on top of the stack.
    pub fn compare_top(&mut self, size: Size) {
        self.emit(Instr::CompareTop { size });
    }

    /// Count down the top of stack and loop back while it is non-zero.
    pub fn count_down(&mut self, size: Size, label: &str) {
        self.emit(Instr::DecBranchNonZero {
            size,
            label: label.to_owned(),
        });
    }

    // Input / output

    /// Read one value into `D0`. The library always delivers a long.
    pub fn read(&mut self) -> Size {
        self.emit(Instr::Call(routine::READ.to_owned()));
        Size::Long
    }

    /// Write the value in `D0`, widened or narrowed to long.
    pub fn write(&mut self, size: Size) {
        self.convert(Reg::D0, size, Size::Long);
        self.emit(Instr::Call(routine::WRITE.to_owned()));
    }
}

#[cfg(test)]
mod tests;
