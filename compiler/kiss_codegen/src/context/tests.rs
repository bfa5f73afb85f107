#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::*;

#[derive(Default)]
struct Recorder {
    lines: Vec<String>,
    halted: usize,
}

impl Output for Recorder {
    fn write(&mut self, text: &str) {
        match self.lines.last_mut() {
            Some(last) => last.push_str(text),
            None => self.lines.push(text.to_owned()),
        }
    }

    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_owned());
    }

    fn halt(&mut self) {
        self.halted += 1;
    }
}

fn run<T>(f: impl FnOnce(&mut CodeGen<&mut Recorder>) -> T) -> (T, Vec<String>) {
    let mut out = Recorder::default();
    let result = f(&mut CodeGen::new(&mut out));
    (result, out.lines)
}

fn emitted(f: impl FnOnce(&mut CodeGen<&mut Recorder>)) -> Vec<String> {
    run(f).1
}

#[test]
fn labels_are_fresh_and_sequential() {
    let mut out = Recorder::default();
    let mut cg = CodeGen::new(&mut out);
    assert_eq!(cg.new_label(), "L0");
    assert_eq!(cg.new_label(), "L1");
    assert_eq!(cg.new_label(), "L2");
    assert_eq!(cg.labels_allocated(), 3);
}

#[test]
fn store_emits_the_table_conversion_for_every_size_pair() {
    let expected: [[&[&str]; 3]; 3] = [
        [&[], &["\tEXT.W\tD0"], &["\tEXTB.L\tD0"]],
        [&["\tTRUNC.B\tD0"], &[], &["\tEXT.L\tD0"]],
        [&["\tTRUNC.B\tD0"], &["\tTRUNC.W\tD0"], &[]],
    ];
    for from in Size::ALL {
        for to in Size::ALL {
            let lines = emitted(|cg| cg.store("X", from, to));
            let (store, conversions) = lines.split_last().unwrap();
            assert_eq!(store, &format!("\tMOVE.{to}\tD0,X(PC)"));
            assert_eq!(conversions, expected[from.index()][to.index()], "{from} -> {to}");
        }
    }
}

#[test]
fn constants_load_at_their_narrowest_size() {
    assert_eq!(
        emitted(|cg| {
            cg.load_const(5);
            cg.load_const(-200);
            cg.load_const(100_000);
        }),
        ["\tMOVE.B\t#5,D0", "\tMOVE.W\t#-200,D0", "\tMOVE.L\t#100000,D0"]
    );
}

#[test]
fn add_unifies_to_the_wider_operand() {
    let (size, lines) = run(|cg| cg.add(Size::Word, Size::Byte));
    assert_eq!(size, Size::Word);
    assert_eq!(lines, ["\tMOVE.W\t(SP)+,D7", "\tEXT.W\tD0", "\tADD.W\tD7,D0"]);
}

#[test]
fn subtract_negates_the_reversed_difference() {
    assert_eq!(
        emitted(|cg| {
            cg.subtract(Size::Long, Size::Long);
        }),
        ["\tMOVE.L\t(SP)+,D7", "\tSUB.L\tD7,D0", "\tNEG.L\tD0"]
    );
}

#[test]
fn byte_multiply_uses_hardware_and_yields_word() {
    let (size, lines) = run(|cg| cg.multiply(Size::Byte, Size::Byte));
    assert_eq!(size, Size::Word);
    assert_eq!(
        lines,
        [
            "\tMOVE.B\t(SP)+,D7",
            "\tEXT.W\tD7",
            "\tEXT.W\tD0",
            "\tMULS\tD7,D0",
        ]
    );
}

#[test]
fn long_multiply_calls_the_library() {
    let (size, lines) = run(|cg| cg.multiply(Size::Word, Size::Long));
    assert_eq!(size, Size::Long);
    assert_eq!(lines, ["\tMOVE.W\t(SP)+,D7", "\tEXT.L\tD7", "\tJSR\tMUL32"]);
}

#[test]
fn word_divide_keeps_the_dividend_size() {
    let (size, lines) = run(|cg| cg.divide(Size::Word, Size::Byte));
    assert_eq!(size, Size::Word);
    assert_eq!(
        lines,
        [
            "\tMOVE.W\t(SP)+,D7",
            "\tEXT.L\tD7",
            "\tEXT.W\tD0",
            "\tDIVS\tD0,D7",
            "\tMOVE.W\tD7,D0",
        ]
    );
}

#[test]
fn long_divisor_keeps_every_bit() {
    let (size, lines) = run(|cg| cg.divide(Size::Word, Size::Long));
    assert_eq!(size, Size::Word);
    assert_eq!(
        lines,
        [
            "\tMOVE.W\t(SP)+,D7",
            "\tEXT.L\tD7",
            "\tJSR\tDIV32",
            "\tTRUNC.W\tD0",
        ]
    );
}

#[test]
fn long_divide_calls_the_library() {
    let (size, lines) = run(|cg| cg.divide(Size::Long, Size::Byte));
    assert_eq!(size, Size::Long);
    assert_eq!(lines, ["\tMOVE.L\t(SP)+,D7", "\tEXTB.L\tD0", "\tJSR\tDIV32"]);
}

#[test]
fn compare_leaves_a_byte_flag() {
    let (size, lines) = run(|cg| cg.compare(Cond::Lt, Size::Byte, Size::Byte));
    assert_eq!(size, Size::Byte);
    assert_eq!(lines, ["\tMOVE.B\t(SP)+,D7", "\tCMP.B\tD0,D7", "\tSLT\tD0"]);
}

#[test]
fn procedures_get_prefixed_labels() {
    assert_eq!(
        emitted(|cg| {
            cg.procedure_entry("READ");
            cg.ret();
            cg.main_entry();
            cg.call("READ");
            cg.read();
        }),
        ["_READ:", "\tRTS", "MAIN:", "\tJSR\t_READ", "\tJSR\tREAD"]
    );
}

#[test]
fn data_lines_wrap_initial_values_to_size() {
    assert_eq!(
        emitted(|cg| {
            cg.data("A", Size::Byte, 300);
            cg.data("B", Size::Word, -3);
        }),
        ["A:\tDC.B\t44", "B:\tDC.W\t-3"]
    );
}

#[test]
fn write_widens_to_long() {
    assert_eq!(
        emitted(|cg| cg.write(Size::Byte)),
        ["\tEXTB.L\tD0", "\tJSR\tWRITE"]
    );
}

#[test]
fn output_through_a_mutable_reference_reaches_the_sink() {
    fn report(mut sink: impl Output) {
        sink.write("error");
        sink.write(": x");
        sink.halt();
    }

    let mut out = Recorder::default();
    report(&mut out);
    assert_eq!(out.lines, ["error: x"]);
    assert_eq!(out.halted, 1);
}
