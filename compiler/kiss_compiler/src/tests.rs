#![allow(clippy::unwrap_used)]

use kiss_asm::Size;
use kiss_diagnostic::{ErrorKind, Location};
use kiss_lexer::{ReadSource, StrSource};
use pretty_assertions::assert_eq;

use crate::{compile_str, BufferOutput, CompileConfig, Compiler};

fn config() -> CompileConfig {
    CompileConfig {
        source_name: "test.kiss".to_string(),
        predeclared: Vec::new(),
    }
}

#[test]
fn predeclared_variables_get_storage_first() {
    let config = config()
        .with_variable("a", Size::Word)
        .with_variable("b", Size::Word);
    let output = compile_str("a=5\nb=a+1\n.", &config);
    assert!(output.success, "{}", output.text);
    assert_eq!(
        output.text.lines().collect::<Vec<_>>(),
        [
            "A:\tDC.W\t0",
            "B:\tDC.W\t0",
            "MAIN:",
            "\tMOVE.B\t#5,D0",
            "\tEXT.W\tD0",
            "\tMOVE.W\tD0,A(PC)",
            "\tMOVE.W\tA(PC),D0",
            "\tMOVE.W\tD0,-(SP)",
            "\tMOVE.B\t#1,D0",
            "\tMOVE.W\t(SP)+,D7",
            "\tEXT.W\tD0",
            "\tADD.W\tD7,D0",
            "\tMOVE.W\tD0,B(PC)",
            "\tRTS",
        ]
    );
}

#[test]
fn success_never_halts() {
    let mut out = BufferOutput::new();
    Compiler::new(config())
        .compile(StrSource::new("WORD x\nx = 1."), &mut out)
        .unwrap();
    assert_eq!(out.halts(), 0);
    assert!(out.lines().any(|line| line == "MAIN:"));
}

#[test]
fn errors_are_written_then_halt_once() {
    let mut out = BufferOutput::new();
    let err = Compiler::new(config())
        .compile(StrSource::new("BYTE a\nWORD a\nBEGIN END."), &mut out)
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::DuplicateIdentifier("A".into()));
    assert_eq!(err.location, Location::new(2, 6));
    assert_eq!(out.halts(), 1);
    assert_eq!(
        out.text(),
        "A:\tDC.B\t0\nerror[E2002]: Duplicate Identifier A\n  --> 2:6\n"
    );
}

#[test]
fn an_error_in_the_first_token_still_halts() {
    let output = compile_str("@", &config());
    assert!(!output.success);
    let err = output.error.unwrap();
    assert_eq!(err.kind, ErrorKind::UnrecognizedCharacter('@'));
    assert_eq!(err.location, Location::START);
    assert_eq!(output.text, "error[E0001]: Unrecognized Character '@'\n  --> 1:1\n");
}

#[test]
fn predeclared_names_clash_with_declarations() {
    let config = config().with_variable("x", Size::Byte);
    let err = compile_str("LONG x\nBEGIN END.", &config).error.unwrap();
    assert_eq!(err.kind, ErrorKind::DuplicateIdentifier("X".into()));
    assert_eq!(err.location, Location::new(1, 6));

    let config = config.with_variable("X", Size::Word);
    let err = compile_str(".", &config).error.unwrap();
    assert_eq!(err.kind, ErrorKind::DuplicateIdentifier("X".into()));
    assert_eq!(err.location, Location::START);
}

#[test]
fn symbol_table_resets_between_compilations() {
    let mut compiler = Compiler::new(config());
    let source = "WORD x\nPROCEDURE p BEGIN END\nx = 1.";

    compiler
        .compile(StrSource::new(source), &mut BufferOutput::new())
        .unwrap();
    assert_eq!(compiler.symbols().len(), 2);

    compiler
        .compile(StrSource::new(source), &mut BufferOutput::new())
        .unwrap();
    assert_eq!(compiler.symbols().len(), 2);

    compiler
        .compile(StrSource::new("BYTE y\nBEGIN END."), &mut BufferOutput::new())
        .unwrap();
    assert!(compiler.symbols().contains("Y"));
    assert!(!compiler.symbols().contains("X"));
}

#[test]
fn failed_compilation_leaves_no_symbols() {
    let mut compiler = Compiler::new(config());
    compiler
        .compile(StrSource::new("WORD x
x = 1."), &mut BufferOutput::new())
        .unwrap();
    assert!(compiler.symbols().contains("X"));

    compiler
        .compile(StrSource::new("WORD y
y = z."), &mut BufferOutput::new())
        .unwrap_err();
    assert!(compiler.symbols().is_empty());
}

#[test]
fn compiles_from_a_byte_stream() {
    let mut from_reader = BufferOutput::new();
    Compiler::new(config())
        .compile(ReadSource::new(&b"WORD x\nx = 2 * 3."[..]), &mut from_reader)
        .unwrap();

    let from_str = compile_str("WORD x\nx = 2 * 3.", &config());
    assert_eq!(from_reader.text(), from_str.text);
}

#[test]
fn default_config_has_no_predeclared_names() {
    let config = CompileConfig::default();
    assert_eq!(config.source_name, "input.kiss");
    assert!(config.predeclared.is_empty());
    assert_eq!(Compiler::new(config.clone()).config(), &config);
}
