//! Every error stops compilation at the offending token, is written once
//! and halts once.

#![allow(clippy::unwrap_used)]

use kiss_compiler::{BufferOutput, CompileConfig, Compiler};
use kiss_diagnostic::{CompileError, ErrorCode, ErrorKind, Location};
use kiss_lexer::StrSource;
use pretty_assertions::assert_eq;

fn fail(source: &str) -> (CompileError, BufferOutput) {
    let mut out = BufferOutput::new();
    let err = Compiler::new(CompileConfig::default())
        .compile(StrSource::new(source), &mut out)
        .unwrap_err();
    assert_eq!(out.halts(), 1, "{}", out.text());
    (err, out)
}

fn check(source: &str, kind: ErrorKind, line: u32, column: u32) {
    let (err, out) = fail(source);
    assert_eq!((err.kind.clone(), err.location), (kind, Location::new(line, column)));
    let rendered: Vec<_> = out.lines().rev().take(2).collect();
    assert_eq!(
        rendered,
        [
            format!("  --> {line}:{column}").as_str(),
            format!("error[{}]: {}", err.code(), err.kind).as_str(),
        ]
    );
}

#[test]
fn duplicate_declaration_emits_nothing_for_the_second() {
    let (err, out) = fail("BYTE a\nWORD a\nBEGIN END.");
    assert_eq!(err.kind, ErrorKind::DuplicateIdentifier("A".into()));
    assert_eq!(err.code(), ErrorCode::E2002);
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        ["A:\tDC.B\t0", "error[E2002]: Duplicate Identifier A", "  --> 2:6"]
    );
}

#[test]
fn duplicate_regardless_of_kind() {
    check(
        "WORD p\nPROCEDURE p BEGIN END\n.",
        ErrorKind::DuplicateIdentifier("P".into()),
        2,
        11,
    );
    check(
        "PROCEDURE p BEGIN END\nLONG p\n.",
        ErrorKind::DuplicateIdentifier("P".into()),
        2,
        6,
    );
}

#[test]
fn break_at_top_level() {
    check("BREAK.", ErrorKind::NoEnclosingLoop, 1, 1);
    check(
        "WORD x\nIF x BREAK ENDIF.",
        ErrorKind::NoEnclosingLoop,
        2,
        6,
    );
}

#[test]
fn undefined_identifiers() {
    check("x = 1.", ErrorKind::UndefinedIdentifier("X".into()), 1, 1);
    check(
        "WORD x\nx = y + 1.",
        ErrorKind::UndefinedIdentifier("Y".into()),
        2,
        5,
    );
    check(
        "WORD x\nREAD(x, z).",
        ErrorKind::UndefinedIdentifier("Z".into()),
        2,
        9,
    );
}

#[test]
fn procedures_are_not_variables() {
    check(
        "PROCEDURE p BEGIN END\nWORD x\nx = p.",
        ErrorKind::NotAVariable("P".into()),
        3,
        5,
    );
    check(
        "PROCEDURE p BEGIN END\nFOR p = 1 TO 2 END.",
        ErrorKind::NotAVariable("P".into()),
        2,
        5,
    );
}

#[test]
fn syntax_errors() {
    check("WORD x\nx = 1 + .", ErrorKind::expected("Factor"), 2, 9);
    check("WORD x\nx = (1 + 2.", ErrorKind::expected(")"), 2, 11);
    check("WORD x\nWHILE x x = 0.", ErrorKind::expected("END"), 2, 14);
    check("WORD x\nx = 1", ErrorKind::expected("."), 2, 6);
    check("WORD = 1.", ErrorKind::expected("Identifier"), 1, 6);
    check("{ never closed", ErrorKind::expected("}"), 1, 1);
}

#[test]
fn unrecognized_input() {
    check(
        "WORD x\nx = 1 @ 2.",
        ErrorKind::UnrecognizedCharacter('@'),
        2,
        7,
    );
    check(
        "WORD x\nBEGIN x = 1 END UNTIL.",
        ErrorKind::UnrecognizedKeyword("UNTIL".into()),
        2,
        17,
    );
}

#[test]
fn code_before_the_error_stays_written() {
    let (_, out) = fail("WORD x\nx = 1\nx = y.");
    let lines: Vec<_> = out.lines().collect();
    assert!(lines.contains(&"\tMOVE.W\tD0,X(PC)"), "{lines:#?}");
    assert!(!lines.contains(&"\tRTS"), "{lines:#?}");
}
