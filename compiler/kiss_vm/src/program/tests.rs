#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn assembles_labels_data_and_instructions() {
    let program = Program::assemble("X:\tDC.W\t7\n\nMAIN:\n\tMOVE.W\tX(PC),D0\n\tRTS\n").unwrap();
    assert_eq!(program.len(), 2);
    assert_eq!(program.entry, 0);
    assert_eq!(program.variables().collect::<Vec<_>>(), [("X", Size::Word, 7)]);
}

#[test]
fn data_and_code_names_may_coincide() {
    assert!(Program::assemble("L0:\tDC.B\t0\nMAIN:\nL0:\n\tBRA\tL0\n").is_ok());
}

#[test]
fn reports_the_failing_line() {
    let err = Program::assemble("MAIN:\n\tRTS\n\tBOGUS.W\tD0\n").unwrap_err();
    assert_eq!(
        err,
        VmError::Parse {
            line: 3,
            source: kiss_asm::AsmParseError::UnknownOpcode("BOGUS.W".into()),
        }
    );
}

#[test]
fn rejects_duplicates() {
    assert_eq!(
        Program::assemble("MAIN:\nMAIN:\n\tRTS").unwrap_err(),
        VmError::DuplicateLabel("MAIN".into())
    );
    assert_eq!(
        Program::assemble("A:\tDC.B\t0\nA:\tDC.W\t0\nMAIN:\n\tRTS").unwrap_err(),
        VmError::DuplicateVariable("A".into())
    );
}

#[test]
fn rejects_dangling_references() {
    assert_eq!(
        Program::assemble("MAIN:\n\tBEQ\tL9\n\tRTS").unwrap_err(),
        VmError::UndefinedLabel("L9".into())
    );
    assert_eq!(
        Program::assemble("MAIN:\n\tJSR\t_P\n\tRTS").unwrap_err(),
        VmError::UndefinedLabel("_P".into())
    );
    assert_eq!(
        Program::assemble("MAIN:\n\tMOVE.B\tD0,Y(PC)\n\tRTS").unwrap_err(),
        VmError::UndefinedVariable("Y".into())
    );
}

#[test]
fn library_calls_need_no_label() {
    assert!(Program::assemble("MAIN:\n\tJSR\tREAD\n\tJSR\tWRITE\n\tRTS").is_ok());
}

#[test]
fn requires_an_entry_label() {
    assert_eq!(
        Program::assemble("\tRTS").unwrap_err(),
        VmError::MissingEntry("MAIN")
    );
}
