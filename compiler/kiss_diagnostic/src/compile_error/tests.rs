use pretty_assertions::assert_eq;

use super::*;

#[test]
fn expected_message_quotes_the_token() {
    assert_eq!(ErrorKind::expected("=").to_string(), "\"=\" Expected");
}

#[test]
fn kinds_map_to_their_codes() {
    let cases = [
        (ErrorKind::UnrecognizedCharacter('$'), ErrorCode::E0001),
        (ErrorKind::expected(")"), ErrorCode::E1001),
        (ErrorKind::UnrecognizedKeyword("ELSE".into()), ErrorCode::E1002),
        (ErrorKind::UndefinedIdentifier("X".into()), ErrorCode::E2001),
        (ErrorKind::DuplicateIdentifier("A".into()), ErrorCode::E2002),
        (ErrorKind::NotAVariable("P".into()), ErrorCode::E2003),
        (ErrorKind::NoEnclosingLoop, ErrorCode::E2004),
    ];
    for (kind, code) in cases {
        assert_eq!(kind.code(), code, "{kind}");
    }
}

#[test]
fn unrecognized_character_escapes_control_characters() {
    assert_eq!(
        ErrorKind::UnrecognizedCharacter('\u{7}').to_string(),
        "Unrecognized Character '\\u{7}'"
    );
}

#[test]
fn compile_error_renders_code_message_and_location() {
    let err = ErrorKind::DuplicateIdentifier("A".into()).at(Location::new(2, 6));
    assert_eq!(
        err.to_string(),
        "error[E2002]: Duplicate Identifier A\n  --> 2:6"
    );
    assert_eq!(err.code(), ErrorCode::E2002);
}

#[test]
fn default_location_is_start_of_source() {
    assert_eq!(Location::default(), Location::START);
    assert_eq!(Location::START.to_string(), "1:1");
}
