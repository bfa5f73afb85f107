#![allow(clippy::unwrap_used)]

use kiss_diagnostic::{CompileError, ErrorKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::{ReadSource, StrSource};

fn scan(text: &str) -> Result<Vec<Token>, CompileError> {
    let mut scanner = Scanner::new(StrSource::new(text));
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        if token == Token::Eof {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

fn ident(name: &str) -> Token {
    Token::Ident(name.into())
}

#[test]
fn scans_an_assignment() {
    assert_eq!(
        scan("x = 12 + y1;").unwrap(),
        vec![
            ident("X"),
            Token::Op(Op::Equal),
            Token::Number(12),
            Token::Op(Op::Plus),
            ident("Y1"),
            Token::Op(Op::Semicolon),
        ]
    );
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(
        scan("While endif Loop").unwrap(),
        vec![
            Token::Keyword(Keyword::While),
            Token::Keyword(Keyword::EndIf),
            Token::Keyword(Keyword::Loop),
        ]
    );
}

#[test]
fn two_character_relations() {
    assert_eq!(
        scan("<= >= <> < > # =").unwrap(),
        [
            Op::LessEqual,
            Op::GreaterEqual,
            Op::NotEqual,
            Op::Less,
            Op::Greater,
            Op::NotEqual,
            Op::Equal,
        ]
        .map(Token::Op)
        .to_vec()
    );
}

#[test]
fn less_than_minus_is_two_tokens() {
    assert_eq!(
        scan("a<-1").unwrap(),
        vec![
            ident("A"),
            Token::Op(Op::Less),
            Token::Op(Op::Minus),
            Token::Number(1),
        ]
    );
}

#[test]
fn comments_are_skipped_and_nest() {
    assert_eq!(
        scan("a { one { two } still } b").unwrap(),
        vec![ident("A"), ident("B")]
    );
}

#[test]
fn unterminated_comment_expects_closing_brace() {
    let err = scan("a\n  { open { inner }").unwrap_err();
    assert_eq!(err.kind, ErrorKind::expected("}"));
    assert_eq!(err.location, Location::new(2, 3));
}

#[test]
fn unrecognized_character_is_located() {
    let err = scan("x = 1\ny = $").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnrecognizedCharacter('$'));
    assert_eq!(err.location, Location::new(2, 5));
}

#[test]
fn stray_closing_brace_is_unrecognized() {
    let err = scan("}").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnrecognizedCharacter('}'));
}

#[test]
fn token_locations_are_token_starts() {
    let mut scanner = Scanner::new(StrSource::new("  ab\n\tcd <="));
    scanner.next_token().unwrap();
    assert_eq!(scanner.location(), Location::new(1, 3));
    scanner.next_token().unwrap();
    assert_eq!(scanner.location(), Location::new(2, 2));
    assert_eq!(scanner.next_token().unwrap(), Token::Op(Op::LessEqual));
    assert_eq!(scanner.location(), Location::new(2, 5));
}

#[test]
fn eof_repeats() {
    let mut scanner = Scanner::new(StrSource::new(""));
    assert_eq!(scanner.next_token().unwrap(), Token::Eof);
    assert_eq!(scanner.next_token().unwrap(), Token::Eof);
}

#[test]
fn number_overflow_wraps() {
    let expected = 99_999_999_999_999_999_999_u128 as i64;
    assert_eq!(
        scan("99999999999999999999").unwrap(),
        vec![Token::Number(expected)]
    );
}

#[test]
fn reads_from_byte_streams() {
    let mut scanner = Scanner::new(ReadSource::new(&b"WRITE(a)"[..]));
    let mut tokens = Vec::new();
    loop {
        match scanner.next_token().unwrap() {
            Token::Eof => break,
            token => tokens.push(token),
        }
    }
    assert_eq!(
        tokens,
        vec![
            Token::Keyword(Keyword::Write),
            Token::Op(Op::LParen),
            ident("A"),
            Token::Op(Op::RParen),
        ]
    );
}

proptest! {
    #[test]
    fn decimal_literals_scan_to_their_value(value in 0_i64..=i64::MAX) {
        prop_assert_eq!(scan(&value.to_string()).unwrap(), vec![Token::Number(value)]);
    }

    #[test]
    fn identifiers_are_uppercased(name in "[a-zA-Z][a-zA-Z0-9]{0,10}") {
        let upper = name.to_ascii_uppercase();
        let expected = match Keyword::lookup(&upper) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Ident(upper),
        };
        prop_assert_eq!(scan(&name).unwrap(), vec![expected]);
    }
}
