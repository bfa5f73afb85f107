use super::*;

#[test]
fn every_keyword_looks_itself_up() {
    for keyword in Keyword::ALL {
        assert_eq!(Keyword::lookup(keyword.as_str()), Some(keyword));
    }
}

#[test]
fn lookup_is_exact() {
    assert_eq!(Keyword::lookup("ENDIFX"), None);
    assert_eq!(Keyword::lookup("begin"), None);
    assert_eq!(Keyword::lookup("X"), None);
    assert_eq!(Keyword::lookup("PROCEDURES"), None);
}

#[test]
fn single_character_operators_render_as_themselves() {
    for c in "+-*/()=#<>&|~!,;.".chars() {
        let op = Op::from_char(c);
        assert_eq!(op.map(Op::as_str), Some(c.to_string().as_str()));
    }
    assert_eq!(Op::from_char('$'), None);
}

#[test]
fn token_display() {
    assert_eq!(Token::Ident("ABC".into()).to_string(), "ABC");
    assert_eq!(Token::Number(42).to_string(), "42");
    assert_eq!(Token::Op(Op::LessEqual).to_string(), "<=");
    assert_eq!(Token::Keyword(Keyword::EndIf).to_string(), "ENDIF");
    assert_eq!(Token::Eof.to_string(), "end of input");
}
