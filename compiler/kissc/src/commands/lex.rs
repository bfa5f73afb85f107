//! The `lex` command: show the token stream.

use kiss_lexer::{Scanner, StrSource, Token};

use super::read_file;

pub fn lex_file(path: &str) {
    let content = read_file(path);
    let mut scanner = Scanner::new(StrSource::new(&content));

    println!("Tokens for '{path}':");
    loop {
        match scanner.next_token() {
            Ok(Token::Eof) => break,
            Ok(token) => println!("  {token:?} @ {}", scanner.location()),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }
}
