#![allow(dead_code)]

use jsonata_lexer::{Lexer, Token, TokenKind};

/// Pull tokens until EOF, returning them with the EOF token last.
pub fn drain(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

/// Assert the kind and literal of every token before EOF.
pub fn assert_tokens(input: &str, expected: &[(TokenKind, &str)]) {
    let tokens = drain(input);
    let got: Vec<_> = tokens
        .iter()
        .take_while(|t| t.kind != TokenKind::Eof)
        .map(|t| (t.kind, t.literal.as_str()))
        .collect();
    assert_eq!(got, expected, "token mismatch for input:\n{input}");
}

/// The source text between a token's start and end offsets.
pub fn source_slice(input: &str, token: &Token) -> String {
    input
        .chars()
        .skip(token.span.start)
        .take(token.span.len())
        .collect()
}
