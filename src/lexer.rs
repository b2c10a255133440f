use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::{Cursor, SENTINEL};
use crate::number::match_number;
use crate::token::{Span, Token, TokenKind, lookup_ident};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Unterminated single- or double-quoted string.
    UnterminatedString,
    /// Unterminated backtick-quoted name.
    UnterminatedBacktick,
    /// Block comment without a closing `*/`.
    UnterminatedComment,
    /// Codepoint that cannot start any token.
    UnexpectedCharacter(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => {
                write!(f, "unterminated quoted string")
            }
            Self::UnterminatedBacktick => {
                write!(f, "unterminated backtick name")
            }
            Self::UnterminatedComment => {
                write!(f, "unterminated comment")
            }
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {}", ch.escape_debug())
            }
        }
    }
}

/// Error produced by [`tokenize`] for the first `INVALID` token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {}", span.start)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Scan the whole input, keeping `INVALID` and `COMMENT` tokens.
///
/// The trailing EOF token is not included.
#[must_use]
pub fn scan(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

/// Scan the whole input, rejecting it at the first `INVALID` token.
///
/// The trailing EOF token is not included.
///
/// # Errors
///
/// Returns `LexError` on unterminated strings, backtick names, or
/// comments, and on characters that cannot start a token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::Eof => break,
            TokenKind::Invalid => {
                let error = lexer.error_for(&token);
                debug!(%error, "rejecting input");
                return Err(error);
            }
            _ => tokens.push(token),
        }
    }

    Ok(tokens)
}

/// Pull-based scanner over one source text.
///
/// Each call to [`Lexer::next_token`] returns one token and leaves the
/// cursor on the first codepoint of the next one. Once the input is
/// exhausted every further call returns an EOF token.
#[derive(Debug, Clone)]
pub struct Lexer {
    cursor: Cursor,
}

impl Lexer {
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Consume the current codepoint.
    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    /// The codepoint after the current one, or `'\0'` past the end.
    #[must_use]
    pub fn peek(&self) -> char {
        self.cursor.peek()
    }

    /// Codepoint offset of the current codepoint.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        trace!(
            kind = %token.kind,
            start = token.span.start,
            end = token.span.end,
            "token"
        );
        token
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = self.cursor.ch();
        let kind = match ch {
            _ if self.cursor.is_eof() => {
                let end = self.cursor.position();
                return Token::new(TokenKind::Eof, String::new(), Span::new(end, end));
            }
            '.' => return self.two_char('.', TokenKind::Dot, TokenKind::Range),
            ':' => return self.two_char('=', TokenKind::Colon, TokenKind::Bind),
            '*' => return self.two_char('*', TokenKind::Asterisk, TokenKind::Descendants),
            '<' => return self.two_char('=', TokenKind::Lt, TokenKind::Lte),
            '>' => return self.two_char('=', TokenKind::Gt, TokenKind::Gte),
            '!' => return self.two_char('=', TokenKind::Bang, TokenKind::Nqe),
            '~' => return self.two_char('>', TokenKind::Tilde, TokenKind::Chain),
            '-' => match self.signed_number_len() {
                Some(len) => return self.read_number(len),
                None => TokenKind::Minus,
            },
            '/' if self.cursor.peek() == '*' => return self.read_comment(),
            '`' => return self.read_delimited('`', TokenKind::Ident),
            '\'' | '"' => return self.read_delimited(ch, TokenKind::String),
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            '@' => TokenKind::At,
            '#' => TokenKind::Hash,
            ';' => TokenKind::Semicolon,
            '?' => TokenKind::Query,
            '+' => TokenKind::Plus,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '|' => TokenKind::Pipe,
            '=' => TokenKind::Equals,
            '^' => TokenKind::Caret,
            '&' => TokenKind::Concat,
            c if is_ident_char(c) && !c.is_numeric() => return self.read_identifier(),
            _ => match match_number(self.cursor.rest()) {
                Some(len) => return self.read_number(len),
                None => TokenKind::Invalid,
            },
        };

        self.single(kind)
    }

    fn skip_whitespace(&mut self) {
        while self.cursor.ch().is_whitespace() {
            self.cursor.advance();
        }
    }

    /// Emit the current codepoint as a token of `kind` and step past it.
    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor.position();
        let literal = self.cursor.ch().to_string();
        self.cursor.advance();
        Token::new(kind, literal, Span::new(start, start + 1))
    }

    fn two_char(&mut self, second: char, narrow: TokenKind, wide: TokenKind) -> Token {
        if self.cursor.peek() != second {
            return self.single(narrow);
        }

        let start = self.cursor.position();
        let literal: String = [self.cursor.ch(), second].iter().collect();
        self.cursor.advance();
        self.cursor.advance();
        Token::new(wide, literal, Span::new(start, start + 2))
    }

    /// A `-` joins the following number unless the codepoint before it
    /// closes an operand (`3-2` is a subtraction, `-2` and `[-2]` are not).
    fn signed_number_len(&self) -> Option<usize> {
        if self.cursor.previous().is_some_and(ends_operand) {
            return None;
        }
        match_number(self.cursor.rest())
    }

    fn read_number(&mut self, len: usize) -> Token {
        let start = self.cursor.position();
        let end = start + len;
        let literal = self.cursor.slice(start, end);
        self.cursor.seek(end);
        Token::new(TokenKind::Number, literal, Span::new(start, end))
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        while is_ident_char(self.cursor.ch()) {
            self.cursor.advance();
        }

        let end = self.cursor.position();
        let literal = self.cursor.slice(start, end);
        Token::new(lookup_ident(&literal), literal, Span::new(start, end))
    }

    /// Scan a quoted string or backtick name. A delimiter preceded by an
    /// odd number of backslashes is content, not a terminator.
    fn read_delimited(&mut self, delimiter: char, kind: TokenKind) -> Token {
        let start = self.cursor.position();
        self.cursor.advance(); // skip opening delimiter
        let content_start = self.cursor.position();

        let mut backslashes = 0usize;
        loop {
            if self.cursor.is_eof() {
                let end = self.cursor.position();
                let literal = self.cursor.slice(content_start, end);
                return Token::new(TokenKind::Invalid, literal, Span::new(start, end));
            }

            let ch = self.cursor.ch();
            if ch == delimiter && backslashes % 2 == 0 {
                break;
            }
            backslashes = if ch == '\\' { backslashes + 1 } else { 0 };
            self.cursor.advance();
        }

        let literal = self.cursor.slice(content_start, self.cursor.position());
        self.cursor.advance(); // skip closing delimiter
        Token::new(kind, literal, Span::new(start, self.cursor.position()))
    }

    fn read_comment(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance(); // skip /
        self.cursor.advance(); // skip *

        loop {
            if self.cursor.is_eof() {
                let end = self.cursor.position();
                let literal = self.cursor.slice(start, end);
                return Token::new(TokenKind::Invalid, literal, Span::new(start, end));
            }
            if self.cursor.ch() == '*' && self.cursor.peek() == '/' {
                self.cursor.advance();
                self.cursor.advance();
                break;
            }
            self.cursor.advance();
        }

        let end = self.cursor.position();
        let literal = self.cursor.slice(start, end);
        Token::new(TokenKind::Comment, literal, Span::new(start, end))
    }

    fn error_for(&self, token: &Token) -> LexError {
        let kind = match self.cursor.get(token.span.start).unwrap_or(SENTINEL) {
            '"' | '\'' => LexErrorKind::UnterminatedString,
            '`' => LexErrorKind::UnterminatedBacktick,
            '/' => LexErrorKind::UnterminatedComment,
            ch => LexErrorKind::UnexpectedCharacter(ch),
        };
        LexError {
            kind,
            span: token.span,
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to, but not including, EOF.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl FusedIterator for Lexer {}

/// Punctuation and operator characters, plus the three literal
/// delimiters. None of them can appear in a bare identifier.
const fn is_reserved(ch: char) -> bool {
    matches!(
        ch,
        '.' | '['
            | ']'
            | '{'
            | '}'
            | '('
            | ')'
            | ','
            | '@'
            | '#'
            | ';'
            | ':'
            | '?'
            | '+'
            | '-'
            | '*'
            | '/'
            | '%'
            | '|'
            | '='
            | '<'
            | '>'
            | '^'
            | '&'
            | '!'
            | '~'
            | '`'
            | '\''
            | '"'
    )
}

fn is_ident_char(ch: char) -> bool {
    ch != SENTINEL && !ch.is_whitespace() && !is_reserved(ch)
}

fn ends_operand(ch: char) -> bool {
    is_ident_char(ch) || matches!(ch, ')' | ']' | '}' | '`' | '\'' | '"')
}
