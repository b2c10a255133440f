use std::fmt;
use std::ops::Range;

/// Codepoint offsets of a token in the source, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of codepoints covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Only the end-of-input marker has an empty span.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `.`
    Dot,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `@`
    At,
    /// `#`
    Hash,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `?`
    Query,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `|`
    Pipe,
    /// `=`
    Equals,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `^`
    Caret,
    /// `&`
    Concat,
    /// `!`
    Bang,
    /// `~`
    Tilde,
    /// `..`
    Range,
    /// `:=`
    Bind,
    /// `**`
    Descendants,
    /// `<=`
    Lte,
    /// `>=`
    Gte,
    /// `!=`
    Nqe,
    /// `~>`
    Chain,
    /// Bare name or backtick-quoted name.
    Ident,
    /// Numeric literal, optionally signed.
    Number,
    /// Single- or double-quoted string.
    String,
    True,
    False,
    Null,
    And,
    Or,
    In,
    /// End of input. Returned again on every pull after the first.
    Eof,
    /// Malformed input: an unterminated literal or comment, or a
    /// character that cannot start any token.
    Invalid,
    /// Block comment (`/* ... */`).
    Comment,
}

impl TokenKind {
    /// The fixed lexeme for punctuation, operators, and keywords, or the
    /// class name for everything else.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dot => ".",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Comma => ",",
            Self::At => "@",
            Self::Hash => "#",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Query => "?",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Pipe => "|",
            Self::Equals => "=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Caret => "^",
            Self::Concat => "&",
            Self::Bang => "!",
            Self::Tilde => "~",
            Self::Range => "..",
            Self::Bind => ":=",
            Self::Descendants => "**",
            Self::Lte => "<=",
            Self::Gte => ">=",
            Self::Nqe => "!=",
            Self::Chain => "~>",
            Self::Ident => "IDENT",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::And => "and",
            Self::Or => "or",
            Self::In => "in",
            Self::Eof => "EOF",
            Self::Invalid => "INVALID",
            Self::Comment => "COMMENT",
        }
    }

    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::True | Self::False | Self::Null | Self::And | Self::Or | Self::In
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classify a bare identifier: one of the six keywords (exact case) or
/// [`TokenKind::Ident`].
#[must_use]
pub fn lookup_ident(ident: &str) -> TokenKind {
    match ident {
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "in" => TokenKind::In,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        _ => TokenKind::Ident,
    }
}

/// A single token with its kind, text, and source location.
///
/// For quoted strings and backtick names `literal` excludes the
/// delimiters but keeps escape sequences verbatim; `span` always covers
/// the whole lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, literal: String, span: Span) -> Self {
        Self {
            kind,
            literal,
            span,
        }
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}
