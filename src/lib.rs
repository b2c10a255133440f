//! Lexical scanner for JSON query and transformation expressions.
//!
//! Turns expression source text into a stream of classified tokens for
//! a parser to consume. Offsets are counted in Unicode codepoints, and
//! malformed input never fails the scan: it shows up as `INVALID`
//! tokens carrying the text consumed so far.
//!
//! # Quick start
//!
//! ## Pull tokens one at a time
//!
//! ```
//! use jsonata_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("Account.Order[0].Price * -1.5");
//! let mut kinds = Vec::new();
//! loop {
//!     let token = lexer.next_token();
//!     if token.kind == TokenKind::Eof {
//!         break;
//!     }
//!     kinds.push(token.kind);
//! }
//! assert_eq!(kinds[0], TokenKind::Ident);
//! assert_eq!(kinds.last(), Some(&TokenKind::Number));
//! ```
//!
//! ## Scan everything up front
//!
//! ```
//! use jsonata_lexer::{LexErrorKind, TokenKind, tokenize};
//!
//! let tokens = tokenize("$sum(Order.Price) ~> $string()").unwrap();
//! assert!(tokens.iter().any(|t| t.kind == TokenKind::Chain));
//!
//! let err = tokenize("name = \"unclosed").unwrap_err();
//! assert_eq!(err.kind, LexErrorKind::UnterminatedString);
//! assert_eq!(err.span.start, 7);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

mod cursor;
pub mod lexer;
mod number;
pub mod token;

pub use lexer::{LexError, LexErrorKind, Lexer, scan, tokenize};
pub use token::{Span, Token, TokenKind, lookup_ident};
