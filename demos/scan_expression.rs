//! Print the token stream for a query expression.

use jsonata_lexer::{Lexer, TokenKind};

fn main() {
    let input = "Account.Order[Price > -10].`Product Name` /* names */ ~> $join(', ')";

    let mut lexer = Lexer::new(input);
    loop {
        let token = lexer.next_token();
        println!(
            "{:>3}..{:<3} {:<8} {:?}",
            token.span.start, token.span.end, token.kind, token.literal
        );
        if token.kind == TokenKind::Eof {
            break;
        }
    }

    // Malformed input is reported as a token, not an error.
    for token in jsonata_lexer::scan("'unterminated") {
        println!("{}: {:?}", token.kind, token.literal);
    }

    if let Err(e) = jsonata_lexer::tokenize("Order.`Product") {
        println!("Lex error: {e}");
        println!("  Kind: {:?}", e.kind);
    }
}
