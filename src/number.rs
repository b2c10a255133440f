//! Numeric literal grammar.
//!
//! ```text
//! number   = [ "-" ] integer [ fraction ] [ exponent ]
//! integer  = "0" | nonzero { digit }
//! fraction = "." digit { digit }
//! exponent = ( "e" | "E" ) [ "+" | "-" ] digit { digit }
//! ```
//!
//! Matching is anchored at the first codepoint and takes the longest
//! prefix that satisfies the grammar. An optional part that is only
//! partially present (`1.`, `2e+`) is left for the next token.

/// Length in codepoints of the longest number at the start of `input`.
pub fn match_number(input: &[char]) -> Option<usize> {
    let mut pos = usize::from(input.first() == Some(&'-'));

    match input.get(pos) {
        Some('0') => pos += 1,
        Some('1'..='9') => pos += 1 + count_digits(&input[pos + 1..]),
        _ => return None,
    }

    if input.get(pos) == Some(&'.') {
        let digits = count_digits(&input[pos + 1..]);
        if digits > 0 {
            pos += 1 + digits;
        }
    }

    if matches!(input.get(pos), Some('e' | 'E')) {
        let sign = usize::from(matches!(input.get(pos + 1), Some('+' | '-')));
        let digits = input.get(pos + 1 + sign..).map_or(0, count_digits);
        if digits > 0 {
            pos += 1 + sign + digits;
        }
    }

    Some(pos)
}

fn count_digits(input: &[char]) -> usize {
    input.iter().take_while(|c| c.is_ascii_digit()).count()
}
