//! Owned codepoint buffer with a one-codepoint read-ahead.
//!
//! `position` points at `ch`, the codepoint under examination, and
//! `read_position` is always `position + 1`. Past the end of input `ch`
//! holds [`SENTINEL`]; end of input is decided by `position`, so a NUL
//! inside the source is still an ordinary codepoint.

/// Value of `ch` once the cursor has run past the last codepoint.
pub const SENTINEL: char = '\0';

#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    position: usize,
    read_position: usize,
    ch: char,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        let mut cursor = Self {
            chars: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: SENTINEL,
        };
        cursor.advance();
        cursor
    }

    /// Consume `ch` and load the next codepoint.
    pub fn advance(&mut self) {
        self.ch = self
            .chars
            .get(self.read_position)
            .copied()
            .unwrap_or(SENTINEL);
        // Saturate at one past the end so repeated advances at EOF stay put.
        self.position = self.read_position.min(self.chars.len());
        self.read_position = self.position + 1;
    }

    /// The codepoint after `ch`, without consuming anything.
    pub fn peek(&self) -> char {
        self.chars
            .get(self.read_position)
            .copied()
            .unwrap_or(SENTINEL)
    }

    /// The codepoint before `ch`, if any.
    pub fn previous(&self) -> Option<char> {
        self.position
            .checked_sub(1)
            .and_then(|i| self.chars.get(i).copied())
    }

    /// The codepoint at an absolute offset.
    pub fn get(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    pub const fn ch(&self) -> char {
        self.ch
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn is_eof(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Codepoints from `ch` to the end of input.
    pub fn rest(&self) -> &[char] {
        self.chars.get(self.position..).unwrap_or(&[])
    }

    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Jump to `offset`, resynchronizing the read-ahead cursor.
    pub fn seek(&mut self, offset: usize) {
        self.read_position = offset.min(self.chars.len());
        self.advance();
    }
}
