//! Append-only accumulator for decoded characters

use alloc::string::String;
use alloc::vec::Vec;

/// The growing ordered sequence of decoded characters
///
/// Characters are only ever appended; once in, they are never removed or
/// reordered. Rendering is non-destructive and repeatable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    chars: Vec<char>,
}

impl Payload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one decoded character
    pub fn push(&mut self, c: char) {
        self.chars.push(c);
    }

    /// Render the full message
    pub fn render(&self) -> String {
        self.chars.iter().collect()
    }

    /// Render the message with each character bracketed, e.g. `[H][I]`
    pub fn render_bracketed(&self) -> String {
        let mut out = String::with_capacity(self.chars.len() * 3);
        for &c in &self.chars {
            out.push('[');
            out.push(c);
            out.push(']');
        }
        out
    }

    /// Number of characters accumulated so far
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether nothing has been decoded yet
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
