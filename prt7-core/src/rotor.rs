//! Cyclic substitution table ("rotor")

use crate::constants::{ROTOR_ALPHABET, ROTOR_SIZE};

/// A cyclic 26-symbol substitution table with a rotatable head
///
/// The rotor starts aligned with the plain alphabet: the head sits on `A`,
/// so every character maps to itself. Map frames rotate the head; load
/// frames read through it. The symbol multiset never changes, only the
/// head offset does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    symbols: [u8; ROTOR_SIZE],
    head: usize,
}

impl Rotor {
    /// Create a rotor in its initial `A..Z` alignment
    pub fn new() -> Self {
        Self {
            symbols: *ROTOR_ALPHABET,
            head: 0,
        }
    }

    /// Rotate the head by `delta` positions
    ///
    /// Positive deltas walk forward, negative backward; any magnitude is
    /// accepted and reduced mod 26 first, so the walk is O(1). A delta of
    /// zero is a no-op. Never fails.
    pub fn rotate(&mut self, delta: i32) {
        let steps = delta.rem_euclid(ROTOR_SIZE as i32) as usize;
        self.head = (self.head + steps) % ROTOR_SIZE;
    }

    /// Map one character through the current rotor alignment
    ///
    /// Uppercase `A..Z` is mapped to the symbol `c - 'A'` steps forward from
    /// the head; everything else (space, digits, punctuation) passes through
    /// unchanged. Reads rotor state only.
    pub fn map_char(&self, c: char) -> char {
        if !c.is_ascii_uppercase() {
            return c;
        }
        let pos = (c as u8 - b'A') as usize;
        self.symbols[(self.head + pos) % ROTOR_SIZE] as char
    }

    /// Solve [`map_char`](Self::map_char) for the raw character
    ///
    /// Returns the character that would decode to `c` at the current
    /// alignment; non-uppercase input passes through unchanged.
    pub fn unmap_char(&self, c: char) -> char {
        if !c.is_ascii_uppercase() {
            return c;
        }
        let pos = (c as u8 - b'A') as usize;
        let raw = (pos + ROTOR_SIZE - self.head % ROTOR_SIZE) % ROTOR_SIZE;
        (b'A' + raw as u8) as char
    }

    /// The symbol currently at the head (the decode of `A`)
    pub fn head(&self) -> char {
        self.symbols[self.head] as char
    }
}

impl Default for Rotor {
    fn default() -> Self {
        Self::new()
    }
}
