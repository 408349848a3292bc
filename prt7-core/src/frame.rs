//! Frame variants and their stateful interpretation

use crate::error::FrameError;
use crate::payload::Payload;
use crate::rotor::Rotor;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// One parsed PRT-7 protocol unit
///
/// Frames are transient values: built from one input line, interpreted once
/// against the session state, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    /// Decode one character through the rotor and append it to the payload
    Load(char),

    /// Rotate the rotor by a signed delta; produces no output character
    Map(i32),
}

impl Frame {
    /// Interpret this frame against the session state
    ///
    /// Load maps the carried character through the rotor and appends the
    /// result; Map rotates the rotor. Both transitions are total: given a
    /// well-formed frame, interpretation cannot fail.
    pub fn interpret(&self, rotor: &mut Rotor, payload: &mut Payload) -> SessionEvent {
        match *self {
            Frame::Load(raw) => {
                let decoded = rotor.map_char(raw);
                payload.push(decoded);
                SessionEvent::Loaded {
                    raw,
                    decoded,
                    payload: payload.render_bracketed(),
                }
            }
            Frame::Map(delta) => {
                rotor.rotate(delta);
                SessionEvent::Rotated {
                    delta,
                    head: rotor.head(),
                }
            }
        }
    }
}

/// Observable outcome of one step of the session loop
///
/// Consumed by a presentation layer (console, JSON stream); the core never
/// prints anything itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The handshake banner was received and acknowledged
    Banner,

    /// A load frame appended a decoded character
    Loaded {
        /// Character as carried on the wire.
        raw: char,
        /// Character after mapping through the rotor.
        decoded: char,
        /// Bracketed rendering of the payload so far.
        payload: String,
    },

    /// A map frame rotated the rotor
    Rotated {
        /// Signed delta applied.
        delta: i32,
        /// Rotor head after the rotation (the decode of `A`).
        head: char,
    },

    /// A line failed to parse; the session continues
    Malformed {
        /// The offending line, verbatim.
        line: String,
        /// Why it was rejected.
        error: FrameError,
    },

    /// The session ended; emitted exactly once
    Finished {
        /// The fully assembled hidden message.
        message: String,
        /// Frames successfully interpreted.
        frames_processed: usize,
        /// Lines rejected as malformed.
        malformed_lines: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_appends_decoded_char() {
        let mut rotor = Rotor::new();
        let mut payload = Payload::new();
        rotor.rotate(3);

        let event = Frame::Load('A').interpret(&mut rotor, &mut payload);

        assert_eq!(payload.render(), "D");
        assert_eq!(
            event,
            SessionEvent::Loaded {
                raw: 'A',
                decoded: 'D',
                payload: "[D]".into(),
            }
        );
    }

    #[test]
    fn test_map_rotates_without_output() {
        let mut rotor = Rotor::new();
        let mut payload = Payload::new();

        let event = Frame::Map(-2).interpret(&mut rotor, &mut payload);

        assert!(payload.is_empty());
        assert_eq!(event, SessionEvent::Rotated { delta: -2, head: 'Y' });
    }

    #[test]
    fn test_load_space_passes_through() {
        let mut rotor = Rotor::new();
        let mut payload = Payload::new();
        rotor.rotate(11);

        Frame::Load(' ').interpret(&mut rotor, &mut payload);

        assert_eq!(payload.render(), " ");
    }
}
