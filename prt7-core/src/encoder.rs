//! Frames back into wire lines, and transcript composition

use crate::constants::{SENTINEL_BANNER, SENTINEL_FIN};
use crate::frame::Frame;
use crate::rotor::Rotor;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Encode one frame as a wire line
///
/// A space payload is written with its textual stand-in, since the wire
/// cannot carry a literal space token reliably.
pub fn encode_frame(frame: &Frame) -> String {
    match *frame {
        Frame::Load(' ') => "L,Space".to_string(),
        Frame::Load(c) => format!("L,{c}"),
        Frame::Map(delta) => format!("M,{delta}"),
    }
}

/// Compose a full transcript that decodes to `message`
///
/// Before each character, one rotation from `schedule` is applied (cycling
/// through the schedule when it is shorter than the message; an empty
/// schedule composes a plain pass-through transcript). Each load frame
/// carries the rotor-inverse of the target character, so a decoder walking
/// the same rotations reassembles `message` exactly.
///
/// The transcript is bracketed by the handshake banner and the `FIN`
/// sentinel, like a real sender's output.
pub fn compose_transcript(message: &str, schedule: &[i32]) -> Vec<String> {
    let mut rotor = Rotor::new();
    let mut lines = Vec::with_capacity(message.len() * 2 + 2);
    lines.push(SENTINEL_BANNER.to_string());

    for (i, target) in message.chars().enumerate() {
        if !schedule.is_empty() {
            let delta = schedule[i % schedule.len()];
            lines.push(encode_frame(&Frame::Map(delta)));
            rotor.rotate(delta);
        }
        lines.push(encode_frame(&Frame::Load(rotor.unmap_char(target))));
    }

    lines.push(SENTINEL_FIN.to_string());
    lines
}
