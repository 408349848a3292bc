//! One line of text into a frame

use crate::constants::{FIELD_SEPARATOR, LOAD_TAG, MAP_TAG, SPACE_TOKEN_PREFIX};
use crate::error::FrameError;
use crate::frame::Frame;

/// Parse one line into a frame
///
/// Grammar: `L,<char>` (or `L,Space` for a literal space) and
/// `M,<signed-int>`. Failure is a value, never a panic; the caller reports
/// and keeps reading.
///
/// Two wire quirks are kept bit-exact from the deployed senders:
///
/// - The space token is matched as the *prefix* `Spa`, so a load field that
///   merely starts with those characters always decodes to a space. A
///   genuine single-character `S` payload is unaffected (`L,S` has no
///   trailing `pa`), but the heuristic is not a robust tokenizer.
/// - The map field follows manual-integer-parsing semantics: an optional
///   sign, then digits up to the first non-digit; trailing garbage is
///   silently ignored (`M,5abc` rotates by 5) and a digitless field parses
///   as zero.
pub fn parse(line: &str) -> Result<Frame, FrameError> {
    let bytes = line.as_bytes();

    // Separator first, mirroring the wire check order: a 1-byte line or a
    // multi-byte first character can never carry `,` at index 1.
    if bytes.len() < 2 || bytes[1] != FIELD_SEPARATOR as u8 {
        return Err(FrameError::MissingSeparator);
    }

    let tag = bytes[0] as char;
    let field = &line[2..];

    if tag == LOAD_TAG {
        if field.starts_with(SPACE_TOKEN_PREFIX) {
            return Ok(Frame::Load(' '));
        }
        match field.chars().next() {
            Some(c) => Ok(Frame::Load(c)),
            None => Err(FrameError::EmptyFrame),
        }
    } else if tag == MAP_TAG {
        Ok(Frame::Map(parse_delta_prefix(field)))
    } else {
        Err(FrameError::UnknownFrameKind(tag))
    }
}

/// Parse a signed decimal prefix, ignoring trailing garbage
///
/// Saturates at the i32 range instead of wrapping; the rotor reduces the
/// delta mod 26 anyway.
fn parse_delta_prefix(field: &str) -> i32 {
    let mut chars = field.chars().peekable();

    let sign: i64 = match chars.peek() {
        Some('-') => {
            chars.next();
            -1
        }
        Some('+') => {
            chars.next();
            1
        }
        _ => 1,
    };

    let mut value: i64 = 0;
    for c in chars {
        match c.to_digit(10) {
            Some(d) => value = (value * 10 + i64::from(d)).min(i64::from(i32::MAX)),
            None => break,
        }
    }

    (sign * value) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_load() {
        assert_eq!(parse("L,X"), Ok(Frame::Load('X')));
        assert_eq!(parse("L,7"), Ok(Frame::Load('7')));
        assert_eq!(parse("L,S"), Ok(Frame::Load('S')));
    }

    #[test]
    fn test_parse_load_space_token() {
        assert_eq!(parse("L,Space"), Ok(Frame::Load(' ')));
        // Prefix heuristic: anything starting with "Spa" is a space.
        assert_eq!(parse("L,Spam"), Ok(Frame::Load(' ')));
        assert_eq!(parse("L,Spa"), Ok(Frame::Load(' ')));
        // "Sp" alone is not the token; the first character wins.
        assert_eq!(parse("L,Sp"), Ok(Frame::Load('S')));
    }

    #[test]
    fn test_parse_map() {
        assert_eq!(parse("M,3"), Ok(Frame::Map(3)));
        assert_eq!(parse("M,-13"), Ok(Frame::Map(-13)));
        assert_eq!(parse("M,+7"), Ok(Frame::Map(7)));
        assert_eq!(parse("M,120"), Ok(Frame::Map(120)));
    }

    #[test]
    fn test_parse_map_ignores_trailing_garbage() {
        assert_eq!(parse("M,5abc"), Ok(Frame::Map(5)));
        assert_eq!(parse("M,-2 now"), Ok(Frame::Map(-2)));
        // No digits at all parses as zero, a no-op rotation.
        assert_eq!(parse("M,x"), Ok(Frame::Map(0)));
        assert_eq!(parse("M,"), Ok(Frame::Map(0)));
    }

    #[test]
    fn test_parse_map_saturates_on_overflow() {
        assert_eq!(parse("M,99999999999999999999"), Ok(Frame::Map(i32::MAX)));
        assert_eq!(parse("M,-99999999999999999999"), Ok(Frame::Map(i32::MIN + 1)));
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        assert_eq!(parse("X,1"), Err(FrameError::UnknownFrameKind('X')));
        assert_eq!(parse("l,a"), Err(FrameError::UnknownFrameKind('l')));
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert_eq!(parse("LX"), Err(FrameError::MissingSeparator));
        assert_eq!(parse("L"), Err(FrameError::MissingSeparator));
        assert_eq!(parse(""), Err(FrameError::MissingSeparator));
        assert_eq!(parse("ÑL,A"), Err(FrameError::MissingSeparator));
    }

    #[test]
    fn test_parse_rejects_empty_load_field() {
        assert_eq!(parse("L,"), Err(FrameError::EmptyFrame));
    }
}
