//! Line source abstraction over serial-style transports

use crate::error::FrameError;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "std")]
use crate::constants::MAX_LINE_LEN;

/// A provider of whole, newline-terminated, carriage-return-stripped lines
///
/// The session loop is the only consumer. Blocking, timeouts, and retry
/// policy all live behind this seam; the core just asks for the next line.
pub trait LineSource {
    /// Fetch the next line, or `None` at end of stream
    fn next_line(&mut self) -> Result<Option<String>, FrameError>;
}

/// Line source over any `std::io::Read`, one byte at a time
///
/// Strips `\r`, suppresses empty lines, and rejects lines longer than
/// [`MAX_LINE_LEN`] as a transport fault. Works for files, pipes, and raw
/// serial device nodes alike.
#[cfg(feature = "std")]
pub struct ReaderLineSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ReaderLineSource<R> {
    /// Wrap a reader
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> LineSource for ReaderLineSource<R> {
    fn next_line(&mut self) -> Result<Option<String>, FrameError> {
        let mut buf = Vec::new();
        let mut byte = [0u8; 1];

        loop {
            let n = match self.inner.read(&mut byte) {
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if n == 0 {
                // End of stream; flush a trailing unterminated line if any
                if buf.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(String::from_utf8_lossy(&buf).into_owned()));
            }

            match byte[0] {
                b'\n' => {
                    if buf.is_empty() {
                        continue;
                    }
                    return Ok(Some(String::from_utf8_lossy(&buf).into_owned()));
                }
                b'\r' => {}
                b => {
                    if buf.len() >= MAX_LINE_LEN {
                        return Err(FrameError::LineTooLong {
                            limit: MAX_LINE_LEN,
                            actual: buf.len() + 1,
                        });
                    }
                    buf.push(b);
                }
            }
        }
    }
}

/// In-memory line source for tests and composed transcripts
pub struct VecLineSource {
    lines: Vec<String>,
    pos: usize,
}

impl VecLineSource {
    /// Build from anything yielding line-like strings
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            pos: 0,
        }
    }
}

impl LineSource for VecLineSource {
    fn next_line(&mut self) -> Result<Option<String>, FrameError> {
        match self.lines.get(self.pos) {
            Some(line) => {
                self.pos += 1;
                Ok(Some(line.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn test_reader_source_strips_cr_and_empty_lines() {
        let data = b"L,A\r\n\r\n\nM,3\nFIN\n";
        let mut source = ReaderLineSource::new(&data[..]);

        assert_eq!(source.next_line(), Ok(Some("L,A".into())));
        assert_eq!(source.next_line(), Ok(Some("M,3".into())));
        assert_eq!(source.next_line(), Ok(Some("FIN".into())));
        assert_eq!(source.next_line(), Ok(None));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_reader_source_flushes_unterminated_tail() {
        let data = b"L,X";
        let mut source = ReaderLineSource::new(&data[..]);

        assert_eq!(source.next_line(), Ok(Some("L,X".into())));
        assert_eq!(source.next_line(), Ok(None));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_reader_source_rejects_oversized_line() {
        let mut data = alloc::vec![b'A'; MAX_LINE_LEN + 10];
        data.push(b'\n');
        let mut source = ReaderLineSource::new(&data[..]);

        assert!(matches!(
            source.next_line(),
            Err(FrameError::LineTooLong { .. })
        ));
    }

    #[test]
    fn test_vec_source_yields_in_order() {
        let mut source = VecLineSource::new(["M,1", "L,A"]);
        assert_eq!(source.next_line(), Ok(Some("M,1".into())));
        assert_eq!(source.next_line(), Ok(Some("L,A".into())));
        assert_eq!(source.next_line(), Ok(None));
    }
}
