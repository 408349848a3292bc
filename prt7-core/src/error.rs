//! Error types for PRT-7 operations

use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Errors that can occur while acquiring or parsing PRT-7 lines
///
/// Parse failures are recoverable: the session reports them and keeps
/// reading. I/O and transport failures end the run.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameError {
    /// Second character of the line is not the `,` separator
    #[cfg_attr(feature = "std", error("Malformed frame: missing ',' separator"))]
    MissingSeparator,

    /// Frame tag is neither `L` nor `M`
    #[cfg_attr(feature = "std", error("Malformed frame: unknown frame tag {0:?}"))]
    UnknownFrameKind(char),

    /// Load frame with nothing after the separator
    #[cfg_attr(feature = "std", error("Malformed frame: empty field after separator"))]
    EmptyFrame,

    /// Line exceeds the transport's length bound
    #[cfg_attr(
        feature = "std",
        error("Line too long: {actual} bytes exceeds limit of {limit}")
    )]
    LineTooLong {
        /// The maximum accepted line length.
        limit: usize,
        /// The length the transport delivered.
        actual: usize,
    },

    /// IO error while reading from the line source
    #[cfg_attr(feature = "std", error("IO error: {0}"))]
    Io(String),

    /// No line source could be acquired
    #[cfg_attr(feature = "std", error("Transport unavailable: {0}"))]
    TransportUnavailable(String),
}

#[cfg(feature = "std")]
impl From<std::io::Error> for FrameError {
    fn from(err: std::io::Error) -> Self {
        FrameError::Io(err.to_string())
    }
}
