//! Sequential read/parse/interpret/report loop

use crate::constants::{SENTINEL_BANNER, SENTINEL_FIN};
use crate::error::FrameError;
use crate::frame::SessionEvent;
use crate::parser;
use crate::payload::Payload;
use crate::rotor::Rotor;
use crate::source::LineSource;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Consumer of session events
///
/// The loop pushes every observable step here; implementations print,
/// stream, or just collect.
pub trait Report {
    /// Handle one event
    fn on_event(&mut self, event: &SessionEvent);
}

/// Report that stores events in order, for tests and batch output
#[derive(Debug, Default)]
pub struct CollectingReport {
    /// Every event seen so far, in arrival order.
    pub events: Vec<SessionEvent>,
}

impl Report for CollectingReport {
    fn on_event(&mut self, event: &SessionEvent) {
        self.events.push(event.clone());
    }
}

/// Outcome of a completed session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// The fully assembled hidden message
    pub message: String,

    /// Frames successfully interpreted
    pub frames_processed: usize,

    /// Lines rejected as malformed
    pub malformed_lines: usize,
}

/// One decoding session: a rotor and a payload, fed by a line source
///
/// Owns the pair exclusively for the duration of the run; there is no
/// concurrency and no sharing. Created fresh per stream, consumed by
/// [`run`](Self::run).
#[derive(Debug, Default)]
pub struct Session {
    rotor: Rotor,
    payload: Payload,
}

impl Session {
    /// Create a session with a fresh rotor and empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive the session to completion
    ///
    /// Reads lines one at a time, fully handling each before requesting the
    /// next. `FIN` stops the loop; the handshake banner is acknowledged and
    /// skipped; whitespace-only lines are no data; every other line goes
    /// through the parser. A malformed line is reported and the loop
    /// continues with no state mutation. Only a line-source failure aborts.
    ///
    /// The final message is reported exactly once, via
    /// [`SessionEvent::Finished`], whether the stream ended in `FIN` or
    /// simply ran out.
    pub fn run<S, R>(mut self, source: &mut S, report: &mut R) -> Result<SessionSummary, FrameError>
    where
        S: LineSource,
        R: Report,
    {
        let mut frames_processed = 0usize;
        let mut malformed_lines = 0usize;

        while let Some(line) = source.next_line()? {
            if line.trim().is_empty() {
                continue;
            }

            if line == SENTINEL_FIN {
                #[cfg(feature = "logging")]
                debug!("FIN sentinel received, stopping");
                break;
            }

            if line == SENTINEL_BANNER {
                #[cfg(feature = "logging")]
                debug!("handshake banner acknowledged");
                report.on_event(&SessionEvent::Banner);
                continue;
            }

            match parser::parse(&line) {
                Ok(frame) => {
                    let event = frame.interpret(&mut self.rotor, &mut self.payload);
                    frames_processed += 1;
                    report.on_event(&event);
                }
                Err(error) => {
                    #[cfg(feature = "logging")]
                    warn!(%line, "malformed frame");
                    malformed_lines += 1;
                    report.on_event(&SessionEvent::Malformed { line, error });
                }
            }
        }

        let summary = SessionSummary {
            message: self.payload.render(),
            frames_processed,
            malformed_lines,
        };

        #[cfg(feature = "logging")]
        debug!(
            frames = summary.frames_processed,
            malformed = summary.malformed_lines,
            "session finished"
        );

        report.on_event(&SessionEvent::Finished {
            message: summary.message.clone(),
            frames_processed: summary.frames_processed,
            malformed_lines: summary.malformed_lines,
        });

        Ok(summary)
    }
}
