//! # PRT-7 Core
//!
//! A stateful decoder for the PRT-7 line protocol: newline-delimited text
//! frames carrying either a character to decode through a rotating
//! substitution table, or a rotation instruction for that table.
//!
//! ## Modules
//!
//! - `constants`: Wire format constants and limits
//! - `rotor`: Cyclic substitution table with a rotatable head
//! - `payload`: Append-only accumulator for decoded characters
//! - `frame`: Frame variants and stateful interpretation
//! - `parser`: One line of text into a frame
//! - `encoder`: Frames back into wire lines, transcript composition
//! - `source`: Line source abstraction over serial-style transports
//! - `session`: Sequential read/parse/interpret/report loop

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod parser;
pub mod payload;
pub mod rotor;
pub mod session;
pub mod source;

// Re-export commonly used types
pub use error::FrameError;
pub use frame::{Frame, SessionEvent};
pub use payload::Payload;
pub use rotor::Rotor;
pub use session::{Session, SessionSummary};

/// Result type alias for PRT-7 operations
pub type Result<T> = core::result::Result<T, FrameError>;
