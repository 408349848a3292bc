//! CLI subcommand implementations

pub mod compose;
pub mod decode;
pub mod trace;
