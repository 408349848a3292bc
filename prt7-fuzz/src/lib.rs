//! Fuzzing harnesses for the prt7-core parser and session loop
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_parse

/// Feed arbitrary bytes to the line parser; must never panic
pub fn fuzz_parse(data: &[u8]) {
    if let Ok(line) = core::str::from_utf8(data) {
        let _ = prt7_core::parser::parse(line);
    }
}

/// Run a full session over arbitrary lines; must never panic
pub fn fuzz_session(data: &[u8]) {
    use prt7_core::session::{CollectingReport, Session};
    use prt7_core::source::VecLineSource;

    let text = String::from_utf8_lossy(data);
    let mut source = VecLineSource::new(text.lines().map(str::to_owned));
    let mut report = CollectingReport::default();

    let _ = Session::new().run(&mut source, &mut report);
}
