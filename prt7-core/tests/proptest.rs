//! Property-based tests using proptest

use proptest::prelude::*;
use prt7_core::{
    encoder::compose_transcript,
    parser::parse,
    session::{CollectingReport, Session},
    source::VecLineSource,
    Rotor,
};

proptest! {
    #[test]
    fn prop_mapping_is_a_bijection_at_any_offset(delta in -1000i32..1000i32) {
        let mut rotor = Rotor::new();
        rotor.rotate(delta);

        let mut seen = [false; 26];
        for c in 'A'..='Z' {
            let mapped = rotor.map_char(c);
            prop_assert!(mapped.is_ascii_uppercase());
            let slot = (mapped as u8 - b'A') as usize;
            prop_assert!(!seen[slot], "duplicate mapping for {}", c);
            seen[slot] = true;
        }
    }

    #[test]
    fn prop_rotation_is_additive(a in -10_000i32..10_000i32, b in -10_000i32..10_000i32) {
        let mut stepped = Rotor::new();
        stepped.rotate(a);
        stepped.rotate(b);

        let mut combined = Rotor::new();
        combined.rotate(a + b);

        prop_assert_eq!(stepped.head(), combined.head());
    }

    #[test]
    fn prop_non_alphabetic_pass_through(c in any::<char>(), delta in -500i32..500i32) {
        prop_assume!(!c.is_ascii_uppercase());

        let mut rotor = Rotor::new();
        rotor.rotate(delta);

        prop_assert_eq!(rotor.map_char(c), c);
    }

    #[test]
    fn prop_unmap_inverts_map(delta in -500i32..500i32, c in proptest::char::range('A', 'Z')) {
        let mut rotor = Rotor::new();
        rotor.rotate(delta);

        prop_assert_eq!(rotor.map_char(rotor.unmap_char(c)), c);
        prop_assert_eq!(rotor.unmap_char(rotor.map_char(c)), c);
    }

    #[test]
    fn prop_parse_never_panics(line in ".*") {
        // Should either produce a frame or an error, never panic
        let result = parse(&line);
        prop_assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn prop_session_never_panics_on_arbitrary_lines(
        lines in prop::collection::vec(".*", 0..50)
    ) {
        let mut source = VecLineSource::new(lines);
        let mut report = CollectingReport::default();

        let summary = Session::new().run(&mut source, &mut report).unwrap();

        // Whatever came in, the loop terminates and reports coherent counts
        prop_assert!(summary.frames_processed + summary.malformed_lines <= 50);
    }

    #[test]
    fn prop_composed_transcript_decodes_to_message(
        message in "[A-Z ]{0,40}",
        schedule in prop::collection::vec(-100i32..100i32, 0..8)
    ) {
        let lines = compose_transcript(&message, &schedule);

        let mut source = VecLineSource::new(lines);
        let mut report = CollectingReport::default();
        let summary = Session::new().run(&mut source, &mut report).unwrap();

        prop_assert_eq!(summary.message, message);
    }
}
