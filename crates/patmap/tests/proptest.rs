//! Property-based tests for matching guarantees.

use proptest::prelude::*;

use patmap::{MapError, Mapper};

proptest! {
    /// A literal alphanumeric pattern resolves exactly its own text.
    #[test]
    fn literal_pattern_matches_itself(text in "[a-z0-9]{1,12}") {
        let mut mapper = Mapper::new();
        mapper.map(&text, |_| Ok("matched".to_string())).unwrap();

        prop_assert_eq!(mapper.call(&text).unwrap(), "matched");
    }

    /// Matching is full-string: the pattern text plus a suffix never matches.
    #[test]
    fn literal_pattern_rejects_suffixed_input(text in "[a-z0-9]{1,12}") {
        let mut mapper = Mapper::new();
        mapper.map(&text, |_| Ok("matched".to_string())).unwrap();

        let suffixed = format!("{text}!");
        let err = mapper.call(&suffixed).unwrap_err();
        prop_assert!(matches!(err, MapError::NoMatch { .. }), "expected MapError::NoMatch");
    }

    /// Captures reaching the handler equal the substrings in the input.
    #[test]
    fn captures_round_trip_to_the_handler(
        word in "[a-z]{1,10}",
        num in "[0-9]{1,6}",
    ) {
        let mut mapper = Mapper::new();
        mapper
            .map(r"(?P<word>[a-z]+) (?P<num>[0-9]+)", |args| {
                Ok(format!("{}/{}", args.require("word")?, args.require("num")?))
            })
            .unwrap();

        let input = format!("{word} {num}");
        prop_assert_eq!(mapper.call(&input).unwrap(), format!("{word}/{num}"));
    }

    /// Registering the same pattern repeatedly keeps exactly one entry.
    #[test]
    fn duplicate_registration_keeps_one_entry(
        text in "[a-z0-9]{1,12}",
        times in 1usize..5,
    ) {
        let mut mapper = Mapper::new();
        for i in 0..times {
            mapper.map(&text, move |_| Ok(i.to_string())).unwrap();
        }

        prop_assert_eq!(mapper.len(), 1);
        prop_assert_eq!(mapper.call(&text).unwrap(), (times - 1).to_string());
    }
}
