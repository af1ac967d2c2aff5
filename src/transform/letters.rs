//! Letter and conjunction substitution.
//!
//! Conjunctions (whole words and digraphs) and single letters share one
//! layered map, so longer keys always win over the letters they contain.

use once_cell::sync::Lazy;

use crate::tables::{CONJUNCTION_MAP, LETTER_MAP};
use crate::text::escape::{output_escape, output_unescape};
use crate::text::{apply_rules, Direction, Rule, SubstitutionMap};

static MAP: Lazy<SubstitutionMap> =
    Lazy::new(|| SubstitutionMap::from_tables(&[CONJUNCTION_MAP, LETTER_MAP]));

static FORWARD: Lazy<Vec<Rule>> = Lazy::new(|| MAP.rules(Direction::ToPejelagarto));

static INVERSE: Lazy<Vec<Rule>> = Lazy::new(|| MAP.rules(Direction::FromPejelagarto));

/// The combined letter map, for inspection.
pub fn substitution_map() -> &'static SubstitutionMap {
    &MAP
}

/// Rewrites letters and conjunctions into Pejelagarto.
pub fn to_pejelagarto(input: &str) -> String {
    apply_rules(&output_escape(input), &FORWARD)
}

/// Restores Human letters and conjunctions.
pub fn from_pejelagarto(input: &str) -> String {
    output_unescape(&apply_rules(input, &INVERSE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(input: &str) -> String {
        from_pejelagarto(&to_pejelagarto(input))
    }

    #[test]
    fn test_hello_becomes_coded_token() {
        assert_eq!(to_pejelagarto("hello"), "'jjzxz");
        assert_eq!(from_pejelagarto("'jjzxz"), "hello");
    }

    #[test]
    fn test_case_follows_source() {
        assert_eq!(to_pejelagarto("Hello"), "'Jjzxz");
        assert_eq!(to_pejelagarto("The"), "'Zxj");
        assert_eq!(from_pejelagarto("'Zxj"), "The");
    }

    #[test]
    fn test_digraphs_and_letters() {
        let coded = to_pejelagarto("fish and chips");
        assert_eq!(coded, "do'xz umf 'jxobs");
        assert_eq!(from_pejelagarto(&coded), "fish and chips");
    }

    #[test]
    fn test_token_followed_by_letters() {
        // "hola" + "u" must not decode as a longer token
        let coded = to_pejelagarto("holau");
        assert_eq!(coded, "'jjxza");
        assert_eq!(from_pejelagarto(&coded), "holau");
    }

    #[test]
    fn test_literal_quote_survives() {
        let coded = to_pejelagarto("I'm");
        assert_eq!(coded, "O\u{00AD}'n");
        assert_eq!(from_pejelagarto(&coded), "I'm");
    }

    #[test]
    fn test_round_trips() {
        for input in [
            "The quick brown fox jumps over the lazy dog",
            "shell the leg",
            "'ZJC",
            "XX00",
            "jazz xz 'xz",
            "ÉLAN à la carte",
            "\u{212A}elvin",
            "back\\slash \u{FFF0}marker\u{FFF1}",
        ] {
            assert_eq!(round_trip(input), input, "{:?}", input);
        }
    }

    #[test]
    fn test_adjacent_digraphs_each_get_a_quote() {
        // the quoted-word rule only sees quotes from earlier passes
        assert_eq!(to_pejelagarto("chch"), "'jx'jx");
        assert_eq!(from_pejelagarto("'jx'jx"), "chch");
    }

    #[test]
    fn test_quote_adds_one_per_token() {
        let input = "hello world";
        assert_eq!(
            to_pejelagarto(input).chars().count(),
            input.chars().count() + 1
        );
    }
}
