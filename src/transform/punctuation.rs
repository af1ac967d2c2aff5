//! Punctuation substitution.

use once_cell::sync::Lazy;

use crate::tables::PUNCTUATION_MAP;
use crate::text::escape::{output_escape, output_unescape};
use crate::text::{apply_rules, Direction, Rule, SubstitutionMap};

static MAP: Lazy<SubstitutionMap> = Lazy::new(|| SubstitutionMap::from_pairs(PUNCTUATION_MAP));

static FORWARD: Lazy<Vec<Rule>> = Lazy::new(|| MAP.rules(Direction::ToPejelagarto));

static INVERSE: Lazy<Vec<Rule>> = Lazy::new(|| MAP.rules(Direction::FromPejelagarto));

/// Rewrites punctuation into its Pejelagarto form.
pub fn to_pejelagarto(input: &str) -> String {
    apply_rules(&output_escape(input), &FORWARD)
}

/// Restores Human punctuation.
pub fn from_pejelagarto(input: &str) -> String {
    output_unescape(&apply_rules(input, &INVERSE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_and_bang() {
        assert_eq!(to_pejelagarto("What?!"), "What‽¡");
        assert_eq!(from_pejelagarto("What‽¡"), "What?!");
    }

    #[test]
    fn test_period_gets_quote() {
        let coded = to_pejelagarto("end.");
        assert_eq!(coded, "end'..");
        assert_eq!(from_pejelagarto(&coded), "end.");
    }

    #[test]
    fn test_coded_form_in_input_round_trips() {
        // a Human interrobang is folded to "?" and must come back
        let input = "why‽ or why?";
        let coded = to_pejelagarto(input);
        assert_eq!(coded, "why? or why‽");
        assert_eq!(from_pejelagarto(&coded), input);
    }

    #[test]
    fn test_literal_quote_is_escaped() {
        let coded = to_pejelagarto("it's");
        assert_eq!(coded, "it\u{00AD}'s");
        assert_eq!(from_pejelagarto(&coded), "it's");
    }

    #[test]
    fn test_dots_round_trip() {
        for input in ["...", "a..b", "'..", "x. y.."] {
            let coded = to_pejelagarto(input);
            assert_eq!(from_pejelagarto(&coded), input, "{:?}", input);
        }
    }
}
